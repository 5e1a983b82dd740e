//! Provider seams. The widget talks to the network only through these two
//! traits; the DAWA and elnet clients implement them.

use std::future::Future;

use addrpick_core::{AddressDetail, AppConfig, SuggestionItem, SupplierCandidate, SupplierInfo};
use addrpick_dawa::DawaClient;
use addrpick_elnet::ElnetClient;

use crate::error::{ProviderError, SetupError};

/// The primary geocode provider.
pub trait GeocodeProvider: Send + Sync + 'static {
    /// Ranked autocomplete candidates for a partial address.
    fn autocomplete(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionItem>, ProviderError>> + Send;

    /// Full address record for a candidate id.
    fn detail(&self, id: &str) -> impl Future<Output = Result<AddressDetail, ProviderError>> + Send;
}

/// The optional secondary provider that maps an address to its network
/// operator.
pub trait SupplierProvider: Send + Sync + 'static {
    fn autocomplete(
        &self,
        free_text: &str,
    ) -> impl Future<Output = Result<Vec<SupplierCandidate>, ProviderError>> + Send;

    fn supplier(
        &self,
        external_id: &str,
    ) -> impl Future<Output = Result<Vec<SupplierInfo>, ProviderError>> + Send;
}

impl GeocodeProvider for DawaClient {
    async fn autocomplete(&self, query: &str) -> Result<Vec<SuggestionItem>, ProviderError> {
        Ok(DawaClient::autocomplete(self, query).await?)
    }

    async fn detail(&self, id: &str) -> Result<AddressDetail, ProviderError> {
        Ok(self.address(id).await?)
    }
}

impl SupplierProvider for ElnetClient {
    async fn autocomplete(&self, free_text: &str) -> Result<Vec<SupplierCandidate>, ProviderError> {
        Ok(ElnetClient::autocomplete(self, free_text).await?)
    }

    async fn supplier(&self, external_id: &str) -> Result<Vec<SupplierInfo>, ProviderError> {
        Ok(self.supplier_by_external_id(external_id).await?)
    }
}

/// Builds the primary client and, only if a proxy base is configured, the
/// secondary one.
///
/// # Errors
///
/// Returns [`SetupError`] if a client cannot be constructed.
pub fn build_providers(config: &AppConfig) -> Result<(DawaClient, Option<ElnetClient>), SetupError> {
    let dawa = DawaClient::new(
        &config.dawa_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let elnet = match config.elnet_proxy_base.as_deref() {
        Some(base) => Some(ElnetClient::new(
            base,
            config.request_timeout_secs,
            &config.user_agent,
        )?),
        None => {
            tracing::info!("elnet proxy not configured; network operator lookup disabled");
            None
        }
    };

    Ok((dawa, elnet))
}
