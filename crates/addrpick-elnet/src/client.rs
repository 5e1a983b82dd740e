//! HTTP client for the elnet lookup proxy.

use std::time::Duration;

use addrpick_core::{SupplierCandidate, SupplierInfo};
use reqwest::{Client, Url};

use crate::error::ElnetError;
use crate::types::{AutocompleteEntry, SupplierEntry};

/// Client for the elnet proxy.
///
/// Only constructed when a proxy base is configured; callers model the
/// unconfigured case as the absence of a client.
#[derive(Debug, Clone)]
pub struct ElnetClient {
    client: Client,
    base_url: Url,
}

impl ElnetClient {
    /// Creates a client for the proxy rooted at `proxy_base`.
    ///
    /// # Errors
    ///
    /// Returns [`ElnetError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ElnetError::InvalidBaseUrl`] if `proxy_base` is not an absolute
    /// http(s) URL.
    pub fn new(proxy_base: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ElnetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", proxy_base.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ElnetError::InvalidBaseUrl {
            base_url: proxy_base.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ElnetError::InvalidBaseUrl {
                base_url: proxy_base.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self { client, base_url })
    }

    /// Looks up network-company candidates for a free-text address.
    ///
    /// # Errors
    ///
    /// - [`ElnetError::Http`] on network failure.
    /// - [`ElnetError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ElnetError::Deserialize`] if the body is not a JSON array.
    pub async fn autocomplete(&self, free_text: &str) -> Result<Vec<SupplierCandidate>, ElnetError> {
        let url = self.build_url("autocomplete", "q", free_text)?;
        let entries = self.request_array(&url, "elnet autocomplete").await?;

        let total = entries.len();
        let candidates: Vec<SupplierCandidate> = entries
            .into_iter()
            .map(|raw| match serde_json::from_value::<AutocompleteEntry>(raw.clone()) {
                Ok(entry) => entry.into_candidate(raw),
                // Kept in place so "first candidate" still means the first element.
                Err(_) => SupplierCandidate {
                    external_id: None,
                    raw,
                },
            })
            .collect();
        let without_id = candidates.iter().filter(|c| c.external_id.is_none()).count();
        if without_id > 0 {
            tracing::debug!(total, without_id, "elnet candidates without a supplier id");
        }
        Ok(candidates)
    }

    /// Fetches supplier records for an external supplier id.
    ///
    /// # Errors
    ///
    /// - [`ElnetError::Http`] on network failure.
    /// - [`ElnetError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ElnetError::Deserialize`] if the body is not a JSON array.
    pub async fn supplier_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Vec<SupplierInfo>, ElnetError> {
        let url = self.build_url("supplier", "externalId", external_id)?;
        let entries = self.request_array(&url, "elnet supplier").await?;

        let total = entries.len();
        let suppliers: Vec<SupplierInfo> = entries
            .into_iter()
            .filter_map(|raw| serde_json::from_value::<SupplierEntry>(raw).ok())
            .map(SupplierInfo::from)
            .collect();
        if suppliers.len() < total {
            tracing::debug!(
                external_id,
                total,
                kept = suppliers.len(),
                "skipped malformed supplier records"
            );
        }
        Ok(suppliers)
    }

    /// Builds `{base}/elnet/{endpoint}?{param}={value}`.
    fn build_url(&self, endpoint: &str, param: &str, value: &str) -> Result<Url, ElnetError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ElnetError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(["elnet", endpoint]);
        url.query_pairs_mut().append_pair(param, value);
        Ok(url)
    }

    async fn request_array(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<Vec<serde_json::Value>, ElnetError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElnetError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| ElnetError::Deserialize {
                context: format!("{context} ({url})"),
                source: e,
            })?;
        tracing::debug!(%url, count = entries.len(), "elnet proxy responded");
        Ok(entries)
    }
}
