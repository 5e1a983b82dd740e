use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A provider call that did not produce a usable response: the endpoint was
/// unreachable, answered with a non-success status, or sent a body of the
/// wrong shape. An empty but valid response is not an error.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ProviderError {
    #[must_use]
    pub fn transport(provider: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            provider,
            source: source.into(),
        }
    }
}

impl From<addrpick_dawa::DawaError> for ProviderError {
    fn from(err: addrpick_dawa::DawaError) -> Self {
        Self::transport("dawa", err)
    }
}

impl From<addrpick_elnet::ElnetError> for ProviderError {
    fn from(err: addrpick_elnet::ElnetError) -> Self {
        Self::transport("elnet", err)
    }
}

/// Why a selection could not be resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The address detail lookup failed; nothing on the map was touched.
    #[error("address detail lookup for {id} failed: {source}")]
    Detail {
        id: String,
        #[source]
        source: ProviderError,
    },
}

/// The providers could not be built from configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("geocode client: {0}")]
    Dawa(#[from] addrpick_dawa::DawaError),

    #[error("elnet client: {0}")]
    Elnet(#[from] addrpick_elnet::ElnetError),
}
