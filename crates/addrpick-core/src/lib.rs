//! Shared domain types and configuration for the address-search widget.

mod address;
mod app_config;
mod config;
mod supplier;

use thiserror::Error;

pub use address::{AddressDetail, Coordinates, SuggestionItem};
pub use app_config::{AppConfig, DEFAULT_DAWA_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use supplier::{SupplierCandidate, SupplierInfo};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
