//! Utility-operator (network supplier) types from the secondary provider.

use serde::{Deserialize, Serialize};

/// A match from the secondary provider's free-text autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierCandidate {
    /// Identifier used for the supplier detail lookup. Candidates without one
    /// cannot be resolved further.
    pub external_id: Option<String>,
    pub raw: serde_json::Value,
}

/// Supplier metadata shown in the popup.
///
/// Optional fields are `None` when the provider left them out or sent an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierInfo {
    pub name: String,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}
