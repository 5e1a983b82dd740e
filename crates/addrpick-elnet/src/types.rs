//! Proxy response types. Field names follow the upstream PascalCase JSON.

use addrpick_core::{SupplierCandidate, SupplierInfo};
use serde::Deserialize;

/// One element of `/elnet/autocomplete`.
#[derive(Debug, Deserialize)]
pub struct AutocompleteEntry {
    /// Sometimes a string, sometimes a number upstream.
    #[serde(rename = "ExternalSupplierId", default)]
    pub external_supplier_id: Option<serde_json::Value>,
}

impl AutocompleteEntry {
    /// The external supplier id as text, if present and non-blank.
    #[must_use]
    pub fn external_id(&self) -> Option<String> {
        match self.external_supplier_id.as_ref()? {
            serde_json::Value::String(s) => non_blank(Some(s.clone())),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_candidate(self, raw: serde_json::Value) -> SupplierCandidate {
        SupplierCandidate {
            external_id: self.external_id(),
            raw,
        }
    }
}

/// One element of `/elnet/supplier`.
#[derive(Debug, Deserialize)]
pub struct SupplierEntry {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "Website", default)]
    pub website: Option<String>,
    #[serde(rename = "LogoUrl", default)]
    pub logo_url: Option<String>,
}

impl From<SupplierEntry> for SupplierInfo {
    fn from(entry: SupplierEntry) -> Self {
        SupplierInfo {
            name: entry.name.unwrap_or_default().trim().to_owned(),
            phone_number: non_blank(entry.phone_number),
            website: non_blank(entry.website),
            logo_url: non_blank(entry.logo_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_id_accepts_string_and_number() {
        let s: AutocompleteEntry =
            serde_json::from_value(serde_json::json!({"ExternalSupplierId": "5790000705689"}))
                .unwrap();
        assert_eq!(s.external_id().as_deref(), Some("5790000705689"));

        let n: AutocompleteEntry =
            serde_json::from_value(serde_json::json!({"ExternalSupplierId": 344})).unwrap();
        assert_eq!(n.external_id().as_deref(), Some("344"));
    }

    #[test]
    fn external_id_blank_or_null_is_none() {
        let blank: AutocompleteEntry =
            serde_json::from_value(serde_json::json!({"ExternalSupplierId": "  "})).unwrap();
        assert!(blank.external_id().is_none());

        let null: AutocompleteEntry =
            serde_json::from_value(serde_json::json!({"ExternalSupplierId": null})).unwrap();
        assert!(null.external_id().is_none());

        let absent: AutocompleteEntry = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(absent.external_id().is_none());
    }

    #[test]
    fn supplier_entry_drops_empty_optional_fields() {
        let entry: SupplierEntry = serde_json::from_value(serde_json::json!({
            "Name": "Radius Elnet A/S",
            "PhoneNumber": "",
            "Website": "radiuselnet.dk",
            "LogoUrl": null
        }))
        .unwrap();
        let info = SupplierInfo::from(entry);
        assert_eq!(info.name, "Radius Elnet A/S");
        assert!(info.phone_number.is_none());
        assert_eq!(info.website.as_deref(), Some("radiuselnet.dk"));
        assert!(info.logo_url.is_none());
    }
}
