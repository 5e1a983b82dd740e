//! DAWA response types.
//!
//! Only the fields the widget reads are modelled; the full record is kept
//! alongside as a raw `serde_json::Value`.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// /adresser/autocomplete
// ---------------------------------------------------------------------------

/// One element of the `/adresser/autocomplete` array.
#[derive(Debug, Deserialize)]
pub struct AutocompleteHit {
    /// Human-readable address line, e.g. `"Rådhuspladsen 1, 1550 København V"`.
    pub tekst: String,
    pub adresse: AutocompleteAddress,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteAddress {
    pub id: String,
}

// ---------------------------------------------------------------------------
// /adresser/{id}
// ---------------------------------------------------------------------------

/// Full address record from `/adresser/{id}`.
#[derive(Debug, Deserialize)]
pub struct AddressRecord {
    pub id: String,
    #[serde(default)]
    pub adressebetegnelse: Option<String>,
    pub adgangsadresse: AccessAddress,
}

#[derive(Debug, Deserialize)]
pub struct AccessAddress {
    pub adgangspunkt: AccessPoint,
}

/// The access point of an address.
#[derive(Debug, Deserialize)]
pub struct AccessPoint {
    /// `[longitude, latitude]` in WGS84.
    #[serde(default)]
    pub koordinater: Vec<f64>,
}
