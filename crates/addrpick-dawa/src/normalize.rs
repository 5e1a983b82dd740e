//! Conversion from DAWA wire types into the shared domain types.

use addrpick_core::{AddressDetail, Coordinates, SuggestionItem};

use crate::error::DawaError;
use crate::types::{AddressRecord, AutocompleteHit};

/// Builds a [`SuggestionItem`] from an autocomplete hit and its raw JSON.
#[must_use]
pub fn normalize_hit(hit: AutocompleteHit, raw: serde_json::Value) -> SuggestionItem {
    SuggestionItem {
        id: hit.adresse.id,
        display_text: hit.tekst,
        raw,
    }
}

/// Builds an [`AddressDetail`] from a full address record.
///
/// DAWA sends the access point as `[lon, lat]`; the result is in mapping
/// order.
///
/// # Errors
///
/// Returns [`DawaError::MissingCoordinates`] if the access point does not
/// carry exactly two finite numbers.
pub fn normalize_address(
    record: AddressRecord,
    raw: serde_json::Value,
) -> Result<AddressDetail, DawaError> {
    let point = match record.adgangsadresse.adgangspunkt.koordinater.as_slice() {
        [lon, lat] if lon.is_finite() && lat.is_finite() => [*lon, *lat],
        _ => return Err(DawaError::MissingCoordinates { id: record.id }),
    };

    Ok(AddressDetail {
        id: record.id,
        coordinates: Coordinates::from_lon_lat(point),
        raw,
    })
}
