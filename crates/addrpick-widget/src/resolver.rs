//! Resolution of a chosen suggestion: address detail, marker, and the
//! optional network-operator lookup for the popup.

use std::sync::Mutex;

use addrpick_core::{Coordinates, SupplierInfo};

use crate::error::ResolveError;
use crate::map::MapWidget;
use crate::popup::PopupContent;
use crate::provider::{GeocodeProvider, SupplierProvider};
use crate::state::{lock, WidgetState};
use crate::surface::SearchSurface;

/// Shown to the user when the address detail lookup fails.
pub const LOOKUP_FAILED_ALERT: &str = "An error occurred during the lookup. See the log for details.";

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub position: Coordinates,
    pub popup: PopupContent,
}

/// Borrowed view of the providers needed to resolve a selection.
///
/// `supplier` is `None` when the secondary lookup is not configured; in that
/// case the secondary provider is never called.
pub(crate) struct SelectionResolver<'a, G, S> {
    geocode: &'a G,
    supplier: Option<&'a S>,
}

impl<'a, G: GeocodeProvider, S: SupplierProvider> SelectionResolver<'a, G, S> {
    pub(crate) fn new(geocode: &'a G, supplier: Option<&'a S>) -> Self {
        Self { geocode, supplier }
    }

    /// Resolves `(id, display_text)` and updates the map in `state`.
    ///
    /// The marker is placed only after the detail lookup succeeds. A failed
    /// detail lookup alerts the user and leaves the map untouched; any
    /// failure in the supplier chain only yields the fallback popup. The
    /// popup is bound together with the marker position it describes, so
    /// the last chain to finish owns both.
    pub(crate) async fn resolve<M: MapWidget, U: SearchSurface>(
        &self,
        id: &str,
        display_text: &str,
        state: &Mutex<WidgetState<M, U>>,
    ) -> Result<Resolution, ResolveError> {
        let detail = match self.geocode.detail(id).await {
            Ok(detail) => detail,
            Err(source) => {
                tracing::error!(id, error = %source, "address detail lookup failed");
                lock(state).surface.alert(LOOKUP_FAILED_ALERT);
                return Err(ResolveError::Detail {
                    id: id.to_owned(),
                    source,
                });
            }
        };

        let position = detail.coordinates;
        {
            let mut st = lock(state);
            st.map.place_marker(position);
            st.map.focus(position);
        }
        tracing::debug!(id, %position, "marker placed");

        let supplier = match self.supplier {
            Some(provider) => lookup_supplier(provider, display_text).await,
            None => None,
        };

        let popup = PopupContent::build(display_text, supplier.as_ref());
        {
            // A newer selection or a clear may have moved the marker while
            // the supplier chain ran; the popup goes where its address is.
            let mut st = lock(state);
            if st.map.marker_position() != Some(position) {
                tracing::debug!(id, %position, "marker re-placed for popup");
                st.map.place_marker(position);
                st.map.focus(position);
            }
            st.map.show_popup(&popup);
        }

        Ok(Resolution { position, popup })
    }
}

/// Looks up the network operator for an address line.
///
/// Takes the first autocomplete candidate, then the first supplier record for
/// its external id. Every failure or empty step ends in `None`.
pub async fn lookup_supplier<S: SupplierProvider>(
    provider: &S,
    address_text: &str,
) -> Option<SupplierInfo> {
    let candidates = match provider.autocomplete(address_text).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!(address = address_text, error = %e, "supplier autocomplete failed");
            return None;
        }
    };

    let Some(best) = candidates.into_iter().next() else {
        tracing::debug!(address = address_text, "no supplier candidate");
        return None;
    };
    let Some(external_id) = best.external_id else {
        tracing::debug!(address = address_text, "supplier candidate has no external id");
        return None;
    };

    match provider.supplier(&external_id).await {
        Ok(suppliers) => {
            let found = suppliers.into_iter().next();
            if found.is_none() {
                tracing::debug!(external_id = %external_id, "no supplier record");
            }
            found
        }
        Err(e) => {
            tracing::warn!(external_id = %external_id, error = %e, "supplier lookup failed");
            None
        }
    }
}
