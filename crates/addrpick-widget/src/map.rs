//! Single-marker façade over the embedder's map.

use addrpick_core::Coordinates;

use crate::popup::PopupContent;

/// Initial view: all of Denmark.
pub const INITIAL_CENTER: Coordinates = Coordinates {
    lat: 56.2639,
    lon: 9.5018,
};
pub const INITIAL_ZOOM: u8 = 7;
/// Zoom used when centring on a chosen address.
pub const SELECTION_ZOOM: u8 = 16;
pub const POPUP_MAX_WIDTH: u32 = 320;

/// The map widget the embedder provides.
///
/// `Marker` is the widget's own handle type. [`MapAdapter`] owns at most one
/// handle at a time and hands it back only to move, decorate, or remove it.
pub trait MapWidget: Send + 'static {
    type Marker: Send;

    fn add_marker(&mut self, at: Coordinates) -> Self::Marker;
    fn move_marker(&mut self, marker: &mut Self::Marker, to: Coordinates);
    fn remove_marker(&mut self, marker: Self::Marker);
    fn set_view(&mut self, center: Coordinates, zoom: u8);
    fn bind_popup(&mut self, marker: &mut Self::Marker, html: &str, max_width: u32);
    fn open_popup(&mut self, marker: &mut Self::Marker);
    fn close_popup(&mut self);
}

pub struct MapAdapter<M: MapWidget> {
    map: M,
    marker: Option<(M::Marker, Coordinates)>,
}

impl<M: MapWidget> MapAdapter<M> {
    /// Wraps `map` and sets the initial view.
    pub fn new(mut map: M) -> Self {
        map.set_view(INITIAL_CENTER, INITIAL_ZOOM);
        Self { map, marker: None }
    }

    /// Moves the marker to `at`, creating it on first use.
    pub fn place_marker(&mut self, at: Coordinates) {
        match &mut self.marker {
            Some((marker, position)) => {
                self.map.move_marker(marker, at);
                *position = at;
            }
            None => {
                let marker = self.map.add_marker(at);
                self.marker = Some((marker, at));
            }
        }
    }

    /// Centres the view on `at` at [`SELECTION_ZOOM`].
    pub fn focus(&mut self, at: Coordinates) {
        self.map.set_view(at, SELECTION_ZOOM);
    }

    /// Attaches `content` to the marker and opens it.
    ///
    /// Returns `false` when there is no marker to attach to or the content
    /// fails to render.
    pub fn show_popup(&mut self, content: &PopupContent) -> bool {
        let Some((marker, _)) = &mut self.marker else {
            tracing::warn!("popup requested without a marker");
            return false;
        };
        let html = match content.to_html() {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "popup render failed");
                return false;
            }
        };
        self.map.bind_popup(marker, &html, POPUP_MAX_WIDTH);
        self.map.open_popup(marker);
        true
    }

    /// Removes the marker, if any, and closes any open popup.
    pub fn clear(&mut self) {
        if let Some((marker, _)) = self.marker.take() {
            self.map.remove_marker(marker);
        }
        self.map.close_popup();
    }

    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    #[must_use]
    pub fn marker_position(&self) -> Option<Coordinates> {
        self.marker.as_ref().map(|(_, position)| *position)
    }

    #[must_use]
    pub fn widget(&self) -> &M {
        &self.map
    }
}
