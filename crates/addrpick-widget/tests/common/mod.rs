//! In-memory providers, map, and surface shared by the widget tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use addrpick_core::{AddressDetail, Coordinates, SuggestionItem, SupplierCandidate, SupplierInfo};
use addrpick_widget::{
    AddressSearch, GeocodeProvider, MapWidget, ProviderError, ResultsView, SearchSurface,
    SupplierProvider, WidgetOptions,
};
use serde_json::json;

pub type TestWidget = AddressSearch<FakeGeocoder, FakeSupplier, RecordingMap, RecordingSurface>;

pub fn suggestion(id: &str, text: &str) -> SuggestionItem {
    SuggestionItem {
        id: id.to_owned(),
        display_text: text.to_owned(),
        raw: json!({ "tekst": text, "adresse": { "id": id } }),
    }
}

/// `count` suggestions `"{prefix} {n}"` with ids `"{prefix}-{n}"`.
pub fn numbered(prefix: &str, count: usize) -> Vec<SuggestionItem> {
    (1..=count)
        .map(|n| suggestion(&format!("{prefix}-{n}"), &format!("{prefix} {n}")))
        .collect()
}

pub fn radius_elnet() -> SupplierInfo {
    SupplierInfo {
        name: "Radius Elnet A/S".to_owned(),
        phone_number: Some("70 15 15 60".to_owned()),
        website: Some("www.radiuselnet.dk".to_owned()),
        logo_url: Some("https://cdn.example.com/radius.png".to_owned()),
    }
}

pub fn widget(geocoder: &FakeGeocoder, supplier: Option<&FakeSupplier>) -> TestWidget {
    AddressSearch::new(
        geocoder.clone(),
        supplier.cloned(),
        RecordingMap::default(),
        RecordingSurface::default(),
        WidgetOptions::default(),
    )
}

/// Lets the debounce window elapse and any undelayed request finish.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(250)).await;
}

// ---------------------------------------------------------------------------
// Geocoder
// ---------------------------------------------------------------------------

#[derive(Default)]
struct GeocoderState {
    suggestions: HashMap<String, Vec<SuggestionItem>>,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    details: HashMap<String, Coordinates>,
    detail_delay: Option<Duration>,
    autocomplete_calls: Vec<String>,
    detail_calls: Vec<String>,
}

/// Scripted geocoder. Unknown queries return no suggestions; unknown ids fail
/// the detail lookup.
#[derive(Clone, Default)]
pub struct FakeGeocoder {
    state: Arc<Mutex<GeocoderState>>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestions(self, query: &str, items: Vec<SuggestionItem>) -> Self {
        self.state
            .lock()
            .unwrap()
            .suggestions
            .insert(query.to_owned(), items);
        self
    }

    /// Holds the response for `query` back by `delay`.
    pub fn with_delay(self, query: &str, delay: Duration) -> Self {
        self.state
            .lock()
            .unwrap()
            .delays
            .insert(query.to_owned(), delay);
        self
    }

    pub fn failing(self, query: &str) -> Self {
        self.state.lock().unwrap().failing.insert(query.to_owned());
        self
    }

    pub fn with_detail(self, id: &str, at: Coordinates) -> Self {
        self.state
            .lock()
            .unwrap()
            .details
            .insert(id.to_owned(), at);
        self
    }

    pub fn with_detail_delay(self, delay: Duration) -> Self {
        self.state.lock().unwrap().detail_delay = Some(delay);
        self
    }

    pub fn autocomplete_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().autocomplete_calls.clone()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().detail_calls.clone()
    }
}

impl GeocodeProvider for FakeGeocoder {
    async fn autocomplete(&self, query: &str) -> Result<Vec<SuggestionItem>, ProviderError> {
        let (delay, failing, items) = {
            let mut state = self.state.lock().unwrap();
            state.autocomplete_calls.push(query.to_owned());
            (
                state.delays.get(query).copied(),
                state.failing.contains(query),
                state.suggestions.get(query).cloned().unwrap_or_default(),
            )
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if failing {
            return Err(ProviderError::transport("fake", "connection reset"));
        }
        Ok(items)
    }

    async fn detail(&self, id: &str) -> Result<AddressDetail, ProviderError> {
        let (delay, found) = {
            let mut state = self.state.lock().unwrap();
            state.detail_calls.push(id.to_owned());
            (state.detail_delay, state.details.get(id).copied())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let coordinates =
            found.ok_or_else(|| ProviderError::transport("fake", format!("no address {id}")))?;
        Ok(AddressDetail {
            id: id.to_owned(),
            coordinates,
            raw: json!({ "id": id }),
        })
    }
}

// ---------------------------------------------------------------------------
// Supplier
// ---------------------------------------------------------------------------

#[derive(Default)]
struct SupplierState {
    candidates: HashMap<String, Vec<SupplierCandidate>>,
    suppliers: HashMap<String, Vec<SupplierInfo>>,
    autocomplete_delays: HashMap<String, Duration>,
    fail_autocomplete: bool,
    fail_supplier: bool,
    autocomplete_calls: Vec<String>,
    supplier_calls: Vec<String>,
}

/// Scripted secondary provider. Unknown inputs return empty arrays.
#[derive(Clone, Default)]
pub struct FakeSupplier {
    state: Arc<Mutex<SupplierState>>,
}

impl FakeSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidate(self, address: &str, external_id: Option<&str>) -> Self {
        let candidate = SupplierCandidate {
            external_id: external_id.map(str::to_owned),
            raw: json!({ "ExternalSupplierId": external_id }),
        };
        self.state
            .lock()
            .unwrap()
            .candidates
            .entry(address.to_owned())
            .or_default()
            .push(candidate);
        self
    }

    pub fn with_supplier(self, external_id: &str, info: SupplierInfo) -> Self {
        self.state
            .lock()
            .unwrap()
            .suppliers
            .entry(external_id.to_owned())
            .or_default()
            .push(info);
        self
    }

    /// Holds the candidate response for `address` back by `delay`.
    pub fn with_autocomplete_delay(self, address: &str, delay: Duration) -> Self {
        self.state
            .lock()
            .unwrap()
            .autocomplete_delays
            .insert(address.to_owned(), delay);
        self
    }

    pub fn failing_autocomplete(self) -> Self {
        self.state.lock().unwrap().fail_autocomplete = true;
        self
    }

    pub fn failing_supplier(self) -> Self {
        self.state.lock().unwrap().fail_supplier = true;
        self
    }

    pub fn autocomplete_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().autocomplete_calls.clone()
    }

    pub fn supplier_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().supplier_calls.clone()
    }

    pub fn total_calls(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.autocomplete_calls.len() + state.supplier_calls.len()
    }
}

impl SupplierProvider for FakeSupplier {
    async fn autocomplete(&self, free_text: &str) -> Result<Vec<SupplierCandidate>, ProviderError> {
        let (delay, failing, candidates) = {
            let mut state = self.state.lock().unwrap();
            state.autocomplete_calls.push(free_text.to_owned());
            (
                state.autocomplete_delays.get(free_text).copied(),
                state.fail_autocomplete,
                state.candidates.get(free_text).cloned().unwrap_or_default(),
            )
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if failing {
            return Err(ProviderError::transport("fake-elnet", "proxy unavailable"));
        }
        Ok(candidates)
    }

    async fn supplier(&self, external_id: &str) -> Result<Vec<SupplierInfo>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.supplier_calls.push(external_id.to_owned());
        if state.fail_supplier {
            return Err(ProviderError::transport("fake-elnet", "proxy unavailable"));
        }
        Ok(state.suppliers.get(external_id).cloned().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Map and surface
// ---------------------------------------------------------------------------

/// Map that records every call. Markers are numbered from 1.
#[derive(Debug, Default)]
pub struct RecordingMap {
    next_id: u32,
    /// Markers currently on the map and their positions.
    pub live: Vec<(u32, Coordinates)>,
    pub views: Vec<(Coordinates, u8)>,
    /// `(marker, html, max_width)` for every bound popup.
    pub popups: Vec<(u32, String, u32)>,
    pub opened: u32,
    pub closed: u32,
}

impl RecordingMap {
    pub fn markers_created(&self) -> u32 {
        self.next_id
    }

    pub fn last_popup_html(&self) -> Option<&str> {
        self.popups.last().map(|(_, html, _)| html.as_str())
    }
}

impl MapWidget for RecordingMap {
    type Marker = u32;

    fn add_marker(&mut self, at: Coordinates) -> u32 {
        self.next_id += 1;
        self.live.push((self.next_id, at));
        self.next_id
    }

    fn move_marker(&mut self, marker: &mut u32, to: Coordinates) {
        for (id, position) in &mut self.live {
            if *id == *marker {
                *position = to;
            }
        }
    }

    fn remove_marker(&mut self, marker: u32) {
        self.live.retain(|(id, _)| *id != marker);
    }

    fn set_view(&mut self, center: Coordinates, zoom: u8) {
        self.views.push((center, zoom));
    }

    fn bind_popup(&mut self, marker: &mut u32, html: &str, max_width: u32) {
        self.popups.push((*marker, html.to_owned(), max_width));
    }

    fn open_popup(&mut self, _marker: &mut u32) {
        self.opened += 1;
    }

    fn close_popup(&mut self) {
        self.closed += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub query_text: String,
    pub clear_visible: bool,
    pub view: ResultsView,
    pub renders: usize,
    pub alerts: Vec<String>,
}

impl SearchSurface for RecordingSurface {
    fn set_query_text(&mut self, text: &str) {
        text.clone_into(&mut self.query_text);
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible = visible;
    }

    fn render_results(&mut self, view: &ResultsView) {
        self.view = view.clone();
        self.renders += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}
