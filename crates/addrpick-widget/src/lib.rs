//! Headless address search-and-select widget.
//!
//! A user types into a search box; after a quiet period the text is sent to
//! the primary geocode provider and the ranked suggestions are shown in a
//! keyboard/mouse navigable list. Choosing a suggestion resolves the full
//! address, moves the single map marker there and, when a secondary provider
//! is configured, looks up the network operator for the popup.
//!
//! The map and the UI shell are supplied by the embedder through
//! [`MapWidget`] and [`SearchSurface`].

mod debounce;
mod error;
mod fetcher;
mod list;
mod map;
mod popup;
mod provider;
mod resolver;
mod state;
mod surface;
mod widget;

pub use debounce::{Debouncer, DEBOUNCE_QUIET_PERIOD};
pub use error::{ProviderError, ResolveError, SetupError};
pub use fetcher::{fetch_suggestions, FetchOutcome, Query, QueryToken, QueryTokens, MIN_QUERY_CHARS};
pub use list::{ListAction, ListState, NavKey, ResultRow, ResultsView, SuggestionList, MAX_RESULTS};
pub use map::{MapAdapter, MapWidget, INITIAL_CENTER, INITIAL_ZOOM, POPUP_MAX_WIDTH, SELECTION_ZOOM};
pub use popup::{website_href, NetworkSection, PopupContent, SupplierFields};
pub use provider::{build_providers, GeocodeProvider, SupplierProvider};
pub use resolver::{lookup_supplier, Resolution, LOOKUP_FAILED_ALERT};
pub use surface::SearchSurface;
pub use widget::{
    AddressSearch, Key, KeyOutcome, LiveAddressSearch, SearchOutcome, SelectionTask, WidgetOptions,
};
