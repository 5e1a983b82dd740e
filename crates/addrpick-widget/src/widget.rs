//! The address search widget: input handling, list navigation, selection,
//! and reset.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use addrpick_core::{AppConfig, SuggestionItem};
use addrpick_dawa::DawaClient;
use addrpick_elnet::ElnetClient;
use tokio::task::JoinHandle;

use crate::debounce::{Debouncer, DEBOUNCE_QUIET_PERIOD};
use crate::error::{ResolveError, SetupError};
use crate::fetcher::{fetch_suggestions, FetchOutcome, Query};
use crate::list::{ListAction, NavKey, ResultsView};
use crate::map::{MapAdapter, MapWidget};
use crate::provider::{build_providers, GeocodeProvider, SupplierProvider};
use crate::resolver::{Resolution, SelectionResolver};
use crate::state::{lock, WidgetState};
use crate::surface::SearchSurface;

/// A widget wired to the DAWA and elnet HTTP clients.
pub type LiveAddressSearch<M, U> = AddressSearch<DawaClient, ElnetClient, M, U>;

/// A running selection: detail lookup, marker move, and popup.
pub type SelectionTask = JoinHandle<Result<Resolution, ResolveError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    pub debounce: Duration,
    /// Rows visible in the results panel before it scrolls.
    pub result_rows: usize,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            debounce: DEBOUNCE_QUIET_PERIOD,
            result_rows: 8,
        }
    }
}

/// Keys delivered from the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

/// What a key press did.
#[derive(Debug)]
pub enum KeyOutcome {
    /// The key had no effect; the input box should handle it normally.
    Ignored,
    /// The active row moved; the caret should not move.
    Moved(usize),
    Hidden,
    /// Enter chose the active row.
    Selected(SelectionTask),
}

impl KeyOutcome {
    /// Whether the input box's default handling should be suppressed.
    #[must_use]
    pub fn consumed(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Result of one debounced search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Fewer than three characters; nothing was sent.
    BelowThreshold,
    /// The list now shows this many rows.
    Shown(usize),
    /// The provider found nothing; the list is hidden.
    Empty,
    /// The request failed; the list is hidden.
    Failed,
    /// A newer search or a dismissal superseded this one; the response was
    /// dropped.
    Stale,
}

struct Inner<G, S, M: MapWidget, U: SearchSurface> {
    geocode: G,
    supplier: Option<S>,
    state: Mutex<WidgetState<M, U>>,
    debouncer: Debouncer,
}

/// Handle to a widget. Clones share the same state.
///
/// Every method that starts background work must be called from within a
/// tokio runtime.
pub struct AddressSearch<G, S, M: MapWidget, U: SearchSurface> {
    inner: Arc<Inner<G, S, M, U>>,
}

impl<G, S, M: MapWidget, U: SearchSurface> Clone for AddressSearch<G, S, M, U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G, S, M, U> AddressSearch<G, S, M, U>
where
    G: GeocodeProvider,
    S: SupplierProvider,
    M: MapWidget,
    U: SearchSurface,
{
    /// Builds the widget. Pass `None` for `supplier` to turn the network
    /// operator lookup off.
    pub fn new(geocode: G, supplier: Option<S>, map: M, surface: U, options: WidgetOptions) -> Self {
        let mut state = WidgetState::new(map, surface, options.result_rows);
        state.surface.set_clear_visible(false);
        state.render();
        Self {
            inner: Arc::new(Inner {
                geocode,
                supplier,
                state: Mutex::new(state),
                debouncer: Debouncer::new(options.debounce),
            }),
        }
    }

    /// A keystroke changed the input to `text`.
    ///
    /// The search runs once typing pauses, with whatever the input holds then.
    pub fn input(&self, text: &str) {
        lock(&self.inner.state).query = text.to_owned();
        // Weak, so dropping the last handle tears the widget down and cancels
        // the timer instead of the timer keeping the widget alive.
        let weak = Arc::downgrade(&self.inner);
        self.inner.debouncer.schedule(move || async move {
            if let Some(inner) = weak.upgrade() {
                AddressSearch { inner }.search_now().await;
            }
        });
    }

    /// Runs the search for the current input immediately.
    pub async fn search_now(&self) -> SearchOutcome {
        let (query, token) = {
            let mut st = lock(&self.inner.state);
            let query = Query::new(&st.query);
            st.surface.set_clear_visible(!query.is_empty());
            if !query.meets_threshold() {
                st.dismiss_list();
                return SearchOutcome::BelowThreshold;
            }
            let token = st.tokens.issue();
            (query, token)
        };

        let outcome = fetch_suggestions(&self.inner.geocode, &query).await;

        let mut st = lock(&self.inner.state);
        if !st.tokens.is_current(token) {
            tracing::debug!(query = query.as_str(), "discarding superseded suggestions");
            return SearchOutcome::Stale;
        }
        match outcome {
            FetchOutcome::Loaded(items) if items.is_empty() => {
                st.hide_list();
                SearchOutcome::Empty
            }
            FetchOutcome::Loaded(items) => {
                st.show_list(items);
                SearchOutcome::Shown(st.list.len())
            }
            FetchOutcome::Failed(e) => {
                tracing::warn!(query = query.as_str(), error = %e, "address autocomplete failed");
                st.hide_list();
                SearchOutcome::Failed
            }
            FetchOutcome::Skipped => {
                st.hide_list();
                SearchOutcome::BelowThreshold
            }
        }
    }

    pub fn key(&self, key: Key) -> KeyOutcome {
        let nav = match key {
            Key::ArrowDown => NavKey::ArrowDown,
            Key::ArrowUp => NavKey::ArrowUp,
            Key::Enter => NavKey::Enter,
            Key::Escape => NavKey::Escape,
            Key::Other => return KeyOutcome::Ignored,
        };

        let mut st = lock(&self.inner.state);
        match st.list.key(nav) {
            ListAction::None if nav == NavKey::Escape => {
                // Nothing shown, but a search may still be in flight.
                st.dismiss_list();
                KeyOutcome::Ignored
            }
            ListAction::None => KeyOutcome::Ignored,
            ListAction::Moved(index) => {
                st.render();
                KeyOutcome::Moved(index)
            }
            ListAction::Hidden => {
                st.dismiss_list();
                KeyOutcome::Hidden
            }
            ListAction::Select(item) => KeyOutcome::Selected(self.select(&mut st, item)),
        }
    }

    /// A suggestion row was clicked.
    ///
    /// Returns `None` if no row is shown at `index`.
    pub fn click_item(&self, index: usize) -> Option<SelectionTask> {
        let mut st = lock(&self.inner.state);
        let item = st.list.click(index)?;
        Some(self.select(&mut st, item))
    }

    /// A click landed outside the input and the results panel.
    pub fn outside_click(&self) {
        lock(&self.inner.state).dismiss_list();
    }

    /// Empties the input, hides the list, and removes the marker and popup.
    pub fn clear(&self) {
        self.inner.debouncer.cancel();
        let mut st = lock(&self.inner.state);
        st.query.clear();
        st.surface.set_query_text("");
        st.surface.set_clear_visible(false);
        st.dismiss_list();
        st.map.clear();
    }

    /// Stops the pending debounce timer. In-flight requests still complete.
    pub fn shutdown(&self) {
        self.inner.debouncer.cancel();
    }

    /// Whether selections chain into the network operator lookup.
    #[must_use]
    pub fn secondary_enabled(&self) -> bool {
        self.inner.supplier.is_some()
    }

    /// Current input text, untrimmed.
    #[must_use]
    pub fn query(&self) -> String {
        lock(&self.inner.state).query.clone()
    }

    #[must_use]
    pub fn results_view(&self) -> ResultsView {
        lock(&self.inner.state).list.view()
    }

    /// Runs `f` with the map adapter.
    pub fn with_map<R>(&self, f: impl FnOnce(&MapAdapter<M>) -> R) -> R {
        f(&lock(&self.inner.state).map)
    }

    /// Runs `f` with the UI surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&U) -> R) -> R {
        f(&lock(&self.inner.state).surface)
    }

    /// Hides the list, puts the chosen text into the input, and starts the
    /// resolution on its own task.
    fn select(&self, st: &mut WidgetState<M, U>, item: SuggestionItem) -> SelectionTask {
        st.dismiss_list();
        st.query.clone_from(&item.display_text);
        st.surface.set_query_text(&item.display_text);
        st.surface.set_clear_visible(true);
        tracing::info!(id = %item.id, address = %item.display_text, "address selected");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let resolver = SelectionResolver::new(&inner.geocode, inner.supplier.as_ref());
            resolver
                .resolve(&item.id, &item.display_text, &inner.state)
                .await
        })
    }
}

impl<M: MapWidget, U: SearchSurface> LiveAddressSearch<M, U> {
    /// Builds a widget backed by the DAWA client and, when a proxy base is
    /// configured, the elnet client.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if either HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig, map: M, surface: U) -> Result<Self, SetupError> {
        let (dawa, elnet) = build_providers(config)?;
        let options = WidgetOptions {
            result_rows: config.result_rows,
            ..WidgetOptions::default()
        };
        Ok(Self::new(dawa, elnet, map, surface, options))
    }
}
