//! The widget's mutable state, shared between the input handlers and the
//! tasks they spawn.

use std::sync::{Mutex, MutexGuard, PoisonError};

use addrpick_core::SuggestionItem;

use crate::fetcher::QueryTokens;
use crate::list::SuggestionList;
use crate::map::{MapAdapter, MapWidget};
use crate::surface::SearchSurface;

pub(crate) struct WidgetState<M: MapWidget, U: SearchSurface> {
    /// Raw text of the input box, as last typed or set.
    pub(crate) query: String,
    pub(crate) tokens: QueryTokens,
    pub(crate) list: SuggestionList,
    pub(crate) map: MapAdapter<M>,
    pub(crate) surface: U,
}

impl<M: MapWidget, U: SearchSurface> WidgetState<M, U> {
    pub(crate) fn new(map: M, surface: U, window_rows: usize) -> Self {
        Self {
            query: String::new(),
            tokens: QueryTokens::new(),
            list: SuggestionList::new(window_rows),
            map: MapAdapter::new(map),
            surface,
        }
    }

    pub(crate) fn render(&mut self) {
        let view = self.list.view();
        self.surface.render_results(&view);
    }

    pub(crate) fn show_list(&mut self, items: Vec<SuggestionItem>) {
        self.list.show(items);
        self.render();
    }

    pub(crate) fn hide_list(&mut self) {
        self.list.hide();
        self.render();
    }

    /// Hides the list and supersedes any search still in flight, so a late
    /// response cannot reopen it.
    pub(crate) fn dismiss_list(&mut self) {
        self.tokens.invalidate();
        self.hide_list();
    }
}

/// Locks `state`, recovering the guard if a previous holder panicked.
pub(crate) fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
