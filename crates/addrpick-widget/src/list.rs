//! The suggestion list and its keyboard/mouse selection state machine.
//!
//! The list held here is the source of truth; [`SuggestionList::view`] is a
//! pure projection of it for the UI shell.

use addrpick_core::SuggestionItem;


/// At most this many suggestions are shown; the rest are dropped silently.
pub const MAX_RESULTS: usize = 50;

/// Keys the list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Hidden,
    NoneActive,
    ItemActive(usize),
}

/// What a key press did to the list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    /// Nothing changed.
    None,
    /// The active row changed.
    Moved(usize),
    /// The list was hidden without a selection.
    Hidden,
    /// The item was chosen and the list hidden.
    Select(SuggestionItem),
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Element id, used for `aria-activedescendant`.
    pub element_id: String,
    pub text: String,
    pub active: bool,
}

/// Snapshot of the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsView {
    pub expanded: bool,
    pub rows: Vec<ResultRow>,
    pub active_descendant: Option<String>,
    /// Index of the first row inside the visible window.
    pub scroll_offset: usize,
}

#[derive(Debug)]
pub struct SuggestionList {
    items: Vec<SuggestionItem>,
    active: Option<usize>,
    visible: bool,
    window_rows: usize,
    scroll_offset: usize,
}

impl SuggestionList {
    /// `window_rows` is how many rows fit in the panel without scrolling.
    #[must_use]
    pub fn new(window_rows: usize) -> Self {
        Self {
            items: Vec::new(),
            active: None,
            visible: false,
            window_rows: window_rows.max(1),
            scroll_offset: 0,
        }
    }

    /// Replaces the list with a fresh response.
    ///
    /// An empty response hides the panel.
    pub fn show(&mut self, mut items: Vec<SuggestionItem>) {
        if items.is_empty() {
            self.hide();
            return;
        }
        items.truncate(MAX_RESULTS);
        self.items = items;
        self.active = None;
        self.visible = true;
        self.scroll_offset = 0;
    }

    pub fn hide(&mut self) {
        self.items.clear();
        self.active = None;
        self.visible = false;
        self.scroll_offset = 0;
    }

    #[must_use]
    pub fn state(&self) -> ListState {
        match (self.visible, self.active) {
            (false, _) => ListState::Hidden,
            (true, None) => ListState::NoneActive,
            (true, Some(i)) => ListState::ItemActive(i),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn key(&mut self, key: NavKey) -> ListAction {
        match key {
            NavKey::ArrowDown => {
                if self.items.is_empty() {
                    return ListAction::None;
                }
                let next = match self.active {
                    Some(i) if i + 1 < self.items.len() => i + 1,
                    _ => 0,
                };
                self.set_active(next);
                ListAction::Moved(next)
            }
            NavKey::ArrowUp => {
                if self.items.is_empty() {
                    return ListAction::None;
                }
                let prev = match self.active {
                    Some(i) if i > 0 => i - 1,
                    _ => self.items.len() - 1,
                };
                self.set_active(prev);
                ListAction::Moved(prev)
            }
            NavKey::Enter => match self.active {
                Some(i) => self.click(i).map_or(ListAction::None, ListAction::Select),
                None => ListAction::None,
            },
            NavKey::Escape => {
                let was_visible = self.visible;
                self.hide();
                if was_visible {
                    ListAction::Hidden
                } else {
                    ListAction::None
                }
            }
        }
    }

    /// Chooses the item at `index` and hides the list.
    ///
    /// Returns `None` without changing anything if `index` is out of range.
    pub fn click(&mut self, index: usize) -> Option<SuggestionItem> {
        if !self.visible || index >= self.items.len() {
            return None;
        }
        let item = self.items.swap_remove(index);
        self.hide();
        Some(item)
    }

    #[must_use]
    pub fn view(&self) -> ResultsView {
        if !self.visible {
            return ResultsView::default();
        }
        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ResultRow {
                element_id: element_id(i),
                text: item.display_text.clone(),
                active: self.active == Some(i),
            })
            .collect();
        ResultsView {
            expanded: true,
            rows,
            active_descendant: self.active.map(element_id),
            scroll_offset: self.scroll_offset,
        }
    }

    fn set_active(&mut self, index: usize) {
        self.active = Some(index);
        self.scroll_into_view(index);
    }

    /// Moves the window just enough to include `index`.
    fn scroll_into_view(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + self.window_rows {
            self.scroll_offset = index + 1 - self.window_rows;
        }
    }
}

fn element_id(index: usize) -> String {
    format!("res-{index}")
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
