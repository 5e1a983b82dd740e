use crate::list::ResultsView;

/// The UI shell around the widget: the text input, the results panel, the
/// clear button, and a way to alert the user.
pub trait SearchSurface: Send + 'static {
    /// Replaces the text in the input box.
    fn set_query_text(&mut self, text: &str);

    fn set_clear_visible(&mut self, visible: bool);

    /// Redraws the results panel from `view`. Called after every change to
    /// the list, including hiding it.
    fn render_results(&mut self, view: &ResultsView);

    fn alert(&mut self, message: &str);
}
