//! Terminal stand-ins for the UI shell and the map.

use std::fmt::Write as _;

use addrpick_core::Coordinates;
use addrpick_widget::{MapWidget, NetworkSection, Resolution, ResultsView, SearchSurface};

/// Prints the results panel and alerts.
#[derive(Debug, Default)]
pub(crate) struct TerminalSurface {
    /// Print every redraw of the results panel, not just log it.
    echo: bool,
}

impl TerminalSurface {
    pub(crate) fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl SearchSurface for TerminalSurface {
    fn set_query_text(&mut self, text: &str) {
        if self.echo {
            println!("input: {text}");
        }
    }

    fn set_clear_visible(&mut self, visible: bool) {
        tracing::trace!(visible, "clear button");
    }

    fn render_results(&mut self, view: &ResultsView) {
        tracing::debug!(
            rows = view.rows.len(),
            active = view.active_descendant.as_deref().unwrap_or("-"),
            "results rendered"
        );
        if self.echo {
            print!("{}", format_results(view));
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
    }
}

/// One line per row, the active row marked with `>`.
pub(crate) fn format_results(view: &ResultsView) -> String {
    if !view.expanded {
        return "(no suggestions)\n".to_owned();
    }
    let mut out = String::new();
    for (index, row) in view.rows.iter().enumerate() {
        let cursor = if row.active { '>' } else { ' ' };
        let _ = writeln!(out, "{cursor} {index:>2}  {}", row.text);
    }
    out
}

/// Plain-text rendering of a resolved selection.
pub(crate) fn describe(resolution: &Resolution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Address:  {}", resolution.popup.address);
    let _ = writeln!(out, "Position: {}", resolution.position);
    match &resolution.popup.network {
        NetworkSection::Supplier(fields) => {
            let _ = writeln!(out, "Network operator: {}", fields.name);
            if let Some(phone) = &fields.phone {
                let _ = writeln!(out, "  {phone}");
            }
            if let Some((href, _)) = &fields.website {
                let _ = writeln!(out, "  Website: {href}");
            }
            if let Some(logo) = &fields.logo_url {
                let _ = writeln!(out, "  Logo: {logo}");
            }
        }
        NetworkSection::NotFound => {
            out.push_str("Network operator: (disabled or not found)\n");
        }
    }
    out
}

#[derive(Debug)]
pub(crate) struct MarkerId(u32);

/// A map that only logs what it is asked to draw.
#[derive(Debug, Default)]
pub(crate) struct LogMap {
    next_marker: u32,
}

impl MapWidget for LogMap {
    type Marker = MarkerId;

    fn add_marker(&mut self, at: Coordinates) -> MarkerId {
        self.next_marker += 1;
        tracing::info!(marker = self.next_marker, %at, "marker added");
        MarkerId(self.next_marker)
    }

    fn move_marker(&mut self, marker: &mut MarkerId, to: Coordinates) {
        tracing::info!(marker = marker.0, %to, "marker moved");
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        tracing::info!(marker = marker.0, "marker removed");
    }

    fn set_view(&mut self, center: Coordinates, zoom: u8) {
        tracing::debug!(%center, zoom, "view set");
    }

    fn bind_popup(&mut self, marker: &mut MarkerId, html: &str, max_width: u32) {
        tracing::debug!(marker = marker.0, max_width, html, "popup bound");
    }

    fn open_popup(&mut self, marker: &mut MarkerId) {
        tracing::debug!(marker = marker.0, "popup opened");
    }

    fn close_popup(&mut self) {
        tracing::debug!("popup closed");
    }
}
