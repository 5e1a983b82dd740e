//! One-shot `suggest` and `lookup` commands.
//!
//! Both drive the same widget the interactive mode uses, so ranking,
//! truncation, and the secondary lookup behave identically.

use addrpick_core::AppConfig;
use addrpick_widget::{LiveAddressSearch, SearchOutcome, MIN_QUERY_CHARS};
use anyhow::{bail, Context};

use crate::terminal::{describe, format_results, LogMap, TerminalSurface};

type CliSearch = LiveAddressSearch<LogMap, TerminalSurface>;

fn build(config: &AppConfig) -> anyhow::Result<CliSearch> {
    CliSearch::from_config(config, LogMap::default(), TerminalSurface::new(false))
        .context("failed to build address search")
}

/// Runs one search without waiting for the debounce window.
async fn search(widget: &CliSearch, query: &str) -> anyhow::Result<()> {
    widget.input(query);
    widget.shutdown();
    match widget.search_now().await {
        SearchOutcome::Shown(count) => {
            tracing::debug!(query, count, "suggestions shown");
            Ok(())
        }
        SearchOutcome::BelowThreshold => {
            bail!("query must be at least {MIN_QUERY_CHARS} characters")
        }
        SearchOutcome::Empty => bail!("no addresses match {query:?}"),
        SearchOutcome::Failed => bail!("address search failed; see the log for details"),
        SearchOutcome::Stale => bail!("address search was superseded"),
    }
}

/// Prints the suggestion list for `query`.
///
/// # Errors
///
/// Returns an error if the query is too short, nothing matches, or the
/// provider request fails.
pub(crate) async fn run_suggest(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let widget = build(config)?;
    search(&widget, query).await?;
    print!("{}", format_results(&widget.results_view()));
    Ok(())
}

/// Resolves suggestion `pick` for `query` and prints the result.
///
/// # Errors
///
/// Returns an error if the search fails, `pick` is out of range, or the
/// address detail lookup fails. A failed network operator lookup is not an
/// error; the fallback is printed instead.
pub(crate) async fn run_lookup(
    config: &AppConfig,
    query: &str,
    pick: usize,
    html: bool,
) -> anyhow::Result<()> {
    let widget = build(config)?;
    search(&widget, query).await?;

    let shown = widget.results_view().rows.len();
    let task = widget
        .click_item(pick)
        .with_context(|| format!("--pick {pick} is out of range; {shown} suggestions shown"))?;
    let resolution = task.await.context("selection task failed")??;

    if html {
        let rendered = resolution.popup.to_html().context("failed to render popup")?;
        println!("{rendered}");
    } else {
        print!("{}", describe(&resolution));
    }
    Ok(())
}
