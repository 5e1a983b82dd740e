//! Line-driven session: each stdin line is one widget event.
//!
//! Plain lines replace the input text. Lines starting with `:` are commands.

use addrpick_core::AppConfig;
use addrpick_widget::{Key, KeyOutcome, LiveAddressSearch, SelectionTask};
use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::terminal::{describe, LogMap, TerminalSurface};

const HELP: &str = "\
Type an address to search. Commands:
  :down :up      move the active suggestion
  :enter         choose the active suggestion
  :esc           close the suggestion list
  :click N       choose suggestion N
  :outside       click outside the widget
  :clear         reset the input and the map
  :quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// The input now holds this text.
    Type(String),
    Key(Key),
    Click(usize),
    Outside,
    Clear,
    Help,
    Quit,
}

pub(crate) fn parse_command(line: &str) -> anyhow::Result<Command> {
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Type(line.to_owned()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let command = match name {
        "down" => Command::Key(Key::ArrowDown),
        "up" => Command::Key(Key::ArrowUp),
        "enter" => Command::Key(Key::Enter),
        "esc" => Command::Key(Key::Escape),
        "click" => {
            let index = parts.next().context(":click needs a row number")?;
            let index = index
                .parse()
                .with_context(|| format!("invalid row number {index:?}"))?;
            Command::Click(index)
        }
        "outside" => Command::Outside,
        "clear" => Command::Clear,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => bail!("unknown command :{other}; try :help"),
    };
    if let Some(extra) = parts.next() {
        bail!("unexpected argument {extra:?} for :{name}");
    }
    Ok(command)
}

/// Runs the session until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if the widget cannot be built or stdin cannot be read.
pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let widget = LiveAddressSearch::from_config(config, LogMap::default(), TerminalSurface::new(true))
        .context("failed to build address search")?;
    if !widget.secondary_enabled() {
        println!("(network operator lookup disabled)");
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e:#}");
                continue;
            }
        };

        match command {
            Command::Type(text) => widget.input(&text),
            Command::Key(key) => {
                if let KeyOutcome::Selected(task) = widget.key(key) {
                    tokio::spawn(report(task));
                }
            }
            Command::Click(index) => match widget.click_item(index) {
                Some(task) => {
                    tokio::spawn(report(task));
                }
                None => eprintln!("no suggestion at row {index}"),
            },
            Command::Outside => widget.outside_click(),
            Command::Clear => widget.clear(),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    widget.shutdown();
    Ok(())
}

async fn report(task: SelectionTask) {
    match task.await {
        Ok(Ok(resolution)) => print!("{}", describe(&resolution)),
        // The widget has already alerted the user.
        Ok(Err(e)) => tracing::debug!(error = %e, "selection not resolved"),
        Err(e) => tracing::error!(error = %e, "selection task failed"),
    }
}
