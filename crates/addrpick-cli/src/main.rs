mod interactive;
mod lookup;
mod terminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "addrpick")]
#[command(about = "Danish address search with network operator lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print autocomplete suggestions for a partial address
    Suggest {
        /// Address text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Resolve one suggestion and print its position and network operator
    Lookup {
        /// Address text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Zero-based index of the suggestion to resolve
        #[arg(long, default_value = "0")]
        pick: usize,
        /// Print the popup as HTML instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Drive the widget from stdin, one line per event
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = addrpick_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        dawa = %config.dawa_base_url,
        secondary = config.secondary_lookup_enabled(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Suggest { query } => lookup::run_suggest(&config, &query.join(" ")).await,
        Commands::Lookup { query, pick, html } => {
            lookup::run_lookup(&config, &query.join(" "), pick, html).await
        }
        Commands::Interactive => interactive::run(&config).await,
    }
}
