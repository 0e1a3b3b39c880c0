//! riksnet - network-science course tools
//!
//! Searches Riksdagen documents, builds co-authorship graphs from them,
//! and exports the course sample networks as JSON.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "riksnet")]
#[command(about = "Co-authorship networks from Riksdagen open data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (one line per page request)
    #[arg(long, global = true)]
    debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file path (default: ./riksnet.toml or ~/.config/riksnet/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Connect timeout in seconds
    #[arg(long, global = true)]
    connect_timeout: Option<u64>,

    /// Whole-request timeout in seconds
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Search documents and build their co-authorship graph
    Search(cmd::search::SearchArgs),
    /// List ids of matching documents
    Ids(cmd::ids::IdsArgs),
    /// Print a course sample dataset as JSON
    Sample(cmd::sample::SampleArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let progress = Arc::new(riksnet_core::ProgressContext::new());
    let multi = if progress.is_tty() {
        Some(progress.multi())
    } else {
        None
    };
    riksnet_core::init_logging(
        riksnet_core::Verbosity::from_flags(cli.quiet, cli.debug),
        multi,
    );

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    // Config file defaults, CLI overrides
    let mut http = config.http;
    if let Some(secs) = cli.connect_timeout {
        http.connect_timeout = secs;
    }
    if let Some(secs) = cli.request_timeout {
        http.request_timeout = secs;
    }
    riksnet_core::set_http_config(http.to_http_config());

    match cli.command {
        Command::Search(args) => cmd::search::run(args, &config, &progress),
        Command::Ids(args) => cmd::ids::run(args, &config),
        Command::Sample(args) => cmd::sample::run(args),
        Command::Config => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec!["API base URL", &config.api.base_url]);
            table.add_row(vec![
                "Connect timeout",
                &format!("{}s", http.connect_timeout),
            ]);
            table.add_row(vec![
                "Request timeout",
                &format!("{}s", http.request_timeout),
            ]);
            table.add_row(vec!["Search limit", &config.search.limit.to_string()]);
            table.add_row(vec!["Search sort", &config.search.sort]);
            for (party, color) in config.party_palette().iter() {
                table.add_row(vec![format!("Party {party}"), color.to_string()]);
            }

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
