//! Ids subcommand - list matching document ids, optionally fetching a few

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use riksnet_riksdagen::{Client, DocumentQuery};

use super::parse_date;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct IdsArgs {
    /// Free-text query
    pub query: String,

    /// Document kind
    #[arg(short, long, default_value = "motion")]
    pub kind: String,

    /// Earliest publication date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Latest publication date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Fetch the first N documents and show their titles
    #[arg(long)]
    pub fetch: Option<usize>,
}

pub fn run(args: IdsArgs, config: &Config) -> Result<()> {
    let query = DocumentQuery {
        text: args.query,
        kind: args.kind,
        start: args.from,
        end: args.to,
        ..Default::default()
    };
    let client = Client::new(&config.api.base_url);

    let ids = client.ids(&query)?;
    log::info!("{} matching documents", ids.len());

    let Some(n) = args.fetch else {
        for id in &ids {
            println!("{id}");
        }
        return Ok(());
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Date").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Authors").fg(Color::Cyan),
        ]);
    for document in client.documents_by_id(ids, n)? {
        let document = document.context("Document lookup failed")?;
        let authors = document
            .authors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            document.doc_id.or(document.id).unwrap_or_default(),
            document.date.unwrap_or_default(),
            document.title.unwrap_or_default(),
            authors,
        ]);
    }
    println!("{table}");
    Ok(())
}
