//! Search subcommand - fetch documents and build the co-authorship graph

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use riksnet_core::{SharedProgress, fmt_num};
use riksnet_graph::{CoauthorGraph, GraphBuilder};
use riksnet_riksdagen::{Client, DocumentQuery};
use serde_json::{Value, json};

use super::{parse_date, print_summary};
use crate::config::Config;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Document kind (motion, proposition, betänkande, interpellation, fråga or their codes)
    #[arg(short, long, default_value = "motion")]
    pub kind: String,

    /// Earliest publication date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Latest publication date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Sort key passed to the API
    #[arg(long)]
    pub sort: Option<String>,

    /// Match the query as an exact phrase
    #[arg(long)]
    pub exact: bool,

    /// Maximum number of documents
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write the graph JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add one party colour per node (fails on unknown party codes)
    #[arg(long)]
    pub colors: bool,
}

impl SearchArgs {
    fn to_query(&self, config: &Config) -> DocumentQuery {
        DocumentQuery {
            text: self.query.clone(),
            kind: self.kind.clone(),
            start: self.from,
            end: self.to,
            sort: self
                .sort
                .clone()
                .unwrap_or_else(|| config.search.sort.clone()),
            exact: self.exact,
            limit: self.limit.unwrap_or(config.search.limit),
        }
    }
}

pub fn run(args: SearchArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let query = args.to_query(config);
    let client = Client::new(&config.api.base_url);
    let started = Instant::now();

    let mut documents = client.search(&query)?;
    let pb = progress.spinner("search");
    let mut builder = GraphBuilder::new();
    for document in documents.by_ref() {
        let document = document.with_context(|| {
            format!(
                "Search for {:?} failed after {} documents",
                query.text,
                builder.documents()
            )
        })?;
        builder.add(&document);
        pb.set_message(format!("{} documents", fmt_num(builder.documents())));
    }
    let pages = documents.pages_fetched();
    pb.finish_and_clear();

    let n_documents = builder.documents();
    let graph = builder.finish();
    log::info!(
        "{} documents → {} authors, {} edges",
        fmt_num(n_documents),
        fmt_num(graph.nodes.len()),
        fmt_num(graph.edges.len())
    );

    let palette = config.party_palette();
    let colors = if args.colors {
        Some(palette.colors(&graph.nodes)?)
    } else {
        None
    };
    let value = graph_json(&graph, colors.as_deref());
    let text = serde_json::to_string_pretty(&value)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, text + "\n")
                .with_context(|| format!("Cannot write {}", path.display()))?;
            log::info!("Wrote graph to {}", path.display());
        }
        None => println!("{text}"),
    }

    let parties = graph
        .party_counts()
        .iter()
        .take(5)
        .map(|(party, n)| format!("{party} {n}"))
        .collect::<Vec<_>>()
        .join(", ");
    print_summary(
        "Search",
        &[
            ("Query", format!("{:?}", query.text)),
            ("Kind", query.kind.clone()),
            ("Documents", fmt_num(n_documents)),
            ("Pages", pages.to_string()),
            ("Authors", fmt_num(graph.nodes.len())),
            ("Edges", fmt_num(graph.edges.len())),
            ("Self-loops", fmt_num(graph.self_loops())),
            ("Top parties", parties),
            ("Elapsed", format!("{:.1}s", started.elapsed().as_secs_f64())),
        ],
    );
    Ok(())
}

/// `{"nodes", "edges"}` plus `"colors"` when requested
fn graph_json(graph: &CoauthorGraph, colors: Option<&[&str]>) -> Value {
    let mut value = json!({ "nodes": graph.nodes, "edges": graph.edges });
    if let Some(colors) = colors {
        value["colors"] = json!(colors);
    }
    value
}
