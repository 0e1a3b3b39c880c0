//! Sample subcommand - print a course dataset as network JSON

use anyhow::Result;
use clap::Args;
use riksnet_graph::samples;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Dataset name
    #[arg(value_parser = clap::builder::PossibleValuesParser::new(samples::NAMES))]
    pub name: String,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: SampleArgs) -> Result<()> {
    let network = samples::by_name(&args.name)
        .ok_or_else(|| anyhow::anyhow!("Unknown dataset: {}", args.name))?;
    log::debug!(
        "{}: {} nodes, {} edges, layout: {}",
        args.name,
        network.nodes().len(),
        network.edges().len(),
        network.has_layout()
    );

    let text = if args.compact {
        serde_json::to_string(&network)?
    } else {
        serde_json::to_string_pretty(&network)?
    };
    println!("{text}");
    Ok(())
}
