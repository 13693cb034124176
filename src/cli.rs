use clap::{Args, Parser, Subcommand};
use seedrate::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seedrate",
    version,
    about = "Seed quantity calculator for direct and parachute seeding"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute seed quantities for one area
    Compute(ComputeArgs),
    /// Print the seeding rate table
    Rates,
    /// Seed report for a season plan file (YAML or JSON)
    Plan {
        /// Path to the season plan
        file: PathBuf,
    },
    /// Run interactive setup
    Init,
    /// Validate config and list the variety catalog
    Check,
}

#[derive(Args)]
pub struct ComputeArgs {
    /// Cultivated area, in the given unit
    #[arg(short, long)]
    pub area: String,

    /// Area unit: hectares, acres, "sq meters", "sq feet"
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Planting method, e.g. direct_seeding or parachute_seeding
    #[arg(short, long)]
    pub method: Option<String>,

    /// Variety name from the config catalog
    #[arg(long, conflicts_with_all = ["length", "variety_type", "grain_shape"])]
    pub variety: Option<String>,

    /// Pre-resolved variety length (long or short)
    #[arg(
        long,
        value_parser = ["long", "short"],
        conflicts_with_all = ["variety_type", "grain_shape"]
    )]
    pub length: Option<String>,

    /// Maturity label, e.g. "Long Duration"
    #[arg(long)]
    pub variety_type: Option<String>,

    /// Grain shape, e.g. "Long Slender"
    #[arg(long)]
    pub grain_shape: Option<String>,
}
