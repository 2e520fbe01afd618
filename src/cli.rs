use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "psidash",
    version,
    about = "Simulated PageSpeed Insights scores with persistent per-domain caching"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding psidash.toml and the default score store
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
    Domain(DomainCommand),
    Derive(DeriveCommand),
    #[command(subcommand)]
    Cache(CacheCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub url: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub store: Option<PathBuf>,
    /// Use a saved PageSpeed response instead of simulated scores
    #[arg(long, conflicts_with = "mock")]
    pub pagespeed_report: Option<PathBuf>,
    /// Use the fixed mock scores
    #[arg(long)]
    pub mock: bool,
}

#[derive(Args)]
pub struct DomainCommand {
    pub url: String,
}

#[derive(Args)]
pub struct DeriveCommand {
    #[arg(value_enum)]
    pub kind: VisualizationArg,
    #[arg(long, allow_negative_numbers = true)]
    pub score: f64,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum CacheCommand {
    List(CacheListCommand),
}

#[derive(Args)]
pub struct CacheListCommand {
    #[arg(long)]
    pub store: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VisualizationArg {
    Vitals,
    Breakdown,
    Waterfall,
    Overlay,
    Dependencies,
}
