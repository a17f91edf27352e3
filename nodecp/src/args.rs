use clap::Parser;
use std::path::PathBuf;

/// Find the cheapest node connection path and worker lodging for a set
/// of resource yields.
#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the four dataset tables
    /// (nodes.csv, node_master.csv, connections.csv, lodging.csv)
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Comma-separated yield names to resolve
    #[arg(long, default_value = "Potato, Wheat, Rice")]
    pub yields: String,

    /// Write an HTML report to this path
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Emit results as JSON on stdout instead of the console report
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
