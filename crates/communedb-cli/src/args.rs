use clap::{Parser, Subcommand};

/// CLI arguments for communedb-cli
#[derive(Debug, Parser)]
#[command(
    name = "communedb",
    version,
    about = "CLI for querying the resolved French commune database"
)]
pub struct CliArgs {
    /// Directory holding the source extracts (default: bundled sample data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Population floor override: a commune must have strictly more inhabitants
    #[arg(short = 'm', long = "min-population", global = true)]
    pub min_population: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the resolved database
    Stats,

    /// List every resolved city, sorted by name
    Cities,

    /// Resolve one city by name (case- and accent-insensitive)
    Resolve {
        /// Display name, e.g. "Orléans" or "orleans"
        name: String,
    },

    /// Print two cities side by side
    Compare {
        /// First city name
        first: String,
        /// Second city name
        second: String,
    },
}
