use clap::{Parser, Subcommand};

/// CLI arguments for locsniff
#[derive(Debug, Parser)]
#[command(
    name = "locsniff",
    version,
    about = "CLI for recognizing locations in short free-text strings"
)]
pub struct CliArgs {
    /// Path to the dataset JSON (optionally .json.gz)
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<String>,

    /// Optional path to an alias JSON file ({"nyc": "new york city", ...})
    #[arg(short = 'a', long = "aliases", global = true)]
    pub aliases: Option<String>,

    /// Minimum population for a non-capital city to enter the catalog
    #[arg(long = "min-population", global = true)]
    pub min_population: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recognize the location a string refers to
    Sniff {
        /// The free-text string (e.g. "Paris , FRANCE")
        query: Vec<String>,
    },

    /// Show catalog and dictionary statistics
    Stats,

    /// Run every line of a text file through the engine and tally hits
    Batch {
        /// Path to a file with one query per line
        file: String,
    },
}
