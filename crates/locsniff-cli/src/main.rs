//! locsniff — Command-line interface for locsniff-core
//!
//! This binary recognizes which city, state, or country a short free-text
//! string refers to, using a dataset you point it at.
//!
//! Usage examples
//! --------------
//!
//! - Recognize a single string
//!   $ locsniff --data cities.json sniff "Paris , FRANCE"
//!
//! - With an alias file
//!   $ locsniff --data cities.json --aliases aliases.json sniff NYC
//!
//! - Show catalog/dictionary statistics
//!   $ locsniff --data cities.json stats
//!
//! - Run a file of queries and tally hits/misses
//!   $ locsniff --data cities.json batch queries.txt
//!
//! Set RUST_LOG=locsniff_core=debug to see dictionary build diagnostics.
mod args;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{CliArgs, Commands};
use locsniff_core::{CatalogConfig, MatchResult, Sniffer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    let Some(data) = args.data.as_deref() else {
        bail!("--data <path> is required (a JSON array of city records)");
    };
    let mut config = CatalogConfig::default();
    if let Some(min) = args.min_population {
        config.min_population = min;
    }

    let alias_path = args.aliases.as_deref().map(Path::new);
    let (sniffer, report) = Sniffer::from_paths(data, alias_path, &config)
        .with_context(|| format!("loading dataset from {data}"))?;
    if report.skipped > 0 {
        eprintln!("warning: skipped {} malformed dataset row(s)", report.skipped);
    }

    match args.command {
        Commands::Sniff { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                bail!("empty query");
            }
            print_result(&sniffer.sniff(&query));
        }

        Commands::Stats => {
            let stats = sniffer.stats();
            println!("Catalog:");
            println!("  Countries: {}", stats.countries);
            println!("  States/Regions: {}", stats.states);
            println!("  Cities: {}", stats.cities);
            println!("Dictionary keys:");
            println!("  Country tier: {}", stats.country_keys);
            println!("  State tier: {}", stats.state_keys);
            println!("  City tier: {}", stats.city_keys);
        }

        Commands::Batch { file } => {
            let contents =
                fs::read_to_string(&file).with_context(|| format!("reading {file}"))?;
            let mut hits = 0usize;
            let mut misses = 0usize;
            for line in contents.lines().filter(|l| !l.trim().is_empty()) {
                let result = sniffer.sniff(line);
                match result.best() {
                    Some(entry) => {
                        hits += 1;
                        println!("{line} => {}", entry.output);
                    }
                    None => {
                        misses += 1;
                        println!("{line} => (no match)");
                    }
                }
            }
            println!("\n{hits} matched, {misses} unmatched");
        }
    }

    Ok(())
}

fn print_result(result: &MatchResult) {
    match result.best() {
        Some(entry) => {
            println!("Match: {}", entry.output);
            println!("Kind: {:?}", entry.kind);
            println!("Template: {}", entry.template);
            for (name, value) in &entry.fields {
                println!("  {name}: {value}");
            }
        }
        None => {
            println!("No match for: {}", result.query);
        }
    }
}
