//! Command-line argument definitions for palmer_stats
//!
//! This module defines the CLI interface using the clap derive API. Every
//! option defaults to the fixed survey constants, so running the tool with
//! no arguments computes the standard Adelie/Biscoe survey over
//! `penguins.csv` in the working directory.

use crate::config::Config;
use crate::constants::{
    DEFAULT_INPUT_FILE, DEFAULT_ISLAND, DEFAULT_REPORT_FILE, DEFAULT_SPECIES,
};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the Palmer penguin survey tool
///
/// Computes the mean flipper length of one species and the percentage of
/// that species on one island whose flipper length is above the mean,
/// then writes a two-line text report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "palmer-stats",
    version,
    about = "Compute species summary statistics from Palmer penguins census CSV data",
    long_about = "Computes the mean flipper length of a penguin species and the percentage \
                  of that species on a given island whose flipper length is above the mean. \
                  Results are printed to the console and written to a small text report. \
                  Running with no arguments surveys Adelie penguins on Biscoe island using \
                  penguins.csv from the working directory."
)]
pub struct Args {
    /// Path to the census CSV input file
    ///
    /// Must carry a header row naming the species, island,
    /// flipper_length_mm, and body_mass_g columns. Extra columns are
    /// ignored.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = DEFAULT_INPUT_FILE,
        help = "Path to the census CSV input file"
    )]
    pub input_path: PathBuf,

    /// Output path for the text report
    ///
    /// Overwritten unconditionally on every run.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_REPORT_FILE,
        help = "Output path for the text report"
    )]
    pub report_path: PathBuf,

    /// Species to survey (exact, case-sensitive match)
    #[arg(
        short = 's',
        long = "species",
        value_name = "SPECIES",
        default_value = DEFAULT_SPECIES,
        help = "Species to survey (exact match)"
    )]
    pub species: String,

    /// Island for the above-average classification
    ///
    /// Matched ignoring case and surrounding whitespace.
    #[arg(
        long = "island",
        value_name = "ISLAND",
        default_value = DEFAULT_ISLAND,
        help = "Island for the above-average classification"
    )]
    pub island: String,

    /// Logging verbosity for diagnostic output on stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Logging verbosity (error, warn, info, debug, trace)"
    )]
    pub log_level: String,

    /// Suppress console output
    ///
    /// The report file is still written.
    #[arg(short = 'q', long = "quiet", help = "Suppress console output")]
    pub quiet: bool,
}

impl Args {
    /// Logging verbosity for the tracing filter
    pub fn get_log_level(&self) -> &str {
        &self.log_level
    }

    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> Config {
        Config {
            input_path: self.input_path.clone(),
            report_path: self.report_path.clone(),
            target_species: self.species.clone(),
            target_island: self.island.clone(),
        }
    }
}
