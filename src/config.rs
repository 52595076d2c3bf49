//! Configuration management and validation.
//!
//! Provides the runtime configuration for a survey run: which census file
//! to read, which species and island to survey, and where the report is
//! written. Defaults come from [`crate::constants`] so that running with no
//! arguments reproduces the standard Adelie/Biscoe survey.

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_ISLAND, DEFAULT_REPORT_FILE, DEFAULT_SPECIES};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for a survey run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the census CSV input file
    pub input_path: PathBuf,

    /// Path the text report is written to (overwritten each run)
    pub report_path: PathBuf,

    /// Species label selected for the survey subset (exact match)
    pub target_species: String,

    /// Island label used for the above-average classification
    /// (matched case- and whitespace-insensitively)
    pub target_island: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            target_species: DEFAULT_SPECIES.to_string(),
            target_island: DEFAULT_ISLAND.to_string(),
        }
    }
}

impl Config {
    /// Validate the configuration before running the pipeline
    ///
    /// Empty labels would silently produce an empty subset (species) or a
    /// zero percentage (island), so they are rejected up front.
    pub fn validate(&self) -> Result<()> {
        if self.target_species.trim().is_empty() {
            return Err(Error::configuration("Target species must not be empty"));
        }

        if self.target_island.trim().is_empty() {
            return Err(Error::configuration("Target island must not be empty"));
        }

        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path must not be empty"));
        }

        if self.report_path.as_os_str().is_empty() {
            return Err(Error::configuration("Report path must not be empty"));
        }

        Ok(())
    }
}
