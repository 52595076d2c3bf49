//! Core census CSV loader implementation
//!
//! This module provides the main loading orchestration: file access,
//! header analysis, and row-by-row record extraction with graceful
//! degradation on malformed rows.

use std::path::Path;
use tracing::{debug, info, warn};

use super::columns::ColumnMapping;
use super::stats::{LoadResult, LoadStats};
use crate::app::models::Penguin;
use crate::{Error, Result};

/// Load a penguin census CSV file and return records with statistics
///
/// The file must carry a header row naming the four survey columns; any
/// additional columns are ignored. Field values are kept as raw text, so
/// empty cells and sentinel tokens survive unchanged for the statistics
/// stages to interpret. A missing input file is reported to the caller as
/// [`Error::FileNotFound`]; a malformed row is skipped and recorded in the
/// statistics rather than aborting the load.
pub fn load_census(file_path: &Path) -> Result<LoadResult> {
    info!("Loading census file: {}", file_path.display());

    if !file_path.exists() {
        return Err(Error::file_not_found(file_path.display().to_string()));
    }

    let file_name = file_path.display().to_string();

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(file_path)
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to open CSV reader", Some(e)))?;

    // Resolve survey columns from the header row
    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to read CSV headers", Some(e)))?;

    let mapping = ColumnMapping::analyze(headers)?;
    debug!(
        "Column mapping: species={}, island={}, flipper_length={}, body_mass={}",
        mapping.species, mapping.island, mapping.flipper_length, mapping.body_mass
    );

    let mut stats = LoadStats::new();
    let mut penguins = Vec::new();

    for result in csv_reader.records() {
        stats.total_records += 1;

        match result {
            Ok(record) => {
                penguins.push(Penguin::new(
                    mapping.field(&record, mapping.species),
                    mapping.field(&record, mapping.island),
                    mapping.field(&record, mapping.flipper_length),
                    mapping.field(&record, mapping.body_mass),
                ));
                stats.records_loaded += 1;
            }
            Err(e) => {
                stats.records_skipped += 1;
                stats.errors.push(format!(
                    "CSV parse error at record {}: {}",
                    stats.total_records, e
                ));
                debug!("Skipped record {}: {}", stats.total_records, e);
            }
        }
    }

    if stats.records_skipped > 0 {
        warn!(
            "Skipped {} of {} records in {}",
            stats.records_skipped, stats.total_records, file_name
        );
    }

    info!(
        "Loaded {} penguins from {} records",
        stats.records_loaded, stats.total_records
    );

    Ok(LoadResult { penguins, stats })
}
