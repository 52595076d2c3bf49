//! Column resolution for penguin census CSV headers
//!
//! This module analyzes CSV headers to locate the four survey columns.
//! The census files carry additional columns (bill measurements, sex,
//! year, a row index) which are ignored.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Resolved indices of the survey columns within a census header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Index of the species label column
    pub species: usize,

    /// Index of the island label column
    pub island: usize,

    /// Index of the flipper length column
    pub flipper_length: usize,

    /// Index of the body mass column
    pub body_mass: usize,
}

impl ColumnMapping {
    /// Analyze column headers to resolve the survey columns
    ///
    /// Header names are trimmed before matching; the first occurrence wins
    /// if a name is duplicated. Fails naming the first required column that
    /// is absent.
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index: HashMap<&str, usize> = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(header.trim()).or_insert(index);
        }

        let resolve = |name: &str| -> Result<usize> {
            name_to_index.get(name).copied().ok_or_else(|| {
                Error::data_validation(format!("Required column '{}' not found", name))
            })
        };

        Ok(ColumnMapping {
            species: resolve(columns::SPECIES)?,
            island: resolve(columns::ISLAND)?,
            flipper_length: resolve(columns::FLIPPER_LENGTH)?,
            body_mass: resolve(columns::BODY_MASS)?,
        })
    }

    /// Get a field's raw text from a record, empty when the cell is absent
    pub fn field<'a>(&self, record: &'a StringRecord, index: usize) -> &'a str {
        record.get(index).unwrap_or("")
    }
}
