//! Loading statistics and result structures for census CSV processing

use crate::app::models::Penguin;

/// Loading result with records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully loaded census records, in source order
    pub penguins: Vec<Penguin>,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub total_records: usize,

    /// Number of records successfully loaded
    pub records_loaded: usize,

    /// Number of rows skipped due to errors
    pub records_skipped: usize,

    /// List of row-level errors for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            records_loaded: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_loaded as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if loading was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
