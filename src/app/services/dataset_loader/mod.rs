//! Census CSV loader for Palmer penguin datasets
//!
//! This module provides a streamlined loader for penguin census CSV files
//! focused on extracting the four survey attributes as raw text. The design
//! eliminates unnecessary complexity while preserving all essential
//! functionality.
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`loader`] - Core loading orchestration and file handling
//! - [`columns`] - Header analysis and survey column resolution
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use palmer_stats::app::services::dataset_loader::load_census;
//!
//! # fn example() -> palmer_stats::Result<()> {
//! let result = load_census(std::path::Path::new("penguins.csv"))?;
//!
//! println!("Loaded {} penguins from {} records",
//!          result.stats.records_loaded,
//!          result.stats.total_records);
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::ColumnMapping;
pub use loader::load_census;
pub use stats::{LoadResult, LoadStats};
