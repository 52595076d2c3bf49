//! Survey statistics over penguin census records
//!
//! This module computes the two survey figures: the mean flipper length of
//! a species subset, and the percentage of that subset on a given island
//! whose flipper length is strictly above the mean.
//!
//! ## Architecture
//!
//! The statistics are organized into logical components:
//! - [`filter`] - Species subset selection
//! - [`numeric`] - Shared measurement parsing and rounding policy
//! - [`mean`] - Mean flipper length aggregation
//! - [`threshold`] - Above-average classification by island
//!
//! ## Absent-data policy
//!
//! Both numeric stages interpret census fields through a single policy:
//! empty values, sentinel tokens ("NA", "N/A", "NAN", "NULL", matched
//! case-insensitively on the trimmed value), and unparseable text all count
//! as absent data. Absent data is silently excluded from sums and counts,
//! never reported as an error.

pub mod filter;
pub mod mean;
pub mod numeric;
pub mod threshold;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use filter::filter_species;
pub use mean::mean_flipper_length;
pub use threshold::percent_above_mean;
