//! Text report writer for survey results
//!
//! Formats the two computed survey figures into the fixed two-line report
//! and writes it to disk, overwriting any previous report.
//!
//! ## Architecture
//!
//! - [`value`] - Numeric-or-textual report inputs and their coercion
//! - [`writer`] - Line formatting and the file write
//!
//! Report inputs degrade gracefully: a value that cannot be coerced to a
//! number renders as "N/A" on its line instead of failing the write.

pub mod value;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use value::ReportValue;
pub use writer::{format_report_lines, write_report};
