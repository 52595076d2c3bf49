//! Report line formatting and file writing

use std::path::Path;
use tracing::info;

use super::value::ReportValue;
use crate::app::services::survey_stats::numeric::round_to;
use crate::constants::{NOT_APPLICABLE, REPORT_DECIMALS};
use crate::{Error, Result};

/// Format the two report lines for the given survey figures
///
/// The mean renders with one decimal place and a "mm" suffix, the
/// percentage with one decimal place and a "%" suffix. A value that fails
/// numeric coercion renders as "N/A" without a suffix. Rounding is half
/// away from zero, applied before formatting.
pub fn format_report_lines(
    average: &ReportValue,
    percentage: &ReportValue,
    species: &str,
    island: &str,
) -> [String; 2] {
    let average_line = match average.as_f64() {
        Some(value) => format!(
            "Average {} flipper length: {:.1} mm",
            species,
            round_to(value, REPORT_DECIMALS)
        ),
        None => format!("Average {} flipper length: {}", species, NOT_APPLICABLE),
    };

    let percentage_line = match percentage.as_f64() {
        Some(value) => format!(
            "Percent above average on {}: {:.1}%",
            island,
            round_to(value, REPORT_DECIMALS)
        ),
        None => format!("Percent above average on {}: {}", island, NOT_APPLICABLE),
    };

    [average_line, percentage_line]
}

/// Write the two-line survey report, overwriting any existing file
///
/// The report is exactly two newline-terminated lines. There is no append
/// mode and no backup of a previous report.
pub fn write_report(
    average: &ReportValue,
    percentage: &ReportValue,
    species: &str,
    island: &str,
    report_path: &Path,
) -> Result<()> {
    let [average_line, percentage_line] = format_report_lines(average, percentage, species, island);
    let content = format!("{average_line}\n{percentage_line}\n");

    std::fs::write(report_path, content).map_err(|e| {
        Error::report_writing(
            report_path.display().to_string(),
            "Failed to write report file",
            e,
        )
    })?;

    info!("Report written to {}", report_path.display());
    Ok(())
}
