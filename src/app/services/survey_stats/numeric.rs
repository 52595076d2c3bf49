//! Shared numeric field handling for survey statistics
//!
//! The census keeps measurements as raw text, so every numeric stage goes
//! through [`parse_measurement`] to decide skip-vs-parse. Keeping one
//! allow-list of sentinel tokens here guarantees the aggregation and
//! classification paths never diverge.

use crate::constants::MISSING_VALUE_SENTINELS;

/// Interpret a raw census field as a measurement
///
/// Returns `None` for absent data: the empty string, a sentinel token
/// (matched on the trimmed, uppercased value), or text that fails to parse
/// as a float. Parse failures are deliberately indistinguishable from
/// missing values: both are excluded from the statistics.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if MISSING_VALUE_SENTINELS.contains(&upper.as_str()) {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

/// Round half away from zero to the given number of decimal places
///
/// The report rounds 189.25 up to 189.3; the bankers' rounding applied by
/// float formatting would yield 189.2, so rounding happens here before any
/// value is formatted.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
