//! Mean flipper length aggregation

use super::numeric::{parse_measurement, round_to};
use crate::app::models::Penguin;
use crate::constants::MEAN_DECIMALS;
use tracing::debug;

/// Compute the mean flipper length of a species subset
///
/// Records whose flipper field holds absent data per
/// [`super::numeric::parse_measurement`] contribute to neither the sum nor
/// the count. Returns 0.0 when the subset holds no valid measurements,
/// rounded to two decimal places otherwise.
pub fn mean_flipper_length(subset: &[Penguin]) -> f64 {
    let mut total_length = 0.0;
    let mut count: usize = 0;

    for penguin in subset {
        if let Some(length) = parse_measurement(&penguin.flipper_length_mm) {
            total_length += length;
            count += 1;
        }
    }

    if count == 0 {
        debug!("No valid flipper measurements in subset of {}", subset.len());
        return 0.0;
    }

    round_to(total_length / count as f64, MEAN_DECIMALS)
}
