//! Above-average classification by island

use super::numeric::{parse_measurement, round_to};
use crate::app::models::Penguin;
use crate::constants::PERCENT_DECIMALS;
use tracing::debug;

/// Compute the percentage of an island's subset strictly above the mean
///
/// Island labels are compared after trimming surrounding whitespace and
/// lowercasing, so " bIsCoE " matches "biscoe". Records with absent flipper
/// data are excluded from the population; a value exactly equal to the mean
/// is never counted as above it. Returns exactly 0.0 when no valid records
/// match the island, the percentage rounded to one decimal place otherwise.
pub fn percent_above_mean(subset: &[Penguin], mean_length: f64, target_island: &str) -> f64 {
    let target = target_island.trim().to_lowercase();

    let mut total_on_island: usize = 0;
    let mut above_count: usize = 0;

    for penguin in subset {
        if penguin.island.trim().to_lowercase() != target {
            continue;
        }

        let length = match parse_measurement(&penguin.flipper_length_mm) {
            Some(length) => length,
            None => continue,
        };

        total_on_island += 1;
        if length > mean_length {
            above_count += 1;
        }
    }

    if total_on_island == 0 {
        debug!("No valid records on island '{}'", target_island);
        return 0.0;
    }

    let percentage = (above_count as f64 / total_on_island as f64) * 100.0;
    round_to(percentage, PERCENT_DECIMALS)
}
