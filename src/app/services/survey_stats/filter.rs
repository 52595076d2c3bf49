//! Species subset selection for census records

use crate::app::models::Penguin;
use tracing::debug;

/// Select the records matching a target species label
///
/// Matching is exact and case-sensitive; the relative order of matching
/// records is preserved. An empty result is not an error; downstream
/// stages degrade to zero-valued statistics.
pub fn filter_species(penguins: &[Penguin], target_species: &str) -> Vec<Penguin> {
    let subset: Vec<Penguin> = penguins
        .iter()
        .filter(|penguin| penguin.species == target_species)
        .cloned()
        .collect();

    debug!(
        "Species filter '{}': {} of {} records selected",
        target_species,
        subset.len(),
        penguins.len()
    );

    subset
}
