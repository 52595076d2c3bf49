//! Tests for the survey statistics components


use crate::app::models::Penguin;

/// Create a census record with the given species, island, and flipper text
pub fn census_record(species: &str, island: &str, flipper_length_mm: &str) -> Penguin {
    Penguin::new(species, island, flipper_length_mm, "3700")
}

/// Create an Adelie record on the given island
pub fn adelie_on(island: &str, flipper_length_mm: &str) -> Penguin {
    census_record("Adelie", island, flipper_length_mm)
}
