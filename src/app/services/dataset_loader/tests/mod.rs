//! Tests for the census CSV loader components

pub mod columns_tests;
pub mod loader_tests;

use std::path::Path;

/// Header set of a full Palmer census file, including the columns the
/// loader ignores
pub const CENSUS_HEADERS: &[&str] = &[
    "",
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "flipper_length_mm",
    "body_mass_g",
    "sex",
    "year",
];

/// Write a census CSV fixture with the standard Palmer header set
///
/// Rows are given as (species, island, flipper_length_mm, body_mass_g);
/// the ignored columns are left empty.
pub fn write_census_csv(path: &Path, rows: &[(&str, &str, &str, &str)]) {
    let mut writer = csv::Writer::from_path(path).expect("create fixture CSV");
    writer
        .write_record(CENSUS_HEADERS)
        .expect("write fixture header");

    for (row_no, (species, island, flipper, mass)) in rows.iter().enumerate() {
        let index = (row_no + 1).to_string();
        writer
            .write_record([
                index.as_str(),
                species,
                island,
                "",
                "",
                flipper,
                mass,
                "",
                "",
            ])
            .expect("write fixture row");
    }

    writer.flush().expect("flush fixture CSV");
}
