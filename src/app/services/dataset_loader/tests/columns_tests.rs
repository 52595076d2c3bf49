//! Tests for census header column resolution

use super::CENSUS_HEADERS;
use crate::app::services::dataset_loader::ColumnMapping;
use csv::StringRecord;

#[test]
fn test_analyze_full_palmer_header() {
    let headers = StringRecord::from(CENSUS_HEADERS.to_vec());

    let mapping = ColumnMapping::analyze(&headers).expect("analyze should succeed");

    assert_eq!(mapping.species, 1);
    assert_eq!(mapping.island, 2);
    assert_eq!(mapping.flipper_length, 5);
    assert_eq!(mapping.body_mass, 6);
}

#[test]
fn test_analyze_minimal_header() {
    let headers = StringRecord::from(vec![
        "species",
        "island",
        "flipper_length_mm",
        "body_mass_g",
    ]);

    let mapping = ColumnMapping::analyze(&headers).expect("analyze should succeed");

    assert_eq!(mapping.species, 0);
    assert_eq!(mapping.island, 1);
    assert_eq!(mapping.flipper_length, 2);
    assert_eq!(mapping.body_mass, 3);
}

#[test]
fn test_analyze_trims_header_names() {
    let headers = StringRecord::from(vec![
        " species ",
        "island",
        "  flipper_length_mm",
        "body_mass_g ",
    ]);

    let mapping = ColumnMapping::analyze(&headers).expect("analyze should succeed");

    assert_eq!(mapping.species, 0);
    assert_eq!(mapping.flipper_length, 2);
}

#[test]
fn test_analyze_missing_column_names_the_column() {
    let headers = StringRecord::from(vec!["species", "island", "body_mass_g"]);

    let error = ColumnMapping::analyze(&headers).expect_err("analyze should fail");

    assert!(error.to_string().contains("flipper_length_mm"));
}

#[test]
fn test_field_returns_empty_for_absent_cell() {
    let headers = StringRecord::from(vec![
        "species",
        "island",
        "flipper_length_mm",
        "body_mass_g",
    ]);
    let mapping = ColumnMapping::analyze(&headers).unwrap();

    let short_record = StringRecord::from(vec!["Adelie", "Biscoe"]);

    assert_eq!(mapping.field(&short_record, mapping.species), "Adelie");
    assert_eq!(mapping.field(&short_record, mapping.flipper_length), "");
}
