//! Tests for census CSV loading

use super::write_census_csv;
use crate::Error;
use crate::app::services::dataset_loader::load_census;

#[test]
fn test_basic_load_expected_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("penguins.csv");
    write_census_csv(
        &path,
        &[
            ("Adelie", "Biscoe", "190", "3700"),
            ("Gentoo", "Torgersen", "210", "5000"),
        ],
    );

    let result = load_census(&path).expect("load should succeed");

    assert_eq!(result.penguins.len(), 2);
    assert_eq!(result.stats.total_records, 2);
    assert_eq!(result.stats.records_loaded, 2);
    assert_eq!(result.stats.records_skipped, 0);

    assert_eq!(result.penguins[0].species, "Adelie");
    assert_eq!(result.penguins[0].island, "Biscoe");
    assert_eq!(result.penguins[0].flipper_length_mm, "190");
    assert_eq!(result.penguins[0].body_mass_g, "3700");
    assert_eq!(result.penguins[1].species, "Gentoo");
}

#[test]
fn test_load_preserves_source_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("penguins.csv");
    write_census_csv(
        &path,
        &[
            ("Gentoo", "Biscoe", "215", "5100"),
            ("Adelie", "Dream", "186", "3600"),
            ("Chinstrap", "Dream", "195", "3800"),
        ],
    );

    let result = load_census(&path).unwrap();

    let species: Vec<&str> = result
        .penguins
        .iter()
        .map(|p| p.species.as_str())
        .collect();
    assert_eq!(species, vec!["Gentoo", "Adelie", "Chinstrap"]);
}

#[test]
fn test_load_keeps_missing_numeric_fields_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("penguins.csv");
    write_census_csv(&path, &[("Adelie", "Dream", "", "NA")]);

    let result = load_census(&path).unwrap();

    assert_eq!(result.penguins.len(), 1);
    assert_eq!(result.penguins[0].flipper_length_mm, "");
    assert_eq!(result.penguins[0].body_mass_g, "NA");
}

#[test]
fn test_header_only_file_returns_empty_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("penguins.csv");
    write_census_csv(&path, &[]);

    let result = load_census(&path).unwrap();

    assert!(result.penguins.is_empty());
    assert_eq!(result.stats.total_records, 0);
    assert_eq!(result.stats.records_loaded, 0);
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_file.csv");

    let error = load_census(&path).expect_err("load should fail");

    assert!(matches!(error, Error::FileNotFound { .. }));
    assert!(error.to_string().contains("no_such_file.csv"));
}

#[test]
fn test_missing_required_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("penguins.csv");
    std::fs::write(&path, "species,island,body_mass_g\nAdelie,Biscoe,3700\n").unwrap();

    let error = load_census(&path).expect_err("load should fail");

    assert!(matches!(error, Error::DataValidation { .. }));
    assert!(error.to_string().contains("flipper_length_mm"));
}

#[test]
fn test_malformed_row_is_skipped_and_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("penguins.csv");
    // Second data row has the wrong field count
    std::fs::write(
        &path,
        "species,island,flipper_length_mm,body_mass_g\n\
         Adelie,Biscoe,190,3700\n\
         Adelie,Dream\n\
         Gentoo,Biscoe,215,5100\n",
    )
    .unwrap();

    let result = load_census(&path).expect("load should degrade, not fail");

    assert_eq!(result.stats.total_records, 3);
    assert_eq!(result.stats.records_loaded, 2);
    assert_eq!(result.stats.records_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert_eq!(result.penguins.len(), 2);
}
