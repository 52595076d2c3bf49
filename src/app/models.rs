//! Core data models for the penguin census survey
//!
//! Census records keep every field as the raw text read from the source
//! file. Numeric coercion is deferred to the statistics stages, which know
//! how to treat empty and sentinel values as absent data.

use serde::{Deserialize, Serialize};

/// One row of the census dataset, fields kept as text
///
/// Missing data stays exactly as it appears in the file, whether an empty
/// string or a sentinel token such as "NA", so that downstream stages can
/// apply a single, consistent absent-data policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penguin {
    /// Species label, e.g. "Adelie"
    pub species: String,

    /// Island label, e.g. "Biscoe"
    pub island: String,

    /// Flipper length in millimetres, text-encoded
    pub flipper_length_mm: String,

    /// Body mass in grams, text-encoded (carried through, unused in
    /// aggregation)
    pub body_mass_g: String,
}

impl Penguin {
    /// Create a record from raw field texts
    pub fn new(
        species: impl Into<String>,
        island: impl Into<String>,
        flipper_length_mm: impl Into<String>,
        body_mass_g: impl Into<String>,
    ) -> Self {
        Self {
            species: species.into(),
            island: island.into(),
            flipper_length_mm: flipper_length_mm.into(),
            body_mass_g: body_mass_g.into(),
        }
    }
}

/// The two scalars a survey run computes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveySummary {
    /// Mean flipper length over the species subset, rounded to two
    /// decimals; 0.0 when the subset holds no valid measurements
    pub mean_flipper_length: f64,

    /// Percentage of the island population strictly above the mean,
    /// rounded to one decimal; 0.0 when no records match the island
    pub pct_above_mean: f64,
}

impl SurveySummary {
    /// Create a summary from the two computed values
    pub fn new(mean_flipper_length: f64, pct_above_mean: f64) -> Self {
        Self {
            mean_flipper_length,
            pct_above_mean,
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Survey summary: mean flipper length {:.2} mm | {:.1}% above average",
            self.mean_flipper_length, self.pct_above_mean
        )
    }
}
