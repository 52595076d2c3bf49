//! Numeric-or-textual report inputs

/// A report input that may arrive as a number or as text
///
/// The writer coerces each input to a float through [`ReportValue::as_f64`]
/// and substitutes the "N/A" marker on its line when coercion fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    Number(f64),
    Text(String),
}

impl ReportValue {
    /// Try to interpret the value as a finite `f64`
    ///
    /// Text is trimmed before parsing. Non-finite numbers count as failed
    /// coercions so the report never renders "NaN mm".
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ReportValue::Number(value) => value.is_finite().then_some(*value),
            ReportValue::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f64> for ReportValue {
    fn from(value: f64) -> Self {
        ReportValue::Number(value)
    }
}

impl From<&str> for ReportValue {
    fn from(text: &str) -> Self {
        ReportValue::Text(text.to_string())
    }
}

impl From<String> for ReportValue {
    fn from(text: String) -> Self {
        ReportValue::Text(text)
    }
}
