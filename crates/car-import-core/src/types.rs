use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CarImportError;
use crate::CarImportResult;

/// All monetary values, in euros. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as percentages (19 = 19%), the way national tariffs quote them.
pub type Percent = Decimal;

/// Tailpipe CO₂ emissions in grams per kilometre (WLTP).
pub type GramsPerKm = Decimal;

/// Nearest double to a decimal amount, the value a browser's
/// `Number.parseFloat` gives for the same form field.
pub(crate) fn to_f64(field: &str, value: Decimal) -> CarImportResult<f64> {
    value
        .to_string()
        .parse::<f64>()
        .map_err(|e| CarImportError::InvalidInput {
            field: field.into(),
            reason: format!("Cannot convert {value} to a double: {e}"),
        })
}

/// Carry a double back into a Decimal without rounding it. Fails for
/// non-finite values and values beyond the Decimal range.
pub(crate) fn from_f64(field: &str, value: f64) -> CarImportResult<Decimal> {
    Decimal::from_f64_retain(value).ok_or_else(|| CarImportError::InvalidInput {
        field: field.into(),
        reason: format!("{value} is outside the representable monetary range"),
    })
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}
