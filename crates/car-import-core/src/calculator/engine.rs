use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CarImportError;
use crate::rates::{self, normalize_country_id, CountryRate};
use crate::types::{from_f64, to_f64, GramsPerKm, Money};
use crate::CarImportResult;

/// Placeholder identifier for a non-country-specific EU estimate. It is not
/// a rate table entry, so only [`calculate_with_rate`] can reach it.
pub const GENERIC_EU_ID: &str = "generic-eu";

/// Flat surcharge on the subtotal for [`GENERIC_EU_ID`] (0.5%).
pub const TARIFF_SURCHARGE_RATE: f64 = 0.005;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for a single import cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Destination country identifier (e.g. "germany")
    pub country_id: String,
    /// Cost, Insurance and Freight value of the vehicle in euros
    pub car_value_eur: Money,
    /// Official WLTP CO₂ emissions in g/km
    pub co2_emissions_g_per_km: GramsPerKm,
}

impl CalculationInput {
    /// Parse a JSON request. Missing or malformed fields are `InvalidInput`.
    pub fn from_json(json: &str) -> CarImportResult<Self> {
        serde_json::from_str(json).map_err(CarImportError::from_request_error)
    }
}

/// Cost breakdown for one imported vehicle.
///
/// Each figure is the exact value of the double the formula chain produced,
/// carried in a Decimal; nothing is rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub car_value: Money,
    pub customs_duty: Money,
    pub excise_tax: Money,
    /// car_value + customs_duty + excise_tax
    pub subtotal: Money,
    pub vat: Money,
    pub tariff_surcharge: Money,
    /// subtotal + vat + tariff_surcharge
    pub total: Money,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_amounts(input: &CalculationInput) -> CarImportResult<()> {
    if input.car_value_eur <= Decimal::ZERO {
        return Err(CarImportError::InvalidInput {
            field: "car_value_eur".into(),
            reason: "Car value must be positive".into(),
        });
    }
    if input.co2_emissions_g_per_km < Decimal::ZERO {
        return Err(CarImportError::InvalidInput {
            field: "co2_emissions_g_per_km".into(),
            reason: "CO₂ emissions must be non-negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Emissions above the country's excise threshold, clamped at zero.
pub fn excess_co2(co2_emissions_g_per_km: GramsPerKm, rate: &CountryRate) -> GramsPerKm {
    (co2_emissions_g_per_km - rate.co2_threshold_g_per_km).max(Decimal::ZERO)
}

/// Compute the import cost breakdown for a country in the rate table.
///
/// Fails with `InvalidInput` for an empty country id, a non-positive car
/// value or negative emissions, and with `UnknownCountry` when the id is not
/// in the table.
pub fn calculate(input: &CalculationInput) -> CarImportResult<CalculationResult> {
    if input.country_id.trim().is_empty() {
        return Err(CarImportError::InvalidInput {
            field: "country_id".into(),
            reason: "Country must not be empty".into(),
        });
    }
    validate_amounts(input)?;

    let rate = rates::lookup(&input.country_id)?;
    calculate_with_rate(input, rate)
}

/// Apply an explicit rate record to the input.
///
/// `input.country_id` is not resolved here; it only decides whether the
/// generic tariff surcharge applies.
///
/// The chain runs in IEEE-754 doubles, operation for operation, so every
/// figure matches the published web calculator bit for bit:
///
/// customs_duty = (value * duty%) / 100
/// excise_tax = (co2 - threshold) * excise_base, only when co2 > threshold
/// subtotal = value + customs_duty + excise_tax
/// vat = (subtotal * vat%) / 100
/// total = subtotal + vat + tariff_surcharge
///
/// Results too large for a Decimal are rejected as `InvalidInput`.
pub fn calculate_with_rate(
    input: &CalculationInput,
    rate: &CountryRate,
) -> CarImportResult<CalculationResult> {
    validate_amounts(input)?;

    let value = to_f64("car_value_eur", input.car_value_eur)?;
    let co2 = to_f64("co2_emissions_g_per_km", input.co2_emissions_g_per_km)?;
    let duty_percent = to_f64("customs_duty_percent", rate.customs_duty_percent)?;
    let vat_percent = to_f64("vat_percent", rate.vat_percent)?;
    let excise_base = to_f64("excise_base_per_gram", rate.excise_base_per_gram)?;
    let threshold = to_f64("co2_threshold_g_per_km", rate.co2_threshold_g_per_km)?;

    let customs_duty = (value * duty_percent) / 100.0;
    let excise_tax = if co2 > threshold {
        (co2 - threshold) * excise_base
    } else {
        0.0
    };
    let subtotal = value + customs_duty + excise_tax;
    let vat = (subtotal * vat_percent) / 100.0;

    let tariff_surcharge = if normalize_country_id(&input.country_id) == GENERIC_EU_ID {
        subtotal * TARIFF_SURCHARGE_RATE
    } else {
        0.0
    };

    let total = subtotal + vat + tariff_surcharge;

    tracing::debug!(
        country_id = %input.country_id,
        value,
        customs_duty,
        excise_tax,
        vat,
        total,
        "import costs calculated"
    );

    Ok(CalculationResult {
        car_value: from_f64("car_value", value)?,
        customs_duty: from_f64("customs_duty", customs_duty)?,
        excise_tax: from_f64("excise_tax", excise_tax)?,
        subtotal: from_f64("subtotal", subtotal)?,
        vat: from_f64("vat", vat)?,
        tariff_surcharge: from_f64("tariff_surcharge", tariff_surcharge)?,
        total: from_f64("total", total)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
