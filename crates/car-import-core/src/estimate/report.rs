//! Full import cost estimate: engine breakdown plus country metadata,
//! vehicle details, summary figures and formatted strings, wrapped in the
//! standard computation envelope.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calculator::{self, CalculationInput, CalculationResult};
use crate::error::CarImportError;
use crate::presentation::{self, CostSummary, FormattedBreakdown};
use crate::rates::{self, Country, Region};
use crate::types::{with_metadata, ComputationOutput, GramsPerKm, Money};
use crate::CarImportResult;

/// Model years offered for estimates.
pub const MIN_YEAR_OF_MANUFACTURE: i32 = 2000;
pub const MAX_YEAR_OF_MANUFACTURE: i32 = 2025;

/// Emissions above this are outside the range of the input form.
const HIGH_EMISSIONS_G_PER_KM: GramsPerKm = dec!(500);

pub const DISCLAIMER: &str = "This calculator provides estimates based on standard rates. \
Actual fees may vary depending on specific circumstances, car age, engine size, and current \
regulations. Always consult with customs authorities for official calculations.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Vehicle identification echoed on the estimate. Display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    pub country_id: String,
    pub car_value_eur: Money,
    pub co2_emissions_g_per_km: GramsPerKm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleDetails>,
}

impl EstimateInput {
    /// Parse a JSON request. Missing or malformed fields are `InvalidInput`.
    pub fn from_json(json: &str) -> CarImportResult<Self> {
        serde_json::from_str(json).map_err(CarImportError::from_request_error)
    }

    /// As [`EstimateInput::from_json`], for an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> CarImportResult<Self> {
        serde_json::from_value(value).map_err(CarImportError::from_request_error)
    }

    pub fn calculation_input(&self) -> CalculationInput {
        CalculationInput {
            country_id: self.country_id.clone(),
            car_value_eur: self.car_value_eur,
            co2_emissions_g_per_km: self.co2_emissions_g_per_km,
        }
    }
}

/// Destination country as shown alongside the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub id: String,
    pub name: String,
    pub region: Region,
    pub note: String,
}

impl From<&Country> for CountryInfo {
    fn from(c: &Country) -> Self {
        CountryInfo {
            id: c.id.to_string(),
            name: c.name.to_string(),
            region: c.region,
            note: c.rate.note.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportEstimate {
    pub country: CountryInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleDetails>,
    pub breakdown: CalculationResult,
    /// Emissions above the country's excise threshold (g/km)
    pub excess_co2: GramsPerKm,
    pub summary: CostSummary,
    pub formatted: FormattedBreakdown,
    pub disclaimer: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_vehicle(vehicle: &VehicleDetails) -> CarImportResult<()> {
    if vehicle.make.trim().is_empty() {
        return Err(CarImportError::InvalidInput {
            field: "vehicle.make".into(),
            reason: "Car make must not be empty".into(),
        });
    }
    if vehicle.model.trim().is_empty() {
        return Err(CarImportError::InvalidInput {
            field: "vehicle.model".into(),
            reason: "Car model must not be empty".into(),
        });
    }
    if !(MIN_YEAR_OF_MANUFACTURE..=MAX_YEAR_OF_MANUFACTURE).contains(&vehicle.year_of_manufacture) {
        return Err(CarImportError::InvalidInput {
            field: "vehicle.year_of_manufacture".into(),
            reason: format!(
                "Year of manufacture must be between {MIN_YEAR_OF_MANUFACTURE} and \
                 {MAX_YEAR_OF_MANUFACTURE}"
            ),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the full cost of importing a car into a supported country.
///
/// Runs the calculation engine, then attaches the country record, derived
/// summary percentages and display strings. Any validation failure aborts
/// the whole estimate.
pub fn estimate_import_costs(
    input: &EstimateInput,
) -> CarImportResult<ComputationOutput<ImportEstimate>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if let Some(vehicle) = &input.vehicle {
        validate_vehicle(vehicle)?;
    }

    let breakdown = calculator::calculate(&input.calculation_input())?;
    let country = rates::find_country(&input.country_id)?;
    let excess_co2 = calculator::excess_co2(input.co2_emissions_g_per_km, &country.rate);
    let summary = presentation::summarize(&breakdown)?;
    let formatted = presentation::format_breakdown(&breakdown, &summary);

    if excess_co2 > dec!(0) {
        warnings.push(format!(
            "Emissions exceed the {} g/km threshold for {} by {} g/km; excise of {} applies",
            country.rate.co2_threshold_g_per_km, country.name, excess_co2, formatted.excise_tax
        ));
    }
    if input.co2_emissions_g_per_km > HIGH_EMISSIONS_G_PER_KM {
        warnings.push(format!(
            "CO₂ emissions of {} g/km are unusually high; verify the WLTP figure",
            input.co2_emissions_g_per_km
        ));
    }
    if breakdown.tariff_surcharge > dec!(0) {
        warnings.push(format!(
            "Generic tariff surcharge of {} applied",
            formatted.tariff_surcharge
        ));
    }

    let estimate = ImportEstimate {
        country: CountryInfo::from(country),
        vehicle: input.vehicle.clone(),
        breakdown,
        excess_co2,
        summary,
        formatted,
        disclaimer: DISCLAIMER.to_string(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Customs duty on CIF value, CO₂ excise above threshold, VAT on value + duty + excise",
        &country.rate,
        warnings,
        elapsed,
        estimate,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_input() -> EstimateInput {
        EstimateInput {
            country_id: "germany".to_string(),
            car_value_eur: dec!(25000),
            co2_emissions_g_per_km: dec!(120),
            vehicle: Some(VehicleDetails {
                make: "BMW".to_string(),
                model: "320d".to_string(),
                year_of_manufacture: 2019,
            }),
        }
    }

    #[test]
    fn test_germany_estimate() {
        let out = estimate_import_costs(&make_input()).unwrap();
        let est = &out.result;
        assert_eq!(est.country.name, "Germany");
        assert_eq!(est.country.region, Region::Eu);
        assert_eq!(est.excess_co2, dec!(25));
        assert_eq!(est.breakdown.total, dec!(32784.5));
        assert_eq!(est.formatted.total, "€32,784.50");
        assert_eq!(est.formatted.total_as_percent_of_value, "131.1%");
        assert_eq!(est.formatted.import_fees_percent, "31.1%");
        assert_eq!(est.vehicle.as_ref().unwrap().make, "BMW");
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("95 g/km"));
    }

    #[test]
    fn test_assumptions_carry_rate_record() {
        let out = estimate_import_costs(&make_input()).unwrap();
        assert_eq!(out.assumptions["vat_percent"], "19");
        assert_eq!(
            out.assumptions["note"],
            "CO₂-based motor vehicle tax, excise varies"
        );
    }

    #[test]
    fn test_no_warnings_below_threshold() {
        let mut input = make_input();
        input.country_id = "denmark".into();
        input.car_value_eur = dec!(20000);
        input.co2_emissions_g_per_km = dec!(90);
        let out = estimate_import_costs(&input).unwrap();
        assert!(out.warnings.is_empty());
        assert_eq!(out.result.excess_co2, dec!(0));
        assert_eq!(out.result.formatted.total, "€27,500.00");
    }

    #[test]
    fn test_high_emissions_warning() {
        let mut input = make_input();
        input.co2_emissions_g_per_km = dec!(550);
        let out = estimate_import_costs(&input).unwrap();
        assert_eq!(out.warnings.len(), 2);
        assert!(out.warnings[1].contains("unusually high"));
    }

    #[test]
    fn test_vehicle_optional() {
        let mut input = make_input();
        input.vehicle = None;
        let out = estimate_import_costs(&input).unwrap();
        assert!(out.result.vehicle.is_none());
    }

    #[test]
    fn test_empty_make_rejected() {
        let mut input = make_input();
        input.vehicle.as_mut().unwrap().make = " ".into();
        let err = estimate_import_costs(&input).unwrap_err();
        assert!(matches!(err, CarImportError::InvalidInput { ref field, .. } if field == "vehicle.make"));
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        let mut input = make_input();
        input.vehicle.as_mut().unwrap().year_of_manufacture = 1995;
        assert!(estimate_import_costs(&input).is_err());

        input.vehicle.as_mut().unwrap().year_of_manufacture = 2026;
        assert!(estimate_import_costs(&input).is_err());

        for year in [MIN_YEAR_OF_MANUFACTURE, MAX_YEAR_OF_MANUFACTURE] {
            input.vehicle.as_mut().unwrap().year_of_manufacture = year;
            assert!(estimate_import_costs(&input).is_ok());
        }
    }

    #[test]
    fn test_unknown_country_propagates() {
        let mut input = make_input();
        input.country_id = "generic-eu".into();
        let err = estimate_import_costs(&input).unwrap_err();
        assert!(matches!(err, CarImportError::UnknownCountry(_)));
    }

    #[test]
    fn test_formatted_total_rounds_like_double() {
        let mut input = make_input();
        input.car_value_eur = dec!(20005);
        input.co2_emissions_g_per_km = dec!(100);
        let est = estimate_import_costs(&input).unwrap().result;
        assert_eq!(est.formatted.vat, "€4,182.94");
        assert_eq!(est.formatted.total, "€26,198.44");
        assert_eq!(est.formatted.additional_cost, "€6,193.44");
    }

    #[test]
    fn test_region_serializes_like_country_listing() {
        let mut input = make_input();
        input.country_id = "serbia".into();
        let out = estimate_import_costs(&input).unwrap();
        let json = serde_json::to_value(&out.result).unwrap();
        assert_eq!(json["country"]["region"], "non-eu");
    }

    #[test]
    fn test_from_json_missing_field() {
        let err = EstimateInput::from_json(r#"{"country_id": "germany", "co2_emissions_g_per_km": 120}"#)
            .unwrap_err();
        assert!(
            matches!(err, CarImportError::InvalidInput { ref field, .. } if field == "car_value_eur")
        );
    }

    #[test]
    fn test_from_value_bad_vehicle_year_type() {
        let err = EstimateInput::from_value(serde_json::json!({
            "country_id": "germany",
            "car_value_eur": 25000,
            "co2_emissions_g_per_km": 120,
            "vehicle": {"make": "BMW", "model": "320d", "year_of_manufacture": "recent"}
        }))
        .unwrap_err();
        assert!(matches!(err, CarImportError::InvalidInput { .. }));
    }

    #[test]
    fn test_input_deserializes_without_vehicle() {
        let input: EstimateInput = serde_json::from_str(
            r#"{"country_id": "serbia", "car_value_eur": "15000", "co2_emissions_g_per_km": 110}"#,
        )
        .unwrap();
        assert!(input.vehicle.is_none());
        assert_eq!(input.car_value_eur, dec!(15000));
    }
}
