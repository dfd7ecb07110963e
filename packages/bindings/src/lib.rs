use napi::Result as NapiResult;
use napi_derive::napi;

use car_import_core::calculator::{self, CalculationInput};
use car_import_core::estimate::{self, EstimateInput};
use car_import_core::rates;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Estimates
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_import_costs(input_json: String) -> NapiResult<String> {
    let input = EstimateInput::from_json(&input_json).map_err(to_napi_error)?;
    let output = estimate::estimate_import_costs(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_import_costs(input_json: String) -> NapiResult<String> {
    let input = CalculationInput::from_json(&input_json).map_err(to_napi_error)?;
    let output = calculator::calculate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rate table
// ---------------------------------------------------------------------------

#[napi]
pub fn list_countries() -> NapiResult<String> {
    serde_json::to_string(rates::countries()).map_err(to_napi_error)
}

#[napi]
pub fn country_rates(country_id: String) -> NapiResult<String> {
    let country = rates::find_country(&country_id).map_err(to_napi_error)?;
    serde_json::to_string(country).map_err(to_napi_error)
}
