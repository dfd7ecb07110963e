use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use car_import_core::estimate::{self, EstimateInput, VehicleDetails};

use crate::input;

/// Arguments for an import cost estimate
#[derive(Args)]
pub struct EstimateArgs {
    /// Destination country id (e.g. germany, north-macedonia); see `cie countries`
    #[arg(long)]
    pub country: Option<String>,

    /// Car value (CIF) in EUR
    #[arg(long, alias = "value")]
    pub car_value: Option<Decimal>,

    /// Official WLTP CO₂ emissions in g/km
    #[arg(long, alias = "co2-emissions")]
    pub co2: Option<Decimal>,

    /// Car make (e.g. BMW)
    #[arg(long)]
    pub make: Option<String>,

    /// Car model (e.g. 320d)
    #[arg(long)]
    pub model: Option<String>,

    /// Year of manufacture
    #[arg(long)]
    pub year: Option<i32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn vehicle_from_args(args: &EstimateArgs) -> Result<Option<VehicleDetails>, Box<dyn std::error::Error>> {
    match (&args.make, &args.model, args.year) {
        (None, None, None) => Ok(None),
        (Some(make), Some(model), Some(year)) => Ok(Some(VehicleDetails {
            make: make.clone(),
            model: model.clone(),
            year_of_manufacture: year,
        })),
        _ => Err("--make, --model and --year must be given together".into()),
    }
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let estimate_input = if let Some(ref path) = args.input {
        EstimateInput::from_json(&input::file::read_request(path)?)?
    } else if args.country.is_none() {
        let request = input::stdin::read_piped_request()?
            .ok_or("--country is required (or provide --input or pipe JSON on stdin)")?;
        EstimateInput::from_json(&request)?
    } else {
        EstimateInput {
            country_id: args
                .country
                .clone()
                .ok_or("--country is required (or provide --input)")?,
            car_value_eur: args
                .car_value
                .ok_or("--car-value is required (or provide --input)")?,
            co2_emissions_g_per_km: args
                .co2
                .ok_or("--co2 is required (or provide --input)")?,
            vehicle: vehicle_from_args(&args)?,
        }
    };

    let result = estimate::estimate_import_costs(&estimate_input)?;
    Ok(serde_json::to_value(result)?)
}
