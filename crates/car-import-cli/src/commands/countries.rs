use clap::{Args, ValueEnum};
use serde_json::{json, Value};

use car_import_core::rates::{self, Country, Region};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RegionArg {
    Eu,
    NonEu,
}

impl From<RegionArg> for Region {
    fn from(r: RegionArg) -> Self {
        match r {
            RegionArg::Eu => Region::Eu,
            RegionArg::NonEu => Region::NonEu,
        }
    }
}

/// Arguments for listing supported countries
#[derive(Args)]
pub struct CountriesArgs {
    /// Only list countries in this region
    #[arg(long)]
    pub region: Option<RegionArg>,
}

/// Arguments for showing one country's rates
#[derive(Args)]
pub struct CountryArgs {
    /// Country id (e.g. germany)
    pub id: String,
}

fn country_row(c: &Country) -> Value {
    json!({
        "id": c.id,
        "name": c.name,
        "region": c.region,
        "customs_duty_percent": c.rate.customs_duty_percent,
        "vat_percent": c.rate.vat_percent,
        "excise_base_per_gram": c.rate.excise_base_per_gram,
        "co2_threshold_g_per_km": c.rate.co2_threshold_g_per_km,
    })
}

pub fn run_countries(args: CountriesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows: Vec<Value> = match args.region {
        Some(region) => rates::countries_in(region.into()).map(country_row).collect(),
        None => rates::countries().iter().map(country_row).collect(),
    };
    Ok(json!({ "results": rows }))
}

pub fn run_country(args: CountryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let country = rates::find_country(&args.id)?;
    Ok(json!({ "result": country }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all() {
        let value = run_countries(CountriesArgs { region: None }).unwrap();
        assert_eq!(value["results"].as_array().unwrap().len(), 34);
    }

    #[test]
    fn test_list_non_eu() {
        let value = run_countries(CountriesArgs {
            region: Some(RegionArg::NonEu),
        })
        .unwrap();
        let rows = value["results"].as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r["region"] == "non-eu"));
    }

    #[test]
    fn test_show_country() {
        let value = run_country(CountryArgs { id: "France".into() }).unwrap();
        assert_eq!(value["result"]["rate"]["co2_threshold_g_per_km"], "117");
    }

    #[test]
    fn test_show_unknown_country() {
        assert!(run_country(CountryArgs { id: "generic-eu".into() }).is_err());
    }
}
