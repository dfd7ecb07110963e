//! Per-country fiscal parameters for vehicle imports.
//!
//! The table is fixed at build time: 27 EU member states followed by 7
//! non-EU Balkan and Eastern European countries, keyed by a lowercase
//! hyphenated identifier (`"germany"`, `"bosnia-herzegovina"`).

pub mod table;

pub use table::{lookup, find_country, countries, countries_in};

use serde::{Deserialize, Serialize};

use crate::types::{GramsPerKm, Money, Percent};

/// Customs/tax region a country belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// EU member state
    Eu,
    /// Non-EU country (Western Balkans, Ukraine)
    NonEu,
}

/// Fiscal parameters applied to a single imported vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRate {
    /// Ad valorem customs duty on the CIF value
    pub customs_duty_percent: Percent,
    /// VAT applied to value + duty + excise
    pub vat_percent: Percent,
    /// Euros charged per g/km of CO₂ above the threshold
    pub excise_base_per_gram: Money,
    /// Emissions at or below this level attract no excise
    pub co2_threshold_g_per_km: GramsPerKm,
    /// Display-only annotation, no effect on the arithmetic
    pub note: &'static str,
}

/// A supported destination country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub id: &'static str,
    pub name: &'static str,
    pub region: Region,
    pub rate: CountryRate,
}

/// Canonical form of a country identifier for table matching.
pub(crate) fn normalize_country_id(id: &str) -> String {
    id.trim().to_lowercase()
}
