use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{normalize_country_id, Country, CountryRate, Region};
use crate::error::CarImportError;
use crate::CarImportResult;

// ---------------------------------------------------------------------------
// Built-in rate data
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
const fn country(
    id: &'static str,
    name: &'static str,
    region: Region,
    customs_duty_percent: Decimal,
    vat_percent: Decimal,
    excise_base_per_gram: Decimal,
    co2_threshold_g_per_km: Decimal,
    note: &'static str,
) -> Country {
    Country {
        id,
        name,
        region,
        rate: CountryRate {
            customs_duty_percent,
            vat_percent,
            excise_base_per_gram,
            co2_threshold_g_per_km,
            note,
        },
    }
}

use Region::{Eu, NonEu};

/// EU members first, then non-EU, each alphabetical by identifier.
#[rustfmt::skip]
static COUNTRIES: [Country; 34] = [
    // --- EU ---
    country("austria", "Austria", Eu, dec!(10), dec!(20), dec!(2.5), dec!(95),
        "Excise varies; CO₂-based tax on fuel consumption"),
    country("belgium", "Belgium", Eu, dec!(10), dec!(21), dec!(2.8), dec!(95),
        "Excise taxes depend on fuel and age"),
    country("bulgaria", "Bulgaria", Eu, dec!(10), dec!(20), dec!(2.0), dec!(95),
        "Excise on fuel and CO₂ emissions"),
    country("croatia", "Croatia", Eu, dec!(10), dec!(25), dec!(3.0), dec!(95),
        "Excise varies by engine capacity & emissions"),
    country("cyprus", "Cyprus", Eu, dec!(10), dec!(19), dec!(2.5), dec!(95),
        "Excise taxes + green tax on emissions"),
    country("czechia", "Czechia", Eu, dec!(10), dec!(21), dec!(2.3), dec!(95),
        "Excise tax on fuel and emissions"),
    country("denmark", "Denmark", Eu, dec!(10), dec!(25), dec!(4.5), dec!(95),
        "High registration tax, excise based on engine size and emissions"),
    country("estonia", "Estonia", Eu, dec!(10), dec!(20), dec!(1.8), dec!(95),
        "Excise applies mostly on fuel"),
    country("finland", "Finland", Eu, dec!(10), dec!(24), dec!(3.2), dec!(95),
        "Excise varies by CO₂ emissions"),
    country("france", "France", Eu, dec!(10), dec!(20), dec!(4.0), dec!(117),
        "Bonus-malus system (eco tax) based on CO₂"),
    country("germany", "Germany", Eu, dec!(10), dec!(19), dec!(2.0), dec!(95),
        "CO₂-based motor vehicle tax, excise varies"),
    country("greece", "Greece", Eu, dec!(10), dec!(24), dec!(2.8), dec!(95),
        "Registration and excise taxes depend on engine size & emissions"),
    country("hungary", "Hungary", Eu, dec!(10), dec!(27), dec!(2.5), dec!(95),
        "Excise based on fuel and CO₂"),
    country("ireland", "Ireland", Eu, dec!(10), dec!(23), dec!(3.5), dec!(95),
        "Vehicle registration tax includes CO₂ emissions fees"),
    country("italy", "Italy", Eu, dec!(10), dec!(22), dec!(2.8), dec!(95),
        "Registration tax & eco tax on emissions"),
    country("latvia", "Latvia", Eu, dec!(10), dec!(21), dec!(2.2), dec!(95),
        "Excise tax based on engine and emissions"),
    country("lithuania", "Lithuania", Eu, dec!(10), dec!(21), dec!(2.3), dec!(95),
        "Excise on CO₂ emissions"),
    country("luxembourg", "Luxembourg", Eu, dec!(10), dec!(16), dec!(2.0), dec!(95),
        "Excise based on fuel and engine size"),
    country("malta", "Malta", Eu, dec!(10), dec!(18), dec!(2.2), dec!(95),
        "Excise duties and environmental tax"),
    country("netherlands", "Netherlands", Eu, dec!(10), dec!(21), dec!(3.8), dec!(95),
        "Registration tax based on CO₂ and price"),
    country("poland", "Poland", Eu, dec!(10), dec!(23), dec!(2.5), dec!(95),
        "Excise and eco tax depend on age and emissions"),
    country("portugal", "Portugal", Eu, dec!(10), dec!(23), dec!(3.0), dec!(95),
        "CO₂-based vehicle tax and excise"),
    country("romania", "Romania", Eu, dec!(10), dec!(19), dec!(2.0), dec!(95),
        "Excise and green tax apply"),
    country("slovakia", "Slovakia", Eu, dec!(10), dec!(20), dec!(2.2), dec!(95),
        "Excise based on engine and emissions"),
    country("slovenia", "Slovenia", Eu, dec!(10), dec!(22), dec!(2.5), dec!(95),
        "CO₂ tax applied"),
    country("spain", "Spain", Eu, dec!(10), dec!(21), dec!(2.8), dec!(95),
        "Registration tax based on CO₂"),
    country("sweden", "Sweden", Eu, dec!(10), dec!(25), dec!(3.5), dec!(95),
        "Bonus-malus system with CO₂ tax"),
    // --- Non-EU ---
    country("albania", "Albania", NonEu, dec!(10), dec!(20), dec!(2.0), dec!(120),
        "Excise tax on engines >2.5L or age >5 years"),
    country("bosnia-herzegovina", "Bosnia & Herzegovina", NonEu, dec!(10), dec!(17), dec!(1.8), dec!(115),
        "Excise on fuel and CO₂"),
    country("kosovo", "Kosovo", NonEu, dec!(5), dec!(18), dec!(1.5), dec!(110),
        "Excise depends on engine size and age"),
    // Midpoint of the 5-10% band
    country("montenegro", "Montenegro", NonEu, dec!(7.5), dec!(21), dec!(2.2), dec!(120),
        "Excise tax on vehicles depending on size/age"),
    country("north-macedonia", "North Macedonia", NonEu, dec!(5), dec!(18), dec!(1.5), dec!(120),
        "Excise/eco tax based on emissions"),
    country("serbia", "Serbia", NonEu, dec!(10), dec!(20), dec!(2.0), dec!(115),
        "Excise and environmental taxes"),
    country("ukraine", "Ukraine", NonEu, dec!(10), dec!(20), dec!(1.8), dec!(120),
        "Excise duties and environmental tax"),
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// All supported countries, EU members first.
pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Countries belonging to `region`, in table order.
pub fn countries_in(region: Region) -> impl Iterator<Item = &'static Country> {
    COUNTRIES.iter().filter(move |c| c.region == region)
}

/// Resolve a country entry by identifier (case-insensitive, surrounding
/// whitespace ignored).
pub fn find_country(country_id: &str) -> CarImportResult<&'static Country> {
    let key = normalize_country_id(country_id);
    let found = COUNTRIES.iter().find(|c| c.id == key);
    tracing::debug!(country_id = %key, found = found.is_some(), "rate table lookup");
    found.ok_or_else(|| CarImportError::UnknownCountry(country_id.to_string()))
}

/// Resolve the fiscal parameters for a country.
pub fn lookup(country_id: &str) -> CarImportResult<&'static CountryRate> {
    find_country(country_id).map(|c| &c.rate)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
