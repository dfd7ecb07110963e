use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::summary::CostSummary;
use crate::calculator::CalculationResult;

/// Every breakdown line rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedBreakdown {
    pub car_value: String,
    pub customs_duty: String,
    pub excise_tax: String,
    pub subtotal: String,
    pub vat: String,
    pub tariff_surcharge: String,
    pub total: String,
    pub additional_cost: String,
    pub total_as_percent_of_value: String,
    pub import_fees_percent: String,
}

/// Render an amount in euros with two decimals and comma thousands
/// separators, e.g. `€32,784.50` or `-€1,000.00`.
pub fn format_eur(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}€{grouped}.{frac_part}")
}

/// Render a percentage with one decimal, e.g. `131.1%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

pub fn format_breakdown(result: &CalculationResult, summary: &CostSummary) -> FormattedBreakdown {
    FormattedBreakdown {
        car_value: format_eur(result.car_value),
        customs_duty: format_eur(result.customs_duty),
        excise_tax: format_eur(result.excise_tax),
        subtotal: format_eur(result.subtotal),
        vat: format_eur(result.vat),
        tariff_surcharge: format_eur(result.tariff_surcharge),
        total: format_eur(result.total),
        additional_cost: format_eur(summary.additional_cost),
        total_as_percent_of_value: format_percent(summary.total_as_percent_of_value),
        import_fees_percent: format_percent(summary.import_fees_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_eur_thousands() {
        assert_eq!(format_eur(dec!(32784.5)), "€32,784.50");
        assert_eq!(format_eur(dec!(1234567.891)), "€1,234,567.89");
        assert_eq!(format_eur(dec!(999)), "€999.00");
        assert_eq!(format_eur(dec!(100000)), "€100,000.00");
    }

    #[test]
    fn test_format_eur_rounds_half_away_from_zero() {
        assert_eq!(format_eur(dec!(0.125)), "€0.13");
        assert_eq!(format_eur(dec!(-0.125)), "-€0.13");
    }

    #[test]
    fn test_format_eur_zero_and_negative() {
        assert_eq!(format_eur(Decimal::ZERO), "€0.00");
        assert_eq!(format_eur(dec!(-0.001)), "€0.00");
        assert_eq!(format_eur(dec!(-1500)), "-€1,500.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(131.138)), "131.1%");
        assert_eq!(format_percent(dec!(31.15)), "31.2%");
        assert_eq!(format_percent(dec!(25)), "25.0%");
    }

    #[test]
    fn test_format_breakdown() {
        let result = CalculationResult {
            car_value: dec!(20000),
            customs_duty: dec!(2000),
            excise_tax: Decimal::ZERO,
            subtotal: dec!(22000),
            vat: dec!(5500),
            tariff_surcharge: Decimal::ZERO,
            total: dec!(27500),
        };
        let summary = CostSummary {
            additional_cost: dec!(7500),
            total_as_percent_of_value: dec!(137.5),
            import_fees_percent: dec!(37.5),
        };
        let f = format_breakdown(&result, &summary);
        assert_eq!(f.total, "€27,500.00");
        assert_eq!(f.excise_tax, "€0.00");
        assert_eq!(f.additional_cost, "€7,500.00");
        assert_eq!(f.total_as_percent_of_value, "137.5%");
        assert_eq!(f.import_fees_percent, "37.5%");
    }
}
