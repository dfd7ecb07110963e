use serde::{Deserialize, Serialize};

use crate::calculator::CalculationResult;
use crate::error::CarImportError;
use crate::types::{from_f64, to_f64, Money, Percent};
use crate::CarImportResult;

/// Headline figures shown under a cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Everything paid on top of the car value
    pub additional_cost: Money,
    /// total / car_value * 100
    pub total_as_percent_of_value: Percent,
    /// additional_cost / car_value * 100
    pub import_fees_percent: Percent,
}

/// Derive the summary percentages from a breakdown, in doubles like the
/// engine, so the displayed figures round the same way.
pub fn summarize(result: &CalculationResult) -> CarImportResult<CostSummary> {
    if result.car_value.is_zero() {
        return Err(CarImportError::DivisionByZero {
            context: "cost summary (car value is zero)".into(),
        });
    }

    let car_value = to_f64("car_value", result.car_value)?;
    let total = to_f64("total", result.total)?;
    let additional_cost = total - car_value;

    Ok(CostSummary {
        additional_cost: from_f64("additional_cost", additional_cost)?,
        total_as_percent_of_value: from_f64(
            "total_as_percent_of_value",
            (total / car_value) * 100.0,
        )?,
        import_fees_percent: from_f64("import_fees_percent", (additional_cost / car_value) * 100.0)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate, CalculationInput};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn germany() -> CalculationResult {
        calculate(&CalculationInput {
            country_id: "germany".into(),
            car_value_eur: dec!(25000),
            co2_emissions_g_per_km: dec!(120),
        })
        .unwrap()
    }

    fn as_f64(d: Decimal) -> f64 {
        d.to_string().parse().unwrap()
    }

    #[test]
    fn test_summary_germany() {
        let s = summarize(&germany()).unwrap();
        assert_eq!(s.additional_cost, dec!(7784.5));
        assert_eq!(as_f64(s.total_as_percent_of_value), (32784.5_f64 / 25000.0) * 100.0);
        assert_eq!(as_f64(s.import_fees_percent), (7784.5_f64 / 25000.0) * 100.0);
        assert!((s.total_as_percent_of_value - dec!(131.138)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_fee_percent_tracks_total_percent() {
        let s = summarize(&germany()).unwrap();
        let diff = s.total_as_percent_of_value - s.import_fees_percent;
        assert!((diff - dec!(100)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_zero_car_value_guard() {
        let mut r = germany();
        r.car_value = Decimal::ZERO;
        assert!(matches!(
            summarize(&r),
            Err(CarImportError::DivisionByZero { .. })
        ));
    }
}
