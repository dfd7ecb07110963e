//! Import cost calculation engine.
//!
//! Pure and synchronous: one table lookup followed by a fixed chain of
//! arithmetic (duty → excise → subtotal → VAT → surcharge → total).

pub mod engine;

pub use engine::{
    calculate, calculate_with_rate, excess_co2, CalculationInput, CalculationResult,
    GENERIC_EU_ID, TARIFF_SURCHARGE_RATE,
};
