pub mod calculator;
pub mod error;
pub mod rates;
pub mod types;

#[cfg(feature = "presentation")]
pub mod presentation;

#[cfg(feature = "estimate")]
pub mod estimate;

pub use error::CarImportError;
pub use types::*;

/// Standard result type for all car-import operations
pub type CarImportResult<T> = Result<T, CarImportError>;
