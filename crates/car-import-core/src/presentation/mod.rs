//! Display helpers for callers rendering a calculation: derived summary
//! percentages and euro/percentage formatting. Nothing here feeds back into
//! the engine.

pub mod format;
pub mod summary;

pub use format::{format_breakdown, format_eur, format_percent, FormattedBreakdown};
pub use summary::{summarize, CostSummary};
