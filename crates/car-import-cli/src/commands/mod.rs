pub mod countries;
pub mod estimate;
