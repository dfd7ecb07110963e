pub mod report;

pub use report::{
    estimate_import_costs, CountryInfo, EstimateInput, ImportEstimate, VehicleDetails, DISCLAIMER,
};
