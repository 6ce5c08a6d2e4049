pub mod db;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use db::{
    ClimateAccess, ClimateData, DailyPrecipitation, PrecipitationSummary, TemperatureObservation,
    TemperatureRange, TemperatureSummary, TripRequest, TripStats,
};
pub use routes::*;
pub use startup::*;
pub use utils::*;
