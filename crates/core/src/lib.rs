//! Hawaii Climate Core Library
//!
//! Shared pieces of the climate API service:
//! - Configuration loading (XDG-compliant)
//! - Dataset file checks
//! - Service defaults

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::{ensure_readable_file, is_file, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "hawaii-climate";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 5000;

/// Default location of the pre-populated dataset
pub const DEFAULT_DATABASE: &str = "./Resources/hawaii.sqlite";

/// Lower bound of the "last year" window used by the precipitation and tobs routes
pub const DEFAULT_ANCHOR_DATE: &str = "2016-08-23";

/// End date used by the trip route when only a start date is supplied
pub const DEFAULT_TRIP_END_DATE: &str = "2017-08-23";

/// Station reported by the tobs route (the most active station in the dataset)
pub const DEFAULT_TOBS_STATION: &str = "USC00519281";
