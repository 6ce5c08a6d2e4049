pub mod climate_data;
pub mod sqlite;

pub use climate_data::*;
pub use sqlite::ClimateAccess;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Dataset unavailable: {0}")]
    MissingDatabase(#[from] climate_core::fs::Error),
    #[error("Database integrity check failed: {0}")]
    Integrity(String),
}
