use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::Error;

/// Read-only queries the routes run against the dataset.
#[async_trait]
pub trait ClimateData: Sync + Send {
    /// Total precipitation per date across all stations, for dates on or after `since`
    async fn daily_precipitation(&self, since: String) -> Result<Vec<DailyPrecipitation>, Error>;
    /// Distinct station ids that have at least one observation
    async fn active_stations(&self) -> Result<Vec<String>, Error>;
    /// Every observation for one station on or after `since`, in date then insertion order
    async fn station_temperatures(
        &self,
        station_id: String,
        since: String,
    ) -> Result<Vec<TemperatureObservation>, Error>;
    /// Min, average and max temperature across all stations within an inclusive date range
    async fn temperature_range(&self, req: &TripRequest) -> Result<TemperatureRange, Error>;
    async fn health_check(&self) -> Result<(), Error>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyPrecipitation {
    pub date: String,
    /// Null when every reading for the date was null
    pub total: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemperatureObservation {
    pub station: String,
    pub date: String,
    pub tobs: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Inclusive, `YYYY-MM-DD`
    pub start: String,
    /// Inclusive, `YYYY-MM-DD`
    pub end: String,
}

/// Raw aggregate row, every field is null when no observation matched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureRange {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureRange {
    pub fn into_trip_stats(self) -> Option<TripStats> {
        match (self.min, self.avg, self.max) {
            (Some(min), Some(average), Some(max)) => Some(TripStats { min, average, max }),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TripStats {
    #[serde(rename = "Min")]
    pub min: f64,
    #[serde(rename = "Average")]
    pub average: f64,
    #[serde(rename = "Max")]
    pub max: f64,
}

/// Date -> total precipitation, serialized with keys in ascending date order
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(transparent)]
pub struct PrecipitationSummary(pub BTreeMap<String, Option<f64>>);

impl From<Vec<DailyPrecipitation>> for PrecipitationSummary {
    fn from(rows: Vec<DailyPrecipitation>) -> Self {
        Self(rows.into_iter().map(|row| (row.date, row.total)).collect())
    }
}

/// Date -> temperature observation for a single station
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(transparent)]
pub struct TemperatureSummary(pub BTreeMap<String, Option<f64>>);

impl From<Vec<TemperatureObservation>> for TemperatureSummary {
    /// When a station reports more than once on the same date the first-seen
    /// observation is kept and the rest are dropped.
    fn from(observations: Vec<TemperatureObservation>) -> Self {
        let mut by_date = BTreeMap::new();
        for observation in observations {
            by_date.entry(observation.date).or_insert(observation.tobs);
        }
        Self(by_date)
    }
}
