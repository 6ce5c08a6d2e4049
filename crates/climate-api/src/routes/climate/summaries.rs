use axum::{extract::State, Json};
use std::sync::Arc;

use super::{Error, ErrorResponse};
use crate::{AppState, PrecipitationSummary, TemperatureSummary};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Total precipitation per date across all stations since the anchor date", body = PrecipitationSummary),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorResponse)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PrecipitationSummary>, Error> {
    let rows = state
        .climate_db
        .daily_precipitation(state.defaults.anchor_date.clone())
        .await?;

    Ok(Json(PrecipitationSummary::from(rows)))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Every station id that has reported an observation", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorResponse)
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, Error> {
    let stations = state.climate_db.active_stations().await?;
    Ok(Json(stations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observation per date for the most active station since the anchor date", body = TemperatureSummary),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorResponse)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TemperatureSummary>, Error> {
    let observations = state
        .climate_db
        .station_temperatures(
            state.defaults.tobs_station.clone(),
            state.defaults.anchor_date.clone(),
        )
        .await?;

    Ok(Json(TemperatureSummary::from(observations)))
}
