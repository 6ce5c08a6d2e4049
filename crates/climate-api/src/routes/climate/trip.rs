use axum::{
    extract::{Path, State},
    Json,
};
use log::debug;
use std::sync::Arc;

use super::{Error, ErrorResponse};
use crate::{AppState, TripRequest, TripStats};

#[utoipa::path(
    get,
    path = "/api/v1.0/trip/{start}",
    params(
        ("start" = String, Path, description = "First day of the trip, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Min, average and max temperature from the start date through the default end date", body = Vec<TripStats>),
        (status = NOT_FOUND, description = "No observations in range or the date is not formatted as YYYY-MM-DD", body = ErrorResponse)
    ))]
pub async fn trip_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TripStats>>, Error> {
    let req = TripRequest {
        start,
        end: state.defaults.trip_end_date.clone(),
    };
    let not_found = format!(
        "Date {} not found or not formatted as YYYY-MM-DD.",
        req.start
    );
    trip_stats(&state, &req, not_found).await
}

#[utoipa::path(
    get,
    path = "/api/v1.0/trip/{start}/{end}",
    params(
        ("start" = String, Path, description = "First day of the trip, YYYY-MM-DD"),
        ("end" = String, Path, description = "Last day of the trip, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Min, average and max temperature between the two dates, inclusive", body = Vec<TripStats>),
        (status = NOT_FOUND, description = "No observations in range, an inverted range, or badly formatted dates", body = ErrorResponse)
    ))]
pub async fn trip_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TripStats>>, Error> {
    let req = TripRequest { start, end };
    let not_found = String::from(
        "Date(s) not found, invalid date range or dates not formatted correctly.",
    );
    trip_stats(&state, &req, not_found).await
}

/// Dates are not validated here: a malformed date matches no rows under
/// string comparison and ends up in the not found branch.
async fn trip_stats(
    state: &AppState,
    req: &TripRequest,
    not_found: String,
) -> Result<Json<Vec<TripStats>>, Error> {
    let range = state.climate_db.temperature_range(req).await?;
    match range.into_trip_stats() {
        Some(stats) => Ok(Json(vec![stats])),
        None => {
            debug!("no observations between {} and {}", req.start, req.end);
            Err(Error::NotFound(not_found))
        }
    }
}
