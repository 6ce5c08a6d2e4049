use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::climate::{Error, ErrorResponse};
use crate::AppState;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct Health {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = OK, description = "Dataset is reachable and passes an integrity check", body = Health),
        (status = SERVICE_UNAVAILABLE, description = "Dataset cannot be queried", body = ErrorResponse)
    ))]
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Health>, Error> {
    state
        .climate_db
        .health_check()
        .await
        .map_err(Error::Unavailable)?;

    Ok(Json(Health {
        status: String::from("ok"),
    }))
}
