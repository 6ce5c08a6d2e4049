pub mod summaries;
pub mod trip;

pub use summaries::*;
pub use trip::*;

use axum::{http::StatusCode, response::IntoResponse, Json};
use log::error;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),
    #[error("Failed to read climate data: {0}")]
    Database(#[from] db::Error),
    #[error("Dataset unavailable: {0}")]
    Unavailable(db::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!("error handling request: {}", self);
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
