use crate::{
    db::{ClimateData, PrecipitationSummary, TemperatureSummary, TripStats},
    health, index_handler, precipitation, routes, stations, tobs, trip_between, trip_from,
    ErrorResponse, Health,
};
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use climate_core::{DEFAULT_ANCHOR_DATE, DEFAULT_TOBS_STATION, DEFAULT_TRIP_END_DATE};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Fixed query inputs for the routes that take no parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryDefaults {
    /// Lower bound of the one-year lookback for precipitation and tobs
    pub anchor_date: String,
    /// End of the trip range when the request only names a start date
    pub trip_end_date: String,
    /// Station reported by the tobs route
    pub tobs_station: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            anchor_date: DEFAULT_ANCHOR_DATE.to_string(),
            trip_end_date: DEFAULT_TRIP_END_DATE.to_string(),
            tobs_station: DEFAULT_TOBS_STATION.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub defaults: QueryDefaults,
    pub climate_db: Arc<dyn ClimateData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::summaries::precipitation,
        routes::climate::summaries::stations,
        routes::climate::summaries::tobs,
        routes::climate::trip::trip_from,
        routes::climate::trip::trip_between,
        routes::health::health,
    ),
    components(
        schemas(
            PrecipitationSummary,
            TemperatureSummary,
            TripStats,
            ErrorResponse,
            Health
        )
    ),
    tags(
        (name = "hawaii climate api", description = "a RESTful api over daily precipitation and temperature observations from Hawaii weather stations")
    )
)]
struct ApiDoc;

pub fn build_app_state(
    remote_url: String,
    defaults: QueryDefaults,
    climate_db: Arc<dyn ClimateData>,
) -> AppState {
    AppState {
        remote_url,
        defaults,
        climate_db,
    }
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/trip/{start}", get(trip_from))
        .route("/api/v1.0/trip/{start}/{end}", get(trip_between))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_owned();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
