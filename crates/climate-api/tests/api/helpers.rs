use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use climate_api::{
    app, build_app_state, db, ClimateData, DailyPrecipitation, QueryDefaults,
    TemperatureObservation, TemperatureRange, TripRequest,
};
use hyper::{header, Method};
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub ClimateAccess {}
    #[async_trait]
    impl ClimateData for ClimateAccess {
        async fn daily_precipitation(&self, since: String) -> Result<Vec<DailyPrecipitation>, db::Error>;
        async fn active_stations(&self) -> Result<Vec<String>, db::Error>;
        async fn station_temperatures(
            &self,
            station_id: String,
            since: String,
        ) -> Result<Vec<TemperatureObservation>, db::Error>;
        async fn temperature_range(&self, req: &TripRequest) -> Result<TemperatureRange, db::Error>;
        async fn health_check(&self) -> Result<(), db::Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub fn spawn_app(climate_db: Arc<dyn ClimateData>) -> TestApp {
    let app_state = build_app_state(
        String::from("http://127.0.0.1:5000"),
        QueryDefaults::default(),
        climate_db,
    );

    TestApp {
        app: app(app_state),
    }
}

impl TestApp {
    /// Issues a GET and returns the status with the raw response body
    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        let value = serde_json::from_slice(&body).expect("response body is not json");
        (status, value)
    }
}
