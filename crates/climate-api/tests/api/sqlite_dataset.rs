use crate::helpers::spawn_app;
use axum::http::StatusCode;
use climate_api::ClimateAccess;
use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::{str::FromStr, sync::Arc};
use tempfile::TempDir;

/// Builds a dataset shaped like the Hawaii sqlite file with the given measurements
async fn create_dataset(rows: &[(&str, &str, Option<f64>, Option<f64>)]) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hawaii.sqlite");
    let path = path.to_str().unwrap().to_owned();

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))
        .unwrap()
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO station (station, name, latitude, longitude, elevation)
         VALUES ('stationA', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
                ('stationB', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6)",
    )
    .execute(&pool)
    .await
    .unwrap();

    for (station, date, prcp, tobs) in rows {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await
            .unwrap();
    }
    pool.close().await;

    (dir, path)
}

#[tokio::test]
async fn two_station_scenario_end_to_end() {
    let (_dir, path) = create_dataset(&[
        ("stationA", "2017-01-01", Some(1.0), Some(60.0)),
        ("stationB", "2017-01-01", Some(2.0), Some(70.0)),
    ])
    .await;
    let climate_db = Arc::new(ClimateAccess::new(&path).await.unwrap());
    let test_app = spawn_app(climate_db.clone());

    let (status, body) = test_app.get_json("/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"2017-01-01": 3.0}));

    let (status, body) = test_app.get_json("/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["stationA", "stationB"]));

    let (status, body) = test_app
        .get_json("/api/v1.0/trip/2017-01-01/2017-01-01")
        .await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body[0];
    assert_eq!(stats["Min"].as_f64(), Some(60.0));
    assert_eq!(stats["Average"].as_f64(), Some(65.0));
    assert_eq!(stats["Max"].as_f64(), Some(70.0));

    let (status, body) = test_app
        .get_json("/api/v1.0/trip/2018-01-01/2018-12-31")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    climate_db.close().await;
}

#[tokio::test]
async fn malformed_trip_date_falls_through_to_not_found() {
    let (_dir, path) = create_dataset(&[("stationA", "2017-01-01", Some(1.0), Some(60.0))]).await;
    let test_app = spawn_app(Arc::new(ClimateAccess::new(&path).await.unwrap()));

    let (status, body) = test_app.get_json("/api/v1.0/trip/not-a-date").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "Date not-a-date not found or not formatted as YYYY-MM-DD."})
    );
}

#[tokio::test]
async fn tobs_reads_only_the_fixed_station_from_the_anchor_date() {
    let (_dir, path) = create_dataset(&[
        ("USC00519281", "2016-08-22", None, Some(66.0)),
        ("USC00519281", "2016-08-23", None, Some(77.0)),
        ("USC00519281", "2016-08-23", None, Some(79.0)),
        ("USC00519397", "2016-08-23", None, Some(81.0)),
        ("USC00519281", "2016-08-24", None, None),
    ])
    .await;
    let test_app = spawn_app(Arc::new(ClimateAccess::new(&path).await.unwrap()));

    let (status, body) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"2016-08-23": 77.0, "2016-08-24": null}));
}

#[tokio::test]
async fn health_check_against_real_dataset() {
    let (_dir, path) = create_dataset(&[]).await;
    let test_app = spawn_app(Arc::new(ClimateAccess::new(&path).await.unwrap()));

    let (status, body) = test_app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
