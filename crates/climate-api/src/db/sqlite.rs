use async_trait::async_trait;
use climate_core::ensure_readable_file;
use log::{debug, info};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite,
};
use std::{str::FromStr, time::Duration};

use super::{
    ClimateData, DailyPrecipitation, Error, TemperatureObservation, TemperatureRange, TripRequest,
};

/// Read-only access to the pre-populated `measurement`/`station` dataset.
pub struct ClimateAccess {
    pool: SqlitePool,
}

impl ClimateAccess {
    pub async fn new(path: &str) -> Result<Self, Error> {
        ensure_readable_file(path)?;

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .read_only(true)
            .create_if_missing(false)
            .pragma("busy_timeout", "5000")
            .pragma("cache_size", "-16000")
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("SQLite dataset opened read-only at: {}", path);
        Ok(Self { pool })
    }

    /// Borrows one connection for a single query. The guard hands it back to
    /// the pool when dropped, whether the query succeeded or not.
    async fn connection(&self) -> Result<PoolConnection<Sqlite>, Error> {
        Ok(self.pool.acquire().await?)
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("SQLite dataset pool closed");
    }
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn daily_precipitation(&self, since: String) -> Result<Vec<DailyPrecipitation>, Error> {
        let mut conn = self.connection().await?;
        let rows: Vec<(String, Option<f64>)> = sqlx::query_as(
            "SELECT date, CAST(SUM(prcp) AS REAL) AS total
             FROM measurement
             WHERE date >= ?
             GROUP BY date
             ORDER BY date",
        )
        .bind(&since)
        .fetch_all(&mut *conn)
        .await?;
        debug!("precipitation since {}: {} dates", since, rows.len());

        Ok(rows
            .into_iter()
            .map(|(date, total)| DailyPrecipitation { date, total })
            .collect())
    }

    async fn active_stations(&self) -> Result<Vec<String>, Error> {
        let mut conn = self.connection().await?;
        let stations: Vec<String> = sqlx::query_scalar(
            "SELECT station FROM measurement
             GROUP BY station
             ORDER BY station",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(stations)
    }

    async fn station_temperatures(
        &self,
        station_id: String,
        since: String,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let mut conn = self.connection().await?;
        let rows: Vec<(String, String, Option<f64>)> = sqlx::query_as(
            "SELECT station, date, CAST(tobs AS REAL) AS tobs
             FROM measurement
             WHERE date >= ? AND station = ?
             ORDER BY date, rowid",
        )
        .bind(&since)
        .bind(&station_id)
        .fetch_all(&mut *conn)
        .await?;
        debug!(
            "temperatures for {} since {}: {} rows",
            station_id,
            since,
            rows.len()
        );

        Ok(rows
            .into_iter()
            .map(|(station, date, tobs)| TemperatureObservation {
                station,
                date,
                tobs,
            })
            .collect())
    }

    async fn temperature_range(&self, req: &TripRequest) -> Result<TemperatureRange, Error> {
        let mut conn = self.connection().await?;
        let (min, avg, max): (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL)
             FROM measurement
             WHERE date >= ? AND date <= ?",
        )
        .bind(&req.start)
        .bind(&req.end)
        .fetch_one(&mut *conn)
        .await?;

        Ok(TemperatureRange { min, avg, max })
    }

    async fn health_check(&self) -> Result<(), Error> {
        let mut conn = self.connection().await?;
        sqlx::query("SELECT 1").fetch_one(&mut *conn).await?;

        let result: String = sqlx::query_scalar("PRAGMA quick_check;")
            .fetch_one(&mut *conn)
            .await?;
        if result != "ok" {
            return Err(Error::Integrity(result));
        }

        Ok(())
    }
}
