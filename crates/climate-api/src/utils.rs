use clap::Parser;
use climate_core::{
    find_config_file, load_config, ConfigSource, DEFAULT_ANCHOR_DATE, DEFAULT_API_PORT,
    DEFAULT_DATABASE, DEFAULT_TOBS_STATION, DEFAULT_TRIP_END_DATE,
};
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use std::env;
use time::{
    format_description::well_known::Iso8601, macros::format_description, Date, OffsetDateTime,
};

use crate::QueryDefaults;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be formatted as YYYY-MM-DD, got {value:?}: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        source: time::error::Parse,
    },
}

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Hawaii Climate API - precipitation and temperature statistics over the Hawaii weather dataset"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $HAWAII_CLIMATE_CONFIG, ./climate.toml,
    /// $XDG_CONFIG_HOME/hawaii-climate/climate.toml, /etc/hawaii-climate/climate.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "HAWAII_CLIMATE_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, env = "HAWAII_CLIMATE_HOST")]
    #[serde(alias = "host")]
    pub domain: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "HAWAII_CLIMATE_PORT")]
    pub port: Option<String>,

    /// Public URL used for links in the index page
    #[arg(short, long, env = "HAWAII_CLIMATE_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Path to the pre-populated SQLite dataset
    #[arg(short, long, env = "HAWAII_CLIMATE_DATABASE")]
    pub database: Option<String>,

    /// Lower bound (YYYY-MM-DD) for the precipitation and tobs routes
    #[arg(long, env = "HAWAII_CLIMATE_ANCHOR_DATE")]
    pub anchor_date: Option<String>,

    /// End date (YYYY-MM-DD) used when a trip request only names a start date
    #[arg(long, env = "HAWAII_CLIMATE_TRIP_END_DATE")]
    pub trip_end_date: Option<String>,

    /// Station reported by the tobs route
    #[arg(long, env = "HAWAII_CLIMATE_TOBS_STATION")]
    pub tobs_station: Option<String>,
}

impl Cli {
    pub fn host(&self) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_API_PORT.to_string())
    }

    pub fn remote_url(&self) -> String {
        self.remote_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host(), self.port()))
    }

    pub fn database(&self) -> String {
        self.database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
    }

    /// Query defaults with both dates checked against `YYYY-MM-DD`
    pub fn query_defaults(&self) -> Result<QueryDefaults, ConfigError> {
        let anchor_date = self
            .anchor_date
            .clone()
            .unwrap_or_else(|| DEFAULT_ANCHOR_DATE.to_string());
        let trip_end_date = self
            .trip_end_date
            .clone()
            .unwrap_or_else(|| DEFAULT_TRIP_END_DATE.to_string());

        validate_date("anchor_date", &anchor_date)?;
        validate_date("trip_end_date", &trip_end_date)?;

        Ok(QueryDefaults {
            anchor_date,
            trip_end_date,
            tobs_station: self
                .tobs_station
                .clone()
                .unwrap_or_else(|| DEFAULT_TOBS_STATION.to_string()),
        })
    }

    /// File values fill in whatever the command line and environment left unset
    pub fn merge(self, file_config: Cli) -> Cli {
        Cli {
            config: self.config,
            level: self.level.or(file_config.level),
            domain: self.domain.or(file_config.domain),
            port: self.port.or(file_config.port),
            remote_url: self.remote_url.or(file_config.remote_url),
            database: self.database.or(file_config.database),
            anchor_date: self.anchor_date.or(file_config.anchor_date),
            trip_end_date: self.trip_end_date.or(file_config.trip_end_date),
            tobs_station: self.tobs_station.or(file_config.tobs_station),
        }
    }
}

fn validate_date(field: &'static str, value: &str) -> Result<(), ConfigError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|source| {
        ConfigError::InvalidDate {
            field,
            value: value.to_owned(),
            source,
        }
    })?;
    Ok(())
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> anyhow::Result<(Cli, ConfigSource)> {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("HAWAII_CLIMATE_CONFIG", "climate.toml")
    };

    let file_config: Cli = load_config(&source)?;

    // env vars are already folded into cli_args by clap
    Ok((cli_args.merge(file_config), source))
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc()
                    .format(&Iso8601::DEFAULT)
                    .unwrap_or_default(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
