//! Process configuration, read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use crate::awdb::AwdbConfig;
use crate::domain::StationTriplet;
use crate::snow::EstimatorConfig;

/// Stations reported on when `SNOTEL_STATIONS` is unset.
const DEFAULT_STATIONS: &[&str] = &["322:CO:SNTL"];

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOOKBACK_DAYS: u32 = 2;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Invalid configuration value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Stations to report on, in display order.
    pub stations: Vec<StationTriplet>,

    /// Days of readings to fetch.
    pub lookback_days: u32,

    /// AWDB base URL override.
    pub awdb_base_url: Option<String>,

    /// AWDB request timeout in seconds.
    pub awdb_timeout_secs: u64,

    /// Serve fixture data from this directory instead of calling AWDB.
    pub mock_dir: Option<PathBuf>,

    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Blank values count as unset
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let stations = match get("SNOTEL_STATIONS") {
            Some(list) => parse_stations(&list),
            None => {
                warn!(
                    stations = ?DEFAULT_STATIONS,
                    "SNOTEL_STATIONS not set, using default station list"
                );
                DEFAULT_STATIONS.iter().map(|s| StationTriplet::new(*s)).collect()
            }
        };

        let lookback_days = match get("SNOTEL_LOOKBACK_DAYS") {
            Some(v) => parse_number("SNOTEL_LOOKBACK_DAYS", &v)?,
            None => DEFAULT_LOOKBACK_DAYS,
        };

        let awdb_timeout_secs = match get("AWDB_TIMEOUT_SECS") {
            Some(v) => parse_number("AWDB_TIMEOUT_SECS", &v)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            stations,
            lookback_days,
            awdb_base_url: get("AWDB_BASE_URL"),
            awdb_timeout_secs,
            mock_dir: get("SNOTEL_MOCK_DIR").map(PathBuf::from),
            bind_addr,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }

    /// Client configuration for the live AWDB service.
    pub fn awdb_config(&self) -> AwdbConfig {
        let config = AwdbConfig::new().with_timeout(self.awdb_timeout_secs);
        match &self.awdb_base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    pub fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig::new(self.stations.clone()).with_lookback_days(self.lookback_days)
    }
}

/// Split a comma-separated station list, dropping blanks.
fn parse_stations(list: &str) -> Vec<StationTriplet> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(StationTriplet::new)
        .collect()
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
