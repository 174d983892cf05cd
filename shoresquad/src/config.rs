//! Board settings, read from the environment with sensible defaults.

use std::{env, str::FromStr};

use tokio::time::Duration;

use crate::{map::MapConfig, models::GeoCoordinate};

#[derive(Debug, Clone)]
pub struct Config {
    pub map: MapConfig,
    /// Quiet period before a search is applied
    pub search_debounce: Duration,
    /// How long a notification stays on screen
    pub notification_lifetime: Duration,
    /// Link attached to shared cleanups
    pub page_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            search_debounce: Duration::from_millis(300),
            notification_lifetime: Duration::from_secs(3),
            page_url: String::from("http://localhost:8080/"),
        }
    }
}

impl Config {
    /// Reads `SHORESQUAD_*` variables; unset ones keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let center = GeoCoordinate::new(
            parse_var("SHORESQUAD_DEFAULT_LAT")?.unwrap_or(defaults.map.center.lat),
            parse_var("SHORESQUAD_DEFAULT_LNG")?.unwrap_or(defaults.map.center.lng),
        );
        if !(-90.0..=90.0).contains(&center.lat) || !(-180.0..=180.0).contains(&center.lng) {
            return Err(ConfigError::Invalid {
                key: "SHORESQUAD_DEFAULT_LAT/LNG",
                value: format!("{},{}", center.lat, center.lng),
            });
        }

        Ok(Self {
            map: MapConfig {
                center,
                zoom: parse_var("SHORESQUAD_ZOOM")?.unwrap_or(defaults.map.zoom),
                ..defaults.map
            },
            search_debounce: parse_var("SHORESQUAD_SEARCH_DEBOUNCE_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
            notification_lifetime: parse_var("SHORESQUAD_NOTIFICATION_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.notification_lifetime),
            page_url: env::var("SHORESQUAD_PAGE_URL").unwrap_or(defaults.page_url),
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the environment so parallel tests cannot race on it.
    #[test]
    fn test_config_from_env() {
        env::set_var("SHORESQUAD_SEARCH_DEBOUNCE_MS", "150");
        env::set_var("SHORESQUAD_ZOOM", "13");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.search_debounce, Duration::from_millis(150));
        assert_eq!(config.map.zoom, 13);
        assert_eq!(config.notification_lifetime, Duration::from_secs(3));

        env::set_var("SHORESQUAD_ZOOM", "close");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SHORESQUAD_ZOOM", .. }));

        env::set_var("SHORESQUAD_ZOOM", "11");
        env::set_var("SHORESQUAD_DEFAULT_LAT", "123.0");
        assert!(Config::from_env().is_err());

        env::remove_var("SHORESQUAD_DEFAULT_LAT");
        env::remove_var("SHORESQUAD_ZOOM");
        env::remove_var("SHORESQUAD_SEARCH_DEBOUNCE_MS");
    }
}
