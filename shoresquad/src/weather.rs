//! Weather shown for the selected cleanup.
//!
//! Only a canned provider exists today; a real forecast service plugs in by
//! implementing [`WeatherProvider`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{CleanupEvent, CleanupId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: i32,
    /// Emoji followed by a description, e.g. `☀️ Sunny`.
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kmh: u32,
}
impl WeatherReading {
    pub fn new(temperature_c: i32, condition: &str, humidity_pct: u8, wind_kmh: u32) -> Self {
        Self {
            temperature_c,
            condition: String::from(condition),
            humidity_pct,
            wind_kmh,
        }
    }
    pub fn emoji(&self) -> &str {
        self.condition.split_whitespace().next().unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("No forecast available for {0}")]
    Unavailable(String),

    #[error("Weather service error: {0}")]
    Service(String),
}

pub trait WeatherProvider {
    fn fetch_weather(&self, cleanup: &CleanupEvent) -> Result<WeatherReading, WeatherError>;
}

/// Fixed readings keyed by cleanup id.
#[derive(Debug, Clone)]
pub struct MockWeather {
    readings: HashMap<CleanupId, WeatherReading>,
    fallback: WeatherReading,
}
impl MockWeather {
    pub fn new(fallback: WeatherReading) -> Self {
        Self {
            readings: HashMap::new(),
            fallback,
        }
    }
    pub fn with_reading(mut self, id: CleanupId, reading: WeatherReading) -> Self {
        self.readings.insert(id, reading);
        self
    }
}
impl Default for MockWeather {
    fn default() -> Self {
        Self::new(WeatherReading::new(20, "☀️ Sunny", 65, 8))
            .with_reading(CleanupId(1), WeatherReading::new(22, "☀️ Sunny", 65, 8))
            .with_reading(
                CleanupId(2),
                WeatherReading::new(20, "🌤️ Partly Cloudy", 70, 12),
            )
            .with_reading(CleanupId(3), WeatherReading::new(21, "☀️ Sunny", 68, 7))
    }
}
impl WeatherProvider for MockWeather {
    fn fetch_weather(&self, cleanup: &CleanupEvent) -> Result<WeatherReading, WeatherError> {
        Ok(self
            .readings
            .get(&cleanup.id)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}
