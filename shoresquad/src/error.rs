//! Error types shared across the crate.

use crate::{models::CleanupId, share::ShareError, weather::WeatherError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No cleanup with id {0}")]
    UnknownCleanup(CleanupId),

    #[error("Not a cleanup id: {0:?}")]
    InvalidCleanupId(String),

    #[error("Cleanup id {0} appears more than once")]
    DuplicateCleanup(CleanupId),

    #[error("Unknown date filter: {0:?}")]
    InvalidDateFilter(String),

    #[error("Failed to decode cleanups: {0}")]
    Seed(#[from] ron::error::SpannedError),

    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherError),

    #[error("Sharing failed: {0}")]
    Share(#[from] ShareError),
}

pub type Result<T> = std::result::Result<T, Error>;
