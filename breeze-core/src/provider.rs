use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::WeatherRecord;

pub mod openweather;

/// Failure of a single weather lookup. Always recoverable: the caller
/// reports it and carries on, no retry is ever attempted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current weather for a city. One network call per invocation.
    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

/// Fetch live weather for each city in order, one request at a time.
///
/// A failed city never aborts the sequence; its error is paired with the
/// city name so the caller can report it and move on. Calling this again
/// re-fetches everything, nothing is cached.
pub async fn fetch_each(
    provider: &dyn WeatherProvider,
    cities: &[String],
) -> Vec<(String, Result<WeatherRecord, FetchError>)> {
    let mut results = Vec::with_capacity(cities.len());
    for city in cities {
        let outcome = provider.current(city).await;
        results.push((city.clone(), outcome));
    }
    results
}
