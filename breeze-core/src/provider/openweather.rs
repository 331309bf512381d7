use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::WeatherRecord;

use super::{FetchError, WeatherProvider};

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Weather provider backed by the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

/// Turn a raw OpenWeather body into a record. Fields the API omitted stay
/// empty instead of failing the whole lookup.
fn record_from_body(body: &str) -> Result<WeatherRecord, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let (temperature_c, feels_like_c) = match parsed.main {
        Some(main) => (main.temp, main.feels_like),
        None => (None, None),
    };

    let condition = parsed.weather.into_iter().next().and_then(|w| w.description);

    Ok(WeatherRecord {
        city: parsed.name,
        temperature_c,
        feels_like_c,
        condition,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Error bodies can carry non-ASCII text; cut on a char boundary.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let res = self
            .http
            .get(BASE_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        record_from_body(&body)
    }
}
