use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::LookupError,
    model::{WeatherQuery, WeatherReport, WeatherRequest},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Message shown when the request itself fails, on either lookup flow.
pub const TRANSPORT_MESSAGE: &str = "Could not reach the weather service.";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host. Tests aim this at a local
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<WeatherReport, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let mut query: Vec<(&str, String)> = match &request.query {
            WeatherQuery::City(name) => vec![("q", name.clone())],
            WeatherQuery::Position(pos) => vec![
                ("lat", pos.latitude.to_string()),
                ("lon", pos.longitude.to_string()),
            ],
        };
        query.push(("appid", self.api_key.clone()));
        query.push(("units", "metric".to_string()));
        query.push(("lang", request.language.clone()));

        let res = self.http.get(&url).query(&query).send().await.map_err(|err| {
            tracing::debug!(error = %err, "weather request failed to send");
            LookupError::Transport(TRANSPORT_MESSAGE.to_string())
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            tracing::debug!(error = %err, "failed to read weather response body");
            LookupError::Transport(TRANSPORT_MESSAGE.to_string())
        })?;

        if !status.is_success() {
            tracing::debug!(%status, body = %truncate_body(&body), "weather lookup rejected");
            return Err(LookupError::NotFound(
                request.query.not_found_message().to_string(),
            ));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(error = %err, "failed to parse weather response JSON");
            LookupError::Transport(TRANSPORT_MESSAGE.to_string())
        })?;

        let (condition, description) = parsed
            .weather
            .first()
            .map(|w| (w.main.clone(), w.description.clone()))
            .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

        Ok(WeatherReport {
            location_name: parsed.name,
            description,
            condition,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            fetched_at: Utc::now(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReport, LookupError> {
        self.fetch_current(request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
