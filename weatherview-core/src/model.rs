use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position reported by the location source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the user asked to look up: a place by name, or wherever they are.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Position(Coordinates),
}

impl WeatherQuery {
    /// Message shown when the provider rejects this query.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            WeatherQuery::City(_) => "City not found.",
            WeatherQuery::Position(_) => "Could not get weather for your location.",
        }
    }
}

/// A fully-formed lookup against the weather provider.
///
/// The unit system is always metric; it is not part of the request.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub query: WeatherQuery,
    /// Response language for the condition description.
    pub language: String,
}

impl WeatherRequest {
    /// Build a request for a named city.
    ///
    /// Returns `None` for blank or whitespace-only input: submitting an empty
    /// search form is a no-op, not an error.
    pub fn for_city(city: &str, language: &str) -> Option<Self> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }

        Some(Self {
            query: WeatherQuery::City(city.to_string()),
            language: language.to_string(),
        })
    }

    /// Build a request for a concrete position.
    pub fn for_position(position: Coordinates, language: &str) -> Self {
        Self {
            query: WeatherQuery::Position(position),
            language: language.to_string(),
        }
    }
}

/// Current conditions, as shown on the result card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    /// Free-text description from the provider, e.g. "light rain".
    pub description: String,
    /// Primary condition category, e.g. "Clear" or "Rain". Feeds the glyph
    /// table in [`crate::icon`].
    pub condition: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Temperature as displayed: rounded to the nearest whole degree.
    pub fn temperature_rounded(&self) -> i64 {
        self.temperature_c.round() as i64
    }

    /// Feels-like temperature as displayed.
    pub fn feels_like_rounded(&self) -> i64 {
        self.feels_like_c.round() as i64
    }
}
