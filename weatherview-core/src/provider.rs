use crate::{
    error::LookupError,
    model::{WeatherReport, WeatherRequest},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A source of current weather conditions.
///
/// There is exactly one production implementation, [`OpenWeatherProvider`];
/// the trait is the seam the state machine and its tests work against.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Execute one lookup. Exactly one HTTP request per call, no retries.
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReport, LookupError>;
}
