//! Where-am-I resolution for the "use my location" flow.
//!
//! The terminal has no `navigator.geolocation`; the closest freely available
//! capability is IP geolocation, consumed here behind the [`LocationSource`]
//! seam. A frontend without any source at all models a platform with no
//! geolocation support.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{error::LookupError, model::Coordinates};

const DEFAULT_BASE_URL: &str = "http://ip-api.com";

/// Message shown when a source exists but cannot produce a position.
pub const POSITION_FAILED_MESSAGE: &str = "Could not get your location.";

/// Platform capability producing the device's current position.
#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    /// Returns a position, or [`LookupError::LocationUnavailable`] when the
    /// platform declines to provide one.
    async fn current_position(&self) -> Result<Coordinates, LookupError>;
}

/// IP-based geolocation over the ip-api.com JSON endpoint.
///
/// No credential required. Any failure (unreachable endpoint, non-success
/// status, "fail" payload) is a single `LocationUnavailable` outcome; the
/// caller cannot retry any of them differently.
#[derive(Debug, Clone)]
pub struct IpLocationSource {
    base_url: String,
    http: Client,
}

impl IpLocationSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point the source at a different host. Tests aim this at a local mock
    /// server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    fn unavailable() -> LookupError {
        LookupError::LocationUnavailable(POSITION_FAILED_MESSAGE.to_string())
    }
}

impl Default for IpLocationSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl LocationSource for IpLocationSource {
    async fn current_position(&self) -> Result<Coordinates, LookupError> {
        let url = format!("{}/json", self.base_url);

        let res = self.http.get(&url).send().await.map_err(|err| {
            tracing::debug!(error = %err, "geolocation request failed to send");
            Self::unavailable()
        })?;

        if !res.status().is_success() {
            tracing::debug!(status = %res.status(), "geolocation request rejected");
            return Err(Self::unavailable());
        }

        let body: IpApiResponse = res.json().await.map_err(|err| {
            tracing::debug!(error = %err, "failed to parse geolocation body");
            Self::unavailable()
        })?;

        match (body.status.as_str(), body.lat, body.lon) {
            ("success", Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => {
                tracing::debug!(status = %body.status, "geolocation source declined");
                Err(Self::unavailable())
            }
        }
    }
}
