use thiserror::Error;

/// Failure taxonomy for a single weather lookup.
///
/// Each variant renders to the exact string shown to the user. The frontends
/// store that string in [`crate::WeatherState`] and stay interactive; no
/// lookup failure is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The provider rejected the lookup with a non-success status.
    ///
    /// The message is fixed per flow: one wording for a city search, another
    /// for a position search.
    #[error("{0}")]
    NotFound(String),

    /// No geolocation capability exists, or the platform declined to share a
    /// position.
    #[error("{0}")]
    LocationUnavailable(String),

    /// The request never produced a usable response: the network was
    /// unreachable, the body could not be read, or it was not the expected
    /// payload.
    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_carried_message() {
        let err = LookupError::NotFound("City not found.".to_string());
        assert_eq!(err.to_string(), "City not found.");

        let err = LookupError::Transport("Could not reach the weather service.".to_string());
        assert_eq!(err.to_string(), "Could not reach the weather service.");
    }
}
