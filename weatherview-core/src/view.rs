//! The WeatherView state machine.
//!
//! One state container, mutated only through the transitions below, drives
//! both lookup flows against the provider and location seams. Frontends read
//! the state snapshot and repaint; they never touch the fields directly
//! mid-flow.

use std::sync::Arc;

use crate::{
    error::LookupError,
    location::LocationSource,
    model::{WeatherReport, WeatherRequest},
    provider::WeatherProvider,
};

/// Message shown when no location capability exists at all.
pub const NO_LOCATION_SUPPORT_MESSAGE: &str = "Location services are not supported.";

/// Everything the presentation layer renders from.
///
/// After any completed lookup, `weather` and `error` are mutually exclusive
/// and `loading` is false; [`WeatherState::finish_lookup`] is the single
/// place both are enforced.
#[derive(Debug, Clone, Default)]
pub struct WeatherState {
    /// Current search text. Replaced with the resolved location name after a
    /// successful position lookup, so the next manual search defaults to the
    /// detected city.
    pub city: String,
    /// Last successful result.
    pub weather: Option<WeatherReport>,
    /// True while a lookup is in flight.
    pub loading: bool,
    /// Last failure, as the string shown to the user.
    pub error: Option<String>,
    /// Theme preference, mirrored onto the renderer palette.
    pub dark_mode: bool,
}

impl WeatherState {
    fn begin_lookup(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fold a completed lookup into state. The single exit point for both
    /// flows: `loading` always ends false here, whatever the outcome.
    fn finish_lookup(&mut self, outcome: Result<WeatherReport, LookupError>) {
        match outcome {
            Ok(report) => {
                self.error = None;
                self.weather = Some(report);
            }
            Err(err) => {
                self.weather = None;
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Record a failure that never reached the provider (position denied or
    /// missing). The previous result, if any, stays on screen.
    fn fail_without_lookup(&mut self, err: &LookupError) {
        self.error = Some(err.to_string());
        self.loading = false;
    }
}

/// Root component: owns the state and orchestrates the two lookup flows.
#[derive(Debug)]
pub struct WeatherView {
    state: WeatherState,
    provider: Arc<dyn WeatherProvider>,
    location: Option<Arc<dyn LocationSource>>,
    language: String,
}

impl WeatherView {
    /// `location: None` models a platform with no geolocation support.
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        location: Option<Arc<dyn LocationSource>>,
        default_city: &str,
        language: &str,
    ) -> Self {
        Self {
            state: WeatherState {
                city: default_city.to_string(),
                ..WeatherState::default()
            },
            provider,
            location,
            language: language.to_string(),
        }
    }

    pub fn state(&self) -> &WeatherState {
        &self.state
    }

    /// Replace the search text, as typing into the form would.
    pub fn set_city(&mut self, text: &str) {
        self.state.city = text.to_string();
    }

    /// Initial fetch for the configured city.
    pub async fn mount(&mut self) {
        self.submit().await;
    }

    /// Submit the current search text. Blank input issues no request and
    /// leaves the state untouched.
    pub async fn submit(&mut self) {
        let Some(request) = WeatherRequest::for_city(&self.state.city, &self.language) else {
            return;
        };

        self.run_lookup(request).await;
    }

    /// Look up weather for the device's current position.
    pub async fn locate(&mut self) {
        let Some(source) = self.location.clone() else {
            self.state.fail_without_lookup(&LookupError::LocationUnavailable(
                NO_LOCATION_SUPPORT_MESSAGE.to_string(),
            ));
            return;
        };

        self.state.begin_lookup();

        let position = match source.current_position().await {
            Ok(position) => position,
            Err(err) => {
                self.state.fail_without_lookup(&err);
                return;
            }
        };

        let request = WeatherRequest::for_position(position, &self.language);
        let outcome = self.provider.current_weather(&request).await;
        if let Ok(report) = &outcome {
            self.state.city = report.location_name.clone();
        }
        self.state.finish_lookup(outcome);
    }

    /// Flip the theme preference; returns the new value for the caller to
    /// mirror onto its output. Never touches the network.
    pub fn toggle_theme(&mut self) -> bool {
        self.state.dark_mode = !self.state.dark_mode;
        self.state.dark_mode
    }

    async fn run_lookup(&mut self, request: WeatherRequest) {
        self.state.begin_lookup();
        let outcome = self.provider.current_weather(&request).await;
        self.state.finish_lookup(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, WeatherQuery};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn report(name: &str) -> WeatherReport {
        WeatherReport {
            location_name: name.to_string(),
            description: "clear sky".to_string(),
            condition: "Clear".to_string(),
            temperature_c: 21.3,
            feels_like_c: 20.8,
            humidity_pct: 45,
            fetched_at: Utc::now(),
        }
    }

    /// Returns scripted outcomes in order and records what it was asked.
    #[derive(Debug, Default)]
    struct ScriptedProvider {
        outcomes: Mutex<VecDeque<Result<WeatherReport, LookupError>>>,
        last_query: Mutex<Option<WeatherQuery>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn with_outcomes(
            outcomes: impl IntoIterator<Item = Result<WeatherReport, LookupError>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into_iter().collect()),
                last_query: Mutex::new(None),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_query(&self) -> Option<WeatherQuery> {
            self.last_query.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn current_weather(
            &self,
            request: &WeatherRequest,
        ) -> Result<WeatherReport, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().expect("lock") = Some(request.query.clone());
            self.outcomes
                .lock()
                .expect("lock")
                .pop_front()
                .expect("scripted outcome for every call")
        }
    }

    #[derive(Debug)]
    struct ScriptedLocation {
        outcome: Result<Coordinates, LookupError>,
        calls: AtomicUsize,
    }

    impl ScriptedLocation {
        fn with_outcome(outcome: Result<Coordinates, LookupError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl LocationSource for ScriptedLocation {
        async fn current_position(&self) -> Result<Coordinates, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn mount_fetches_the_default_city_once() {
        let provider = ScriptedProvider::with_outcomes([Ok(report("Istanbul"))]);
        let mut view = WeatherView::new(provider.clone(), None, "Istanbul", "en");

        view.mount().await;

        assert_eq!(provider.calls(), 1);
        assert_eq!(
            provider.last_query(),
            Some(WeatherQuery::City("Istanbul".to_string()))
        );

        let state = view.state();
        assert_eq!(
            state.weather.as_ref().map(|w| w.location_name.as_str()),
            Some("Istanbul")
        );
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn blank_submit_issues_no_request_and_changes_nothing() {
        let provider = ScriptedProvider::with_outcomes([]);
        let mut view = WeatherView::new(provider.clone(), None, "", "en");

        view.set_city("   ");
        view.submit().await;

        assert_eq!(provider.calls(), 0);

        let state = view.state();
        assert!(state.weather.is_none());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn failed_lookup_clears_the_previous_result() {
        let provider = ScriptedProvider::with_outcomes([
            Ok(report("Istanbul")),
            Err(LookupError::NotFound("City not found.".to_string())),
        ]);
        let mut view = WeatherView::new(provider.clone(), None, "Istanbul", "en");

        view.mount().await;
        assert!(view.state().weather.is_some());

        view.set_city("Nowhereville");
        view.submit().await;

        let state = view.state();
        assert!(state.weather.is_none());
        assert_eq!(state.error.as_deref(), Some("City not found."));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn successful_lookup_clears_the_previous_error() {
        let provider = ScriptedProvider::with_outcomes([
            Err(LookupError::Transport(
                "Could not reach the weather service.".to_string(),
            )),
            Ok(report("Istanbul")),
        ]);
        let mut view = WeatherView::new(provider.clone(), None, "Istanbul", "en");

        view.submit().await;
        assert!(view.state().error.is_some());

        view.submit().await;

        let state = view.state();
        assert!(state.error.is_none());
        assert!(state.weather.is_some());
    }

    #[tokio::test]
    async fn locate_without_capability_sets_fixed_error_and_issues_nothing() {
        let provider = ScriptedProvider::with_outcomes([]);
        let mut view = WeatherView::new(provider.clone(), None, "Istanbul", "en");

        view.locate().await;

        assert_eq!(provider.calls(), 0);

        let state = view.state();
        assert_eq!(state.error.as_deref(), Some(NO_LOCATION_SUPPORT_MESSAGE));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn denied_position_keeps_the_previous_result() {
        let provider = ScriptedProvider::with_outcomes([Ok(report("Istanbul"))]);
        let location = ScriptedLocation::with_outcome(Err(LookupError::LocationUnavailable(
            "Could not get your location.".to_string(),
        )));
        let mut view =
            WeatherView::new(provider.clone(), Some(location.clone()), "Istanbul", "en");

        view.mount().await;
        view.locate().await;

        assert_eq!(location.calls.load(Ordering::SeqCst), 1);
        // The provider was only reached by the mount fetch.
        assert_eq!(provider.calls(), 1);

        let state = view.state();
        assert_eq!(state.error.as_deref(), Some("Could not get your location."));
        assert!(state.weather.is_some());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn successful_locate_adopts_the_resolved_city_name() {
        let provider = ScriptedProvider::with_outcomes([Ok(report("Kadikoy"))]);
        let location = ScriptedLocation::with_outcome(Ok(Coordinates {
            latitude: 40.99,
            longitude: 29.03,
        }));
        let mut view = WeatherView::new(provider.clone(), Some(location), "Istanbul", "en");

        view.locate().await;

        assert!(matches!(
            provider.last_query(),
            Some(WeatherQuery::Position(_))
        ));

        let state = view.state();
        assert_eq!(state.city, "Kadikoy");
        assert_eq!(
            state.weather.as_ref().map(|w| w.location_name.as_str()),
            Some("Kadikoy")
        );
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn theme_toggle_round_trips_without_network_traffic() {
        let provider = ScriptedProvider::with_outcomes([]);
        let mut view = WeatherView::new(provider.clone(), None, "Istanbul", "en");

        assert!(view.toggle_theme());
        assert!(view.state().dark_mode);

        assert!(!view.toggle_theme());
        assert!(!view.state().dark_mode);

        assert_eq!(provider.calls(), 0);
    }

    #[test]
    fn loading_is_raised_then_lowered_around_a_lookup() {
        let mut state = WeatherState::default();

        state.begin_lookup();
        assert!(state.loading);
        assert!(state.error.is_none());

        state.finish_lookup(Ok(report("Istanbul")));
        assert!(!state.loading);

        state.begin_lookup();
        assert!(state.loading);

        state.finish_lookup(Err(LookupError::NotFound("City not found.".to_string())));
        assert!(!state.loading);
    }

    #[test]
    fn weather_and_error_never_coexist_after_a_fold() {
        let mut state = WeatherState::default();

        state.finish_lookup(Ok(report("Istanbul")));
        assert!(state.weather.is_some() && state.error.is_none());

        state.finish_lookup(Err(LookupError::Transport("down".to_string())));
        assert!(state.weather.is_none() && state.error.is_some());

        state.finish_lookup(Ok(report("Istanbul")));
        assert!(state.weather.is_some() && state.error.is_none());
    }
}
