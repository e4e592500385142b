//! Search controller: turns input events into weather lookups and view updates.
//!
//! One controller is constructed at startup with its weather source and its
//! view; nothing is shared through globals.

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, error, info};

use skycast_core::{AppError, Config};
use skycast_weather::{
    sample_with_limit, LocationQuery, QueryError, WeatherError, WeatherReport, WeatherSource,
    MAX_FORECAST_DAYS,
};

use crate::state::ViewState;
use crate::view::{SearchControl, WeatherView};

/// Key that submits the search from the city input
pub const SUBMIT_KEY: &str = "Enter";

/// Why a submission did not produce a report
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Invalid(#[from] QueryError),

    #[error(transparent)]
    Lookup(#[from] WeatherError),
}

impl SearchError {
    /// Message shown in the error panel
    pub fn user_message(&self) -> Cow<'static, str> {
        AppError::from(self).user_message()
    }
}

/// User interaction with the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Search button clicked
    Click,
    /// Key pressed in the city input
    Key(String),
}

impl InputEvent {
    pub fn is_submit(&self) -> bool {
        match self {
            InputEvent::Click => true,
            InputEvent::Key(key) => key == SUBMIT_KEY,
        }
    }
}

/// Behaviour switches for [`SearchController`]
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Fetch and render the daily forecast alongside current conditions
    pub include_forecast: bool,
    /// Maximum number of forecast days rendered
    pub forecast_days: usize,
    /// Loading state stays up at least this long (zero disables)
    pub min_loading: Duration,
    pub search_label: String,
    pub busy_label: String,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            include_forecast: true,
            forecast_days: MAX_FORECAST_DAYS,
            min_loading: Duration::ZERO,
            search_label: "🔍 Search".to_string(),
            busy_label: "Searching...".to_string(),
        }
    }
}

impl ControllerOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            include_forecast: config.weather.include_forecast,
            forecast_days: MAX_FORECAST_DAYS,
            min_loading: Duration::from_millis(config.ui.min_loading_ms),
            search_label: config.ui.search_label.clone(),
            busy_label: config.ui.busy_label.clone(),
        }
    }
}

/// Disables the search control for its lifetime.
///
/// The control is restored on drop, so it settles on success, failure,
/// panic and when the lookup future is dropped mid-flight.
pub struct BusyGuard<'a, V: WeatherView> {
    view: &'a mut V,
    idle_label: &'a str,
}

impl<'a, V: WeatherView> BusyGuard<'a, V> {
    pub fn engage(view: &'a mut V, idle_label: &'a str, busy_label: &str) -> Self {
        view.set_search_control(&SearchControl::busy(busy_label));
        Self { view, idle_label }
    }
}

impl<V: WeatherView> Deref for BusyGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: WeatherView> DerefMut for BusyGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: WeatherView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view
            .set_search_control(&SearchControl::idle(self.idle_label));
        debug!("Search control settled");
    }
}

/// Owns the weather source and the view and sequences one search at a time.
pub struct SearchController<S, V> {
    source: S,
    view: V,
    options: ControllerOptions,
    state: ViewState,
}

impl<S: WeatherSource, V: WeatherView> SearchController<S, V> {
    /// Build the controller and render the welcome state.
    pub fn new(source: S, mut view: V, options: ControllerOptions) -> Self {
        view.show_welcome();
        view.set_search_control(&SearchControl::idle(&options.search_label));

        Self {
            source,
            view,
            options,
            state: ViewState::Welcome,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Release the source and view, e.g. on teardown.
    pub fn into_parts(self) -> (S, V) {
        (self.source, self.view)
    }

    /// Dispatch an input event. Returns `None` for events that don't submit.
    pub async fn handle_event(
        &mut self,
        event: InputEvent,
        input: &str,
    ) -> Option<Result<WeatherReport, SearchError>> {
        if !event.is_submit() {
            return None;
        }
        Some(self.submit(input).await)
    }

    /// Validate the raw input, look it up and render the outcome.
    pub async fn submit(&mut self, input: &str) -> Result<WeatherReport, SearchError> {
        let query = match LocationQuery::parse(input) {
            Ok(query) => query,
            Err(e) => {
                let err = SearchError::from(e);
                info!("Rejected search input: {}", err);
                self.view.show_error(&err.user_message());
                self.state = self.state.on_rejected();
                return Err(err);
            }
        };

        info!("Searching weather for {}", query);
        self.state = self.state.on_submit();

        let mut view = BusyGuard::engage(
            &mut self.view,
            &self.options.search_label,
            &self.options.busy_label,
        );
        view.show_loading();
        view.clear_input();

        let started = Instant::now();
        let outcome = fetch_report(&self.source, &query, &self.options).await;
        hold_loading(started, self.options.min_loading).await;

        match &outcome {
            Ok(report) => {
                info!(
                    "Weather for {}: {}°C, {} forecast days",
                    report.current.city,
                    report.current.rounded_temperature(),
                    report.forecast.len()
                );
                view.show_result(report);
                view.focus_input();
            }
            Err(e) => {
                error!("Failed to fetch weather for {}: {}", query, e);
                view.show_error(&e.user_message());
            }
        }
        drop(view);

        self.state = self.state.on_settled(outcome.is_ok());
        outcome
    }
}

/// Run the lookup(s) for one query and sample the forecast.
async fn fetch_report<S: WeatherSource>(
    source: &S,
    query: &LocationQuery,
    options: &ControllerOptions,
) -> Result<WeatherReport, SearchError> {
    if options.include_forecast {
        let (current, series) = source.fetch_all(query).await?;
        let forecast = sample_with_limit(&series.entries, options.forecast_days);
        Ok(WeatherReport { current, forecast })
    } else {
        let current = source.fetch_current(query).await?;
        Ok(WeatherReport {
            current,
            forecast: Vec::new(),
        })
    }
}

/// Keep the loading state visible until `floor` has passed since `started`.
async fn hold_loading(started: Instant, floor: Duration) {
    let remaining = floor.saturating_sub(started.elapsed());
    if !remaining.is_zero() {
        tokio::time::sleep(remaining).await;
    }
}
