//! Rendering target for the search controller.

use skycast_weather::WeatherReport;

/// Enabled state and caption of the search button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchControl {
    pub enabled: bool,
    pub label: String,
}

impl SearchControl {
    pub fn idle(label: &str) -> Self {
        Self {
            enabled: true,
            label: label.to_string(),
        }
    }

    pub fn busy(label: &str) -> Self {
        Self {
            enabled: false,
            label: label.to_string(),
        }
    }
}

/// Something that can show the weather panel and the search control.
///
/// The controller owns exactly one view and calls these in state order.
pub trait WeatherView {
    fn show_welcome(&mut self);

    fn show_loading(&mut self);

    fn show_error(&mut self, message: &str);

    fn show_result(&mut self, report: &WeatherReport);

    fn set_search_control(&mut self, control: &SearchControl);

    /// Empty the city input after a query has been accepted.
    fn clear_input(&mut self) {}

    /// Return keyboard focus to the city input.
    fn focus_input(&mut self) {}
}
