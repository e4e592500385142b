//! Plain-text rendering of the weather panel.

use std::io::Write;

use skycast_weather::{WeatherReport, DEFAULT_ICON_URL_TEMPLATE};

use crate::view::{SearchControl, WeatherView};

/// Renders the panel as text lines on any writer (stdout in the binary).
pub struct TerminalView<W: Write> {
    out: W,
    icon_url_template: String,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, icon_url_template: &str) -> Self {
        Self {
            out,
            icon_url_template: icon_url_template.to_string(),
        }
    }

    pub fn with_default_icons(out: W) -> Self {
        Self::new(out, DEFAULT_ICON_URL_TEMPLATE)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = written {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// Render a report the way the result panel shows it.
pub fn format_report(report: &WeatherReport, icon_url_template: &str) -> String {
    let current = &report.current;
    let mut text = format!(
        "\n{}\n  {}°C  {}\n  icon: {}\n",
        current.city,
        current.rounded_temperature(),
        current.condition.description,
        current.condition.icon_url(icon_url_template),
    );

    if !report.forecast.is_empty() {
        text.push_str(&format!("  {}-day forecast:\n", report.forecast.len()));
        for day in &report.forecast {
            text.push_str(&format!(
                "    {} {}  {:>3}°C  {}\n",
                day.weekday_label(),
                day.date().format("%Y-%m-%d"),
                day.rounded_temperature(),
                day.condition.description,
            ));
        }
    }

    text
}

impl<W: Write> WeatherView for TerminalView<W> {
    fn show_welcome(&mut self) {
        self.emit("🌍 Enter a city name to get started!\n");
    }

    fn show_loading(&mut self) {
        self.emit("⏳ Loading weather data...\n");
    }

    fn show_error(&mut self, message: &str) {
        self.emit(&format!("⚠️ Error: {}\n", message));
    }

    fn show_result(&mut self, report: &WeatherReport) {
        let text = format_report(report, &self.icon_url_template);
        self.emit(&text);
    }

    fn set_search_control(&mut self, control: &SearchControl) {
        // Only an enabled control takes input, so only it gets a prompt
        if control.enabled {
            self.emit(&format!("{} > ", control.label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::{Condition, DailySample, WeatherSnapshot};

    fn report(days: usize) -> WeatherReport {
        let start = 1_718_539_200_i64; // 2024-06-16 12:00:00 UTC
        WeatherReport {
            current: WeatherSnapshot {
                city: "Paris".into(),
                temperature: 22.5,
                condition: Condition {
                    description: "clear sky".into(),
                    icon: "01d".into(),
                },
            },
            forecast: (0..days as i64)
                .map(|i| DailySample {
                    timestamp: chrono::DateTime::from_timestamp(start + i * 86_400, 0).unwrap(),
                    dt_txt: String::new(),
                    temperature: 18.2,
                    condition: Condition {
                        description: "few clouds".into(),
                        icon: "02d".into(),
                    },
                })
                .collect(),
        }
    }

    fn rendered(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn result_includes_current_and_forecast() {
        let text = format_report(&report(2), DEFAULT_ICON_URL_TEMPLATE);

        assert!(text.contains("Paris"));
        assert!(text.contains("23°C  clear sky"));
        assert!(text.contains("https://openweathermap.org/img/wn/01d@2x.png"));
        assert!(text.contains("2-day forecast"));
        assert!(text.contains("Sun 2024-06-16"));
        assert!(text.contains("Mon 2024-06-17"));
    }

    #[test]
    fn result_without_forecast_has_no_forecast_block() {
        let text = format_report(&report(0), DEFAULT_ICON_URL_TEMPLATE);
        assert!(!text.contains("forecast"));
    }

    #[test]
    fn error_and_loading_panels() {
        let mut view = TerminalView::with_default_icons(Vec::new());
        view.show_loading();
        view.show_error("City not found. Please check the spelling.");

        let text = rendered(view);
        assert!(text.contains("Loading weather data"));
        assert!(text.contains("⚠️ Error: City not found."));
    }

    #[test]
    fn prompt_only_when_enabled() {
        let mut view = TerminalView::with_default_icons(Vec::new());
        view.set_search_control(&SearchControl::busy("Searching..."));
        view.set_search_control(&SearchControl::idle("🔍 Search"));

        let text = rendered(view);
        assert!(!text.contains("Searching..."));
        assert!(text.ends_with("🔍 Search > "));
    }

    #[test]
    fn custom_icon_template() {
        let mut view = TerminalView::new(Vec::new(), "icons/{icon}.svg");
        view.show_result(&report(0));
        assert!(rendered(view).contains("icons/01d.svg"));
    }
}
