use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Minimum number of characters in a trimmed city query
pub const MIN_QUERY_CHARS: usize = 2;

/// Image URL template used by openweathermap.org for condition icons
pub const DEFAULT_ICON_URL_TEMPLATE: &str = "https://openweathermap.org/img/wn/{icon}@2x.png";

/// A validated, trimmed city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Trim the raw input and check it is long enough to look up.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Err(QueryError::TooShort {
                min: MIN_QUERY_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Condition text and icon code as reported upstream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

impl Condition {
    /// Build the icon image URL by substituting `{icon}` in the template.
    pub fn icon_url(&self, template: &str) -> String {
        template.replace("{icon}", &self.icon)
    }
}

/// Current weather conditions for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub condition: Condition,
}

impl WeatherSnapshot {
    /// Temperature rounded for display, halves rounding up
    pub fn rounded_temperature(&self) -> i64 {
        round_half_up(self.temperature)
    }
}

/// One step of the 3-hourly forecast feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp, seconds
    pub dt: i64,
    /// Human-readable UTC timestamp, "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub temperature: f64,
    pub condition: Condition,
}

impl ForecastEntry {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// Forecast feed in upstream (chronological) order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub entries: Vec<ForecastEntry>,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Forecast entry chosen to stand for a whole day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    pub timestamp: DateTime<Utc>,
    pub dt_txt: String,
    pub temperature: f64,
    pub condition: Condition,
}

impl DailySample {
    /// Returns `None` when the entry's unix timestamp is out of range.
    pub fn from_entry(entry: &ForecastEntry) -> Option<Self> {
        Some(Self {
            timestamp: entry.timestamp()?,
            dt_txt: entry.dt_txt.clone(),
            temperature: entry.temperature,
            condition: entry.condition.clone(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Short weekday name, e.g. "Mon"
    pub fn weekday_label(&self) -> String {
        self.timestamp.format("%a").to_string()
    }

    pub fn rounded_temperature(&self) -> i64 {
        round_half_up(self.temperature)
    }
}

/// Everything the result view renders for one lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: WeatherSnapshot,
    pub forecast: Vec<DailySample>,
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

// Wire shapes of the OpenWeatherMap 2.5 API. Only consumed fields are declared.

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCurrent {
    pub name: String,
    pub main: ApiMain,
    #[serde(default)]
    pub weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCondition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecast {
    #[serde(default)]
    pub list: Vec<ApiForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecastEntry {
    pub dt: i64,
    #[serde(default)]
    pub dt_txt: String,
    pub main: ApiMain,
    #[serde(default)]
    pub weather: Vec<ApiCondition>,
}

fn first_condition(weather: Vec<ApiCondition>) -> Condition {
    weather
        .into_iter()
        .next()
        .map(|c| Condition {
            description: c.description,
            icon: c.icon,
        })
        .unwrap_or_default()
}

impl From<ApiCurrent> for WeatherSnapshot {
    fn from(api: ApiCurrent) -> Self {
        Self {
            city: api.name,
            temperature: api.main.temp,
            condition: first_condition(api.weather),
        }
    }
}

impl From<ApiForecastEntry> for ForecastEntry {
    fn from(api: ApiForecastEntry) -> Self {
        Self {
            dt: api.dt,
            dt_txt: api.dt_txt,
            temperature: api.main.temp,
            condition: first_condition(api.weather),
        }
    }
}

impl From<ApiForecast> for ForecastSeries {
    fn from(api: ApiForecast) -> Self {
        Self {
            entries: api.list.into_iter().map(ForecastEntry::from).collect(),
        }
    }
}
