//! OpenWeatherMap API client.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::{UpstreamError, WeatherError};
use crate::types::{ApiCurrent, ApiForecast, ForecastSeries, LocationQuery, WeatherSnapshot};

const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Units are always metric; temperatures are Celsius.
const UNITS: &str = "metric";

/// Source of weather data for a city.
///
/// Implemented by [`OpenWeatherClient`]; tests substitute in-memory stubs.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Current conditions for the city.
    async fn fetch_current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, WeatherError>;

    /// 3-hourly forecast feed for the city.
    async fn fetch_forecast(&self, query: &LocationQuery) -> Result<ForecastSeries, WeatherError>;

    /// Both lookups at once. The first failure wins; no partial result.
    async fn fetch_all(
        &self,
        query: &LocationQuery,
    ) -> Result<(WeatherSnapshot, ForecastSeries), WeatherError> {
        tokio::try_join!(self.fetch_current(query), self.fetch_forecast(query))
    }
}

/// Connection settings for [`OpenWeatherClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: OPENWEATHER_API_BASE.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// HTTP client for the current-weather and forecast endpoints.
///
/// No timeout, retry or caching is applied: failures surface immediately.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &LocationQuery,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} q={}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .send()
            .await?;

        self.handle_response(response, query).await
    }

    /// Map status codes onto the error taxonomy and decode success bodies.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        query: &LocationQuery,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()).into())
        } else if status.as_u16() == 404 {
            Err(WeatherError::NotFound(query.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            }
            .into())
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    #[instrument(skip_all, fields(query = %query), level = "info")]
    async fn fetch_current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, WeatherError> {
        let api: ApiCurrent = self.get_json("weather", query).await?;
        Ok(WeatherSnapshot::from(api))
    }

    #[instrument(skip_all, fields(query = %query), level = "info")]
    async fn fetch_forecast(&self, query: &LocationQuery) -> Result<ForecastSeries, WeatherError> {
        let api: ApiForecast = self.get_json("forecast", query).await?;
        let series = ForecastSeries::from(api);
        debug!("Forecast feed has {} entries", series.len());
        Ok(series)
    }
}
