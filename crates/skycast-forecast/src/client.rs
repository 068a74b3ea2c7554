//! HTTP client for the upstream forecast endpoint.

use std::time::Duration;

use tracing::instrument;

use skycast_core::WeatherApiConfig;

use crate::error::ApiError;
use crate::types::{ApiResponse, ForecastSet};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// The upstream payload is always requested in metric units; `Forecast`
/// temperatures are Celsius.
const UNITS: &str = "metric";

pub struct ForecastClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ForecastClient {
    pub fn new(config: &WeatherApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    #[cfg(test)]
    pub fn new_with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Fetch the complete forecast list for a city.
    ///
    /// Always returns the full upstream list; truncating to pages is the
    /// pager's job.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecasts(&self, city: &str) -> Result<ForecastSet, ApiError> {
        let url = format!(
            "{}?APPID={}&units={}&q={}",
            self.base_url,
            self.api_key,
            UNITS,
            urlencoding::encode(city),
        );

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Map the raw response into a `ForecastSet` or a typed error.
    ///
    /// The upstream encodes its real status in the body's `cod` field, so the
    /// body is read regardless of the HTTP status line.
    async fn handle_response(&self, response: reqwest::Response) -> Result<ForecastSet, ApiError> {
        let body = response.text().await?;

        let parsed: ApiResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Serialization(e.to_string()))?;

        if parsed.cod.is(404) {
            return Err(ApiError::CityNotFound);
        }
        if !parsed.cod.is(200) {
            return Err(ApiError::Transport(format!("api status {}", parsed.cod)));
        }

        ForecastSet::from_api(parsed)
    }
}
