//! Forecast domain types and the upstream wire format.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single forecast entry as shown in the list and detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Forecast time, seconds since the Unix epoch
    pub timestamp_secs: i64,
    /// Temperature in degrees Celsius
    pub temperature_celsius: f64,
    /// Short condition summary, e.g. "Rain"
    pub summary: String,
}

impl Forecast {
    /// Weekday-and-time label ("Friday 15:00") rendered at the given UTC
    /// offset. Falls back to the raw timestamp when either value is outside
    /// chrono's range.
    pub fn day_time_label(&self, utc_offset_secs: i32) -> String {
        FixedOffset::east_opt(utc_offset_secs)
            .and_then(|offset| {
                DateTime::from_timestamp(self.timestamp_secs, 0)
                    .map(|utc| utc.with_timezone(&offset).format("%A %H:%M").to_string())
            })
            .unwrap_or_else(|| self.timestamp_secs.to_string())
    }

    /// Temperature with unit suffix, e.g. "21.4°C"
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_celsius)
    }
}

/// One immutable snapshot of a city's paged forecast list.
///
/// Paging replaces snapshots rather than mutating them; a superseded snapshot
/// is simply dropped by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSet {
    pub city: String,
    /// City's offset from UTC in seconds, as reported upstream
    pub utc_offset_secs: i32,
    /// Visible entries, in upstream order (ascending timestamp)
    pub forecasts: Vec<Forecast>,
    /// Total entries upstream reports for this city
    pub max_available: usize,
}

impl ForecastSet {
    /// True when another page can be revealed.
    pub fn has_more(&self) -> bool {
        self.forecasts.len() < self.max_available
    }

    pub fn len(&self) -> usize {
        self.forecasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    /// Parse the upstream payload into a full (untruncated) set.
    ///
    /// The set is valid as long as the `city` block parses; individual list
    /// entries with missing fields are skipped.
    pub fn from_api(resp: ApiResponse) -> Result<Self, ApiError> {
        let city = resp
            .city
            .ok_or_else(|| ApiError::Serialization("missing city block".to_string()))?;
        let name = city
            .name
            .ok_or_else(|| ApiError::Serialization("missing city.name".to_string()))?;
        let utc_offset_secs = city
            .timezone
            .ok_or_else(|| ApiError::Serialization("missing city.timezone".to_string()))?;

        let forecasts: Vec<Forecast> =
            resp.list.iter().filter_map(ApiEntry::to_forecast).collect();
        let max_available = forecasts.len();

        Ok(Self {
            city: name,
            utc_offset_secs,
            forecasts,
            max_available,
        })
    }

    /// Same snapshot with the visible list cut to `limit` entries.
    /// `max_available` is untouched.
    pub(crate) fn truncated(mut self, limit: usize) -> Self {
        self.forecasts.truncate(limit);
        self
    }
}

/// Upstream response envelope. The real status lives in the `cod` field; the
/// HTTP status line is not authoritative for this API.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub cod: StatusCode,
    pub city: Option<ApiCity>,
    #[serde(default)]
    pub list: Vec<ApiEntry>,
}

/// `cod` arrives as a JSON string on some paths ("404") and a number on
/// others (200).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    Text(String),
    Code(i64),
}

impl StatusCode {
    pub fn is(&self, code: i64) -> bool {
        match self {
            Self::Code(n) => *n == code,
            Self::Text(s) => s.parse::<i64>().map(|n| n == code).unwrap_or(false),
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Code(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiCity {
    pub name: Option<String>,
    /// Offset from UTC in seconds
    pub timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ApiEntry {
    pub dt: Option<i64>,
    pub main: Option<ApiMain>,
    #[serde(default)]
    pub weather: Vec<ApiWeather>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMain {
    pub temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ApiWeather {
    pub main: Option<String>,
}

impl ApiEntry {
    /// Convert one list entry, or `None` when a required field is missing.
    pub fn to_forecast(&self) -> Option<Forecast> {
        let timestamp_secs = self.dt?;
        let temperature_celsius = self.main.as_ref()?.temp?;
        let summary = self.weather.first()?.main.clone()?;
        Some(Forecast {
            timestamp_secs,
            temperature_celsius,
            summary,
        })
    }
}
