//! Forecast-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("City not found")]
    CityNotFound,

    #[error("Malformed forecast payload: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> String {
        match self {
            Self::CityNotFound => "City not found".to_string(),
            Self::Serialization(_) => "Weather data could not be read".to_string(),
            Self::Transport(_) => "Network error. Check your connection.".to_string(),
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
