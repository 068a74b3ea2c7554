//! Forecast retrieval for Skycast.
//!
//! Fetches city forecasts from the OpenWeatherMap 5-day endpoint and exposes
//! them as a growing, paged list of immutable snapshots.

pub mod client;
pub mod error;
pub mod pager;
pub mod session;
pub mod types;

pub use client::ForecastClient;
pub use error::ApiError;
pub use pager::ForecastPager;
pub use session::{ForecastSession, SearchOutcome};
pub use types::{Forecast, ForecastSet};
