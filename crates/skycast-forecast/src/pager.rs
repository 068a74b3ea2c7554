//! Simulated pagination over the forecast endpoint.
//!
//! The upstream API has no real pagination: every request returns the complete
//! list. Paging re-fetches that list and reveals a longer prefix each time, so
//! each page costs one full upstream round trip.

use tracing::instrument;

use skycast_core::PagerConfig;

use crate::client::ForecastClient;
use crate::error::ApiError;
use crate::types::ForecastSet;

pub struct ForecastPager {
    client: ForecastClient,
    page_size: usize,
}

impl ForecastPager {
    pub fn new(client: ForecastClient, config: &PagerConfig) -> Self {
        Self {
            client,
            page_size: config.page_size,
        }
    }

    #[cfg(test)]
    pub fn new_with_page_size(client: ForecastClient, page_size: usize) -> Self {
        Self { client, page_size }
    }

    /// First page for a city.
    ///
    /// The full list is fetched once, `max_available` records its length, and
    /// the first `page_size` entries become visible. City pre-validation
    /// (minimum length) is the caller's responsibility.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_initial(&self, city: &str) -> Result<ForecastSet, ApiError> {
        let full = self.client.fetch_forecasts(city).await?;
        tracing::debug!(total = full.max_available, "initial forecast fetch");
        Ok(full.truncated(self.page_size))
    }

    /// Reveal one more page of an earlier snapshot.
    ///
    /// Exhausted snapshots are returned unchanged without touching the
    /// network. Otherwise the full list is re-fetched for the snapshot's city,
    /// `max_available` is recomputed from the fresh payload, and the visible
    /// prefix grows to `min(max_available, prior.len() + page_size)`. The
    /// result never has fewer entries than `prior`.
    #[instrument(skip(self, prior), level = "info")]
    pub async fn fetch_more(&self, prior: &ForecastSet) -> Result<ForecastSet, ApiError> {
        if !prior.has_more() {
            tracing::debug!(city = %prior.city, "no more forecasts");
            return Ok(prior.clone());
        }

        let start = prior.len();
        tracing::debug!(city = %prior.city, start, "loading more forecasts");

        let full = self.client.fetch_forecasts(&prior.city).await?;
        if full.len() <= start {
            // Upstream shrank between calls; keep the prior snapshot
            tracing::warn!(
                city = %prior.city,
                fresh = full.len(),
                visible = start,
                "upstream returned fewer entries than already visible"
            );
            return Ok(prior.clone());
        }

        Ok(full.truncated(start + self.page_size))
    }
}
