//! Search-and-scroll state machine over the pager.
//!
//! Owns the current snapshot on behalf of a list screen: a search replaces
//! it, load-more grows it, a failed search clears it, and a failed load-more
//! keeps the stale list visible.

use crate::error::ApiError;
use crate::pager::ForecastPager;
use crate::types::ForecastSet;

/// Minimum query length before a search is attempted.
const MIN_CITY_LEN: usize = 3;

/// What a session call did with the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Snapshot replaced with fresh data
    Updated,
    /// Input rejected or nothing left to load; snapshot untouched
    Skipped,
}

pub struct ForecastSession {
    pager: ForecastPager,
    current: Option<ForecastSet>,
    last_search: String,
}

impl ForecastSession {
    pub fn new(pager: ForecastPager) -> Self {
        Self {
            pager,
            current: None,
            last_search: String::new(),
        }
    }

    /// Current snapshot, if any search has succeeded.
    pub fn current(&self) -> Option<&ForecastSet> {
        self.current.as_ref()
    }

    pub fn has_more(&self) -> bool {
        self.current.as_ref().is_some_and(ForecastSet::has_more)
    }

    /// Run a search.
    ///
    /// Queries shorter than three characters and repeats of the previous query
    /// are skipped without a request. On error the current snapshot is
    /// cleared; the query is still remembered, so re-submitting a failing
    /// input stays quiet until it changes. Exclusive `&mut self` access keeps
    /// at most one request in flight per session.
    pub async fn search(&mut self, city: &str) -> Result<SearchOutcome, ApiError> {
        if city.chars().count() < MIN_CITY_LEN || city == self.last_search {
            tracing::debug!(city, "search skipped");
            return Ok(SearchOutcome::Skipped);
        }

        self.last_search = city.to_string();
        match self.pager.fetch_initial(city).await {
            Ok(set) => {
                self.current = Some(set);
                Ok(SearchOutcome::Updated)
            }
            Err(e) => {
                self.current = None;
                Err(e)
            }
        }
    }

    /// Reveal the next page of the current snapshot.
    ///
    /// Skips when nothing has been searched yet or the set is exhausted. On
    /// error the stale snapshot stays in place.
    pub async fn load_more(&mut self) -> Result<SearchOutcome, ApiError> {
        let Some(prior) = self.current.as_ref() else {
            return Ok(SearchOutcome::Skipped);
        };
        if !prior.has_more() {
            tracing::debug!(city = %prior.city, "load_more skipped, set exhausted");
            return Ok(SearchOutcome::Skipped);
        }

        let next = self.pager.fetch_more(prior).await?;
        self.current = Some(next);
        Ok(SearchOutcome::Updated)
    }
}
