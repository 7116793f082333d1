//! Movie search service.
//!
//! Wires criteria validation, genre resolution, candidate fetching and the
//! merge engine into one search call.

use std::sync::Arc;

use crate::engine::MergeEngine;
use crate::fetcher::CandidateFetcher;
use crate::render::ViewState;
use crate::session::SearchSession;
use crate::{EnrichedMovie, MovieSource, QueryPlan, SearchCriteria, SearchError};

/// Default bound on in-flight requests per fan-out level
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Runs searches against a [`MovieSource`].
pub struct MovieFinder {
    source: Arc<dyn MovieSource>,
    concurrency: usize,
}

impl MovieFinder {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Run one search.
    ///
    /// Empty criteria are rejected before any request is made. An empty
    /// result is `Ok(vec![])`. Any failed request fails the whole search.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<EnrichedMovie>, SearchError> {
        criteria.validate()?;

        tracing::info!(
            "Searching {}: title={:?}, people={:?}, genre={:?}",
            self.source.name(),
            criteria.title,
            criteria.people,
            criteria.genre
        );

        let plan = self.plan(criteria).await?;

        let candidates = CandidateFetcher::new(self.source.as_ref(), self.concurrency)
            .fetch(&plan)
            .await?;

        let movies = MergeEngine::new(self.source.as_ref(), self.concurrency)
            .run(candidates, &plan)
            .await?;

        tracing::info!("Search finished with {} results", movies.len());
        Ok(movies)
    }

    /// Run one search and map the outcome to what the user sees.
    pub async fn search_view(&self, criteria: &SearchCriteria) -> ViewState {
        ViewState::from_outcome(self.search(criteria).await)
    }

    /// Run one search as the newest search of `session`.
    ///
    /// Returns `None` when another search of the same session started while
    /// this one was in flight; its outcome must not be shown.
    pub async fn search_view_in(
        &self,
        session: &SearchSession,
        criteria: &SearchCriteria,
    ) -> Option<ViewState> {
        let ticket = session.begin();
        let state = self.search_view(criteria).await;
        session.publish(ticket, state)
    }

    /// The genre catalog is fetched at most once per search.
    async fn plan(&self, criteria: &SearchCriteria) -> Result<QueryPlan, SearchError> {
        if criteria.genre.is_none() {
            return Ok(QueryPlan::new(criteria, None));
        }

        let catalog = self.source.genre_catalog().await?;
        tracing::debug!("Loaded genre catalog with {} genres", catalog.len());
        Ok(QueryPlan::new(criteria, Some(&catalog)))
    }
}
