//! Merge, enrich and filter candidates into the final result list.

use std::collections::HashSet;

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::filters::{filter_by_genre, filter_by_people, filter_by_title};
use crate::{EnrichedMovie, MovieSource, MovieSummary, QueryPlan, SourceError};

/// Collapse candidates to one entry per id, keeping the first occurrence.
pub fn dedup(candidates: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|movie| seen.insert(movie.id))
        .collect()
}

/// Apply every criterion of `plan` to enriched movies (AND logic).
pub fn refine(movies: Vec<EnrichedMovie>, plan: &QueryPlan) -> Vec<EnrichedMovie> {
    let movies = filter_by_title(movies, plan.title.as_deref());
    let movies = filter_by_people(movies, &plan.people);
    filter_by_genre(movies, plan.genre_id)
}

/// Dedup, enrichment and final filtering of a search.
pub struct MergeEngine<'a> {
    source: &'a dyn MovieSource,
    concurrency: usize,
}

impl<'a> MergeEngine<'a> {
    pub fn new(source: &'a dyn MovieSource, concurrency: usize) -> Self {
        Self {
            source,
            concurrency: concurrency.max(1),
        }
    }

    /// Produce the final ordered result list from raw candidates.
    pub async fn run(
        &self,
        candidates: Vec<MovieSummary>,
        plan: &QueryPlan,
    ) -> Result<Vec<EnrichedMovie>, SourceError> {
        let candidate_count = candidates.len();
        let unique = dedup(candidates);
        tracing::debug!(
            "Dedup kept {} of {} candidates",
            unique.len(),
            candidate_count
        );

        let enriched = self.enrich(unique).await?;
        Ok(refine(enriched, plan))
    }

    /// Fetch credits for every movie. Output order matches input order.
    pub async fn enrich(
        &self,
        movies: Vec<MovieSummary>,
    ) -> Result<Vec<EnrichedMovie>, SourceError> {
        stream::iter(movies)
            .map(|movie| async move {
                let credits = self.source.credits(movie.id).await?;
                Ok::<_, SourceError>(EnrichedMovie::new(movie, credits))
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}
