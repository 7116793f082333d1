//! Candidate fetching.
//!
//! Turns a [`QueryPlan`] into the raw, not yet deduplicated union of movies
//! returned by every query branch that applies.

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::{MovieSource, MovieSummary, QueryPlan, SourceError};

/// Issues the per-criterion queries of a search.
pub struct CandidateFetcher<'a> {
    source: &'a dyn MovieSource,
    concurrency: usize,
}

impl<'a> CandidateFetcher<'a> {
    /// `concurrency` bounds in-flight requests per fan-out level.
    pub fn new(source: &'a dyn MovieSource, concurrency: usize) -> Self {
        Self {
            source,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetch candidates for every criterion in `plan`.
    ///
    /// The result is ordered title branch first, then people (token order,
    /// then person order), then genre. Any failed request fails the fetch.
    pub async fn fetch(&self, plan: &QueryPlan) -> Result<Vec<MovieSummary>, SourceError> {
        let (by_title, by_people, by_genre) = futures::try_join!(
            self.fetch_by_title(plan.title.as_deref()),
            self.fetch_by_people(&plan.people),
            self.fetch_by_genre(plan.genre_id),
        )?;

        tracing::debug!(
            "Fetched candidates from {}: title={}, people={}, genre={}",
            self.source.name(),
            by_title.len(),
            by_people.len(),
            by_genre.len()
        );

        let mut candidates = by_title;
        candidates.extend(by_people);
        candidates.extend(by_genre);
        Ok(candidates)
    }

    async fn fetch_by_title(&self, title: Option<&str>) -> Result<Vec<MovieSummary>, SourceError> {
        let Some(title) = title else {
            return Ok(Vec::new());
        };
        self.source.search_movies(title).await
    }

    async fn fetch_by_people(&self, people: &[String]) -> Result<Vec<MovieSummary>, SourceError> {
        let per_token: Vec<Vec<MovieSummary>> = stream::iter(people)
            .map(|token| self.fetch_by_person_name(token))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(per_token.into_iter().flatten().collect())
    }

    /// One person search, then one discovery query per matching person.
    async fn fetch_by_person_name(&self, name: &str) -> Result<Vec<MovieSummary>, SourceError> {
        let people = self.source.search_people(name).await?;
        if people.is_empty() {
            tracing::debug!("No person found for '{}'", name);
            return Ok(Vec::new());
        }

        tracing::debug!("'{}' matched {} people", name, people.len());

        let per_person: Vec<Vec<MovieSummary>> = stream::iter(&people)
            .map(|person| self.source.discover_by_person(person.id))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(per_person.into_iter().flatten().collect())
    }

    async fn fetch_by_genre(
        &self,
        genre_id: Option<i64>,
    ) -> Result<Vec<MovieSummary>, SourceError> {
        match genre_id {
            Some(id) => self.source.discover_by_genre(id).await,
            None => Ok(Vec::new()),
        }
    }
}
