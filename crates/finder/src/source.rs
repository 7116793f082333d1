//! Movie data source trait definition

use async_trait::async_trait;

use crate::{CreditsInfo, GenreCatalog, MovieSummary, PersonMatch, SourceError};

/// Movie metadata backend used by the search pipeline.
///
/// Each method maps to exactly one remote request.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Free-text title search
    async fn search_movies(&self, title: &str) -> Result<Vec<MovieSummary>, SourceError>;

    /// Free-text person search; may return several people with the same name
    async fn search_people(&self, name: &str) -> Result<Vec<PersonMatch>, SourceError>;

    /// Movies crediting the given person
    async fn discover_by_person(&self, person_id: i64) -> Result<Vec<MovieSummary>, SourceError>;

    /// Movies tagged with the given genre
    async fn discover_by_genre(&self, genre_id: i64) -> Result<Vec<MovieSummary>, SourceError>;

    /// Full genre catalog
    async fn genre_catalog(&self) -> Result<GenreCatalog, SourceError>;

    /// Cast and crew of a movie
    async fn credits(&self, movie_id: i64) -> Result<CreditsInfo, SourceError>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
