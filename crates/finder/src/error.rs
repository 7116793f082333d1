//! Error types for movie searches

/// Errors raised by a [`MovieSource`](crate::MovieSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("TMDB error: {0}")]
    Tmdb(#[from] tmdb::TmdbError),
}

/// Errors that abort a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("No search criteria supplied")]
    NoCriteria,

    #[error("Search failed: {0}")]
    Source(#[from] SourceError),
}
