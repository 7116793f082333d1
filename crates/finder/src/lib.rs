//! Multi-criteria movie search.
//!
//! A search takes up to three criteria (title, people, genre), fetches
//! candidates for each from a [`MovieSource`], merges and deduplicates them,
//! attaches credits, then keeps only the movies that satisfy every criterion.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use finder::{MovieFinder, SearchCriteria, TmdbSource};
//!
//! let source = TmdbSource::new(Arc::new(tmdb_client));
//! let finder = MovieFinder::new(Arc::new(source));
//!
//! let criteria = SearchCriteria::from_input("", "Tom Hanks, Steven Spielberg", "Drama");
//! let movies = finder.search(&criteria).await?;
//! ```

mod adapters;
pub mod engine;
mod error;
pub mod fetcher;
mod filters;
pub mod models;
mod plan;
pub mod render;
mod service;
pub mod session;
mod source;

#[cfg(test)]
pub(crate) mod mocks;

pub use adapters::TmdbSource;
pub use engine::MergeEngine;
pub use error::{SearchError, SourceError};
pub use fetcher::CandidateFetcher;
pub use models::{
    split_people, CastCredit, CreditsInfo, CrewCredit, EnrichedMovie, GenreCatalog, MovieSummary,
    PersonMatch, SearchCriteria,
};
pub use plan::QueryPlan;
pub use render::{render_html, render_text, MovieCard, RenderOptions, ViewState};
pub use service::{MovieFinder, DEFAULT_CONCURRENCY};
pub use session::{SearchSession, SearchTicket};
pub use source::MovieSource;
