mod client;
mod discover;
mod error;
mod genre;
pub mod models;
mod movie;
mod search;

pub use client::{TmdbClient, DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
pub use discover::DiscoverMovieParams;
pub use error::TmdbError;
pub use models::{
    CastMember, CrewMember, Genre, GenreList, Movie, MovieCredits, PaginatedResponse, Person,
};

pub type Result<T> = std::result::Result<T, TmdbError>;
