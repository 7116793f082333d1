//! Adapters from concrete metadata clients to [`MovieSource`](crate::MovieSource).

mod tmdb_adapter;

pub use tmdb_adapter::TmdbSource;
