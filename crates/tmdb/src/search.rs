use crate::{
    models::{Movie, PaginatedResponse, Person},
    TmdbClient,
};

impl TmdbClient {
    /// Search movies by title.
    ///
    /// GET /search/movie
    pub async fn search_movie(&self, query: &str) -> crate::Result<PaginatedResponse<Movie>> {
        self.get(
            "/search/movie",
            &[("query", query), ("include_adult", "false")],
        )
        .await
    }

    /// Search people by name. Several people may share a name.
    ///
    /// GET /search/person
    pub async fn search_person(&self, query: &str) -> crate::Result<PaginatedResponse<Person>> {
        self.get(
            "/search/person",
            &[("query", query), ("include_adult", "false")],
        )
        .await
    }
}
