use crate::{models::GenreList, TmdbClient};

impl TmdbClient {
    /// Get the official list of movie genres.
    ///
    /// GET /genre/movie/list
    pub async fn movie_genres(&self) -> crate::Result<GenreList> {
        self.get("/genre/movie/list", &[]).await
    }
}
