use crate::{models::MovieCredits, TmdbClient};

impl TmdbClient {
    /// Get cast and crew of a movie.
    ///
    /// GET /movie/{movie_id}/credits
    pub async fn movie_credits(&self, movie_id: i64) -> crate::Result<MovieCredits> {
        self.get(&format!("/movie/{}/credits", movie_id), &[]).await
    }
}
