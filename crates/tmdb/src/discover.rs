use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

/// Filters for `/discover/movie`. Unset fields are not sent.
#[derive(Debug, Default, Clone)]
pub struct DiscoverMovieParams {
    /// Movies where any of these people appear in cast or crew.
    pub with_people: Option<i64>,
    pub with_genres: Option<i64>,
}

impl DiscoverMovieParams {
    pub fn person(person_id: i64) -> Self {
        Self {
            with_people: Some(person_id),
            ..Default::default()
        }
    }

    pub fn genre(genre_id: i64) -> Self {
        Self {
            with_genres: Some(genre_id),
            ..Default::default()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(id) = self.with_people {
            query.push(("with_people", id.to_string()));
        }
        if let Some(id) = self.with_genres {
            query.push(("with_genres", id.to_string()));
        }
        query
    }
}

impl TmdbClient {
    /// Discover movies constrained by person and/or genre ids.
    ///
    /// GET /discover/movie
    pub async fn discover_movie(
        &self,
        params: &DiscoverMovieParams,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let query = params.to_query();
        let mut pairs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
        pairs.push(("include_adult", "false"));
        self.get("/discover/movie", &pairs).await
    }
}
