//! TMDB movie source adapter

use std::sync::Arc;

use async_trait::async_trait;
use tmdb::{DiscoverMovieParams, TmdbClient};

use crate::{
    CastCredit, CreditsInfo, CrewCredit, GenreCatalog, MovieSource, MovieSummary, PersonMatch,
    SourceError,
};

/// TMDB backed movie source
pub struct TmdbSource {
    client: Arc<TmdbClient>,
}

impl TmdbSource {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MovieSource for TmdbSource {
    async fn search_movies(&self, title: &str) -> Result<Vec<MovieSummary>, SourceError> {
        let response = self.client.search_movie(title).await?;
        Ok(response.results.into_iter().map(MovieSummary::from).collect())
    }

    async fn search_people(&self, name: &str) -> Result<Vec<PersonMatch>, SourceError> {
        let response = self.client.search_person(name).await?;
        Ok(response
            .results
            .into_iter()
            .map(|person| PersonMatch {
                id: person.id,
                name: person.name,
            })
            .collect())
    }

    async fn discover_by_person(&self, person_id: i64) -> Result<Vec<MovieSummary>, SourceError> {
        let response = self
            .client
            .discover_movie(&DiscoverMovieParams::person(person_id))
            .await?;
        Ok(response.results.into_iter().map(MovieSummary::from).collect())
    }

    async fn discover_by_genre(&self, genre_id: i64) -> Result<Vec<MovieSummary>, SourceError> {
        let response = self
            .client
            .discover_movie(&DiscoverMovieParams::genre(genre_id))
            .await?;
        Ok(response.results.into_iter().map(MovieSummary::from).collect())
    }

    async fn genre_catalog(&self) -> Result<GenreCatalog, SourceError> {
        let list = self.client.movie_genres().await?;
        Ok(GenreCatalog::from_genres(
            list.genres.into_iter().map(|g| (g.id, g.name)),
        ))
    }

    async fn credits(&self, movie_id: i64) -> Result<CreditsInfo, SourceError> {
        let credits = self.client.movie_credits(movie_id).await?;
        Ok(CreditsInfo::from(credits))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

impl From<tmdb::Movie> for MovieSummary {
    fn from(movie: tmdb::Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            poster_path: movie.poster_path,
            genre_ids: movie.genre_ids,
            // TMDB sends "" for unknown release dates
            release_date: movie.release_date.filter(|d| !d.is_empty()),
        }
    }
}

impl From<tmdb::MovieCredits> for CreditsInfo {
    fn from(credits: tmdb::MovieCredits) -> Self {
        Self {
            cast: credits
                .cast
                .into_iter()
                .map(|c| CastCredit {
                    name: c.name,
                    character: c.character.filter(|s| !s.is_empty()),
                })
                .collect(),
            crew: credits
                .crew
                .into_iter()
                .map(|c| CrewCredit {
                    name: c.name,
                    job: c.job,
                })
                .collect(),
        }
    }
}
