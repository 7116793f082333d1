//! In-memory [`MovieSource`] for tests.
//!
//! Queries are keyed case-insensitively. Every call is recorded so tests can
//! assert on the exact requests a search issued.
//!
//! # Example
//!
//! ```ignore
//! let source = MockSource::new();
//! source.add_title_results("Inception", vec![movie(27205, "Inception", &[28])]);
//! let nolan = ("Christopher Nolan", "Director");
//! source.add_credits(27205, credits(&["Leonardo DiCaprio"], &[nolan]));
//!
//! let finder = MovieFinder::new(Arc::new(source.clone()));
//! let results = finder.search(&SearchCriteria::default().with_title("Inception")).await?;
//! assert_eq!(source.count(|c| matches!(c, SourceCall::SearchMovies(_))), 1);
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{
    CastCredit, CreditsInfo, CrewCredit, GenreCatalog, MovieSource, MovieSummary, PersonMatch,
    SourceError,
};

/// A request recorded by [`MockSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    SearchMovies(String),
    SearchPeople(String),
    DiscoverByPerson(i64),
    DiscoverByGenre(i64),
    GenreCatalog,
    Credits(i64),
}

#[derive(Default)]
struct MockData {
    titles: HashMap<String, Vec<MovieSummary>>,
    people: HashMap<String, Vec<PersonMatch>>,
    by_person: HashMap<i64, Vec<MovieSummary>>,
    by_genre: HashMap<i64, Vec<MovieSummary>>,
    genres: Vec<(i64, String)>,
    credits: HashMap<i64, CreditsInfo>,
    failing_titles: HashSet<String>,
    failing_people: HashSet<String>,
    failing_person_ids: HashSet<i64>,
    failing_genre_ids: HashSet<i64>,
    failing_catalog: bool,
    failing_credits: HashSet<i64>,
    title_delays: HashMap<String, Duration>,
}

#[derive(Clone, Default)]
pub struct MockSource {
    data: Arc<Mutex<MockData>>,
    calls: Arc<Mutex<Vec<SourceCall>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results returned for a title search.
    pub fn add_title_results(&self, query: &str, movies: Vec<MovieSummary>) {
        self.data
            .lock()
            .unwrap()
            .titles
            .insert(query.to_lowercase(), movies);
    }

    /// Register a person returned for `name` and the movies discovered by their id.
    pub fn add_person(&self, name: &str, person_id: i64, movies: Vec<MovieSummary>) {
        let mut data = self.data.lock().unwrap();
        data.people
            .entry(name.to_lowercase())
            .or_default()
            .push(PersonMatch {
                id: person_id,
                name: name.to_string(),
            });
        data.by_person.insert(person_id, movies);
    }

    pub fn add_genre_results(&self, genre_id: i64, movies: Vec<MovieSummary>) {
        self.data.lock().unwrap().by_genre.insert(genre_id, movies);
    }

    pub fn set_genres(&self, genres: &[(i64, &str)]) {
        self.data.lock().unwrap().genres = genres
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect();
    }

    /// Credits for a movie. Movies without registered credits get empty credits.
    pub fn add_credits(&self, movie_id: i64, credits: CreditsInfo) {
        self.data.lock().unwrap().credits.insert(movie_id, credits);
    }

    pub fn fail_title_search(&self, query: &str) {
        self.data
            .lock()
            .unwrap()
            .failing_titles
            .insert(query.to_lowercase());
    }

    pub fn fail_person_search(&self, name: &str) {
        self.data
            .lock()
            .unwrap()
            .failing_people
            .insert(name.to_lowercase());
    }

    pub fn fail_discover_person(&self, person_id: i64) {
        self.data.lock().unwrap().failing_person_ids.insert(person_id);
    }

    pub fn fail_discover_genre(&self, genre_id: i64) {
        self.data.lock().unwrap().failing_genre_ids.insert(genre_id);
    }

    pub fn fail_genre_catalog(&self) {
        self.data.lock().unwrap().failing_catalog = true;
    }

    pub fn fail_credits(&self, movie_id: i64) {
        self.data.lock().unwrap().failing_credits.insert(movie_id);
    }

    /// Hold the title search for `query` for `delay` before answering.
    pub fn delay_title_search(&self, query: &str, delay: Duration) {
        self.data
            .lock()
            .unwrap()
            .title_delays
            .insert(query.to_lowercase(), delay);
    }

    /// All recorded calls in issue order.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&SourceCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: SourceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MovieSource for MockSource {
    async fn search_movies(&self, title: &str) -> Result<Vec<MovieSummary>, SourceError> {
        self.record(SourceCall::SearchMovies(title.to_string()));
        let key = title.to_lowercase();
        let delay = self.data.lock().unwrap().title_delays.get(&key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let data = self.data.lock().unwrap();
        if data.failing_titles.contains(&key) {
            return Err(unavailable(format!("title search for '{}'", title)));
        }
        Ok(data.titles.get(&key).cloned().unwrap_or_default())
    }

    async fn search_people(&self, name: &str) -> Result<Vec<PersonMatch>, SourceError> {
        self.record(SourceCall::SearchPeople(name.to_string()));
        let data = self.data.lock().unwrap();
        let key = name.to_lowercase();
        if data.failing_people.contains(&key) {
            return Err(unavailable(format!("person search for '{}'", name)));
        }
        Ok(data.people.get(&key).cloned().unwrap_or_default())
    }

    async fn discover_by_person(&self, person_id: i64) -> Result<Vec<MovieSummary>, SourceError> {
        self.record(SourceCall::DiscoverByPerson(person_id));
        let data = self.data.lock().unwrap();
        if data.failing_person_ids.contains(&person_id) {
            return Err(unavailable(format!("discovery for person {}", person_id)));
        }
        Ok(data.by_person.get(&person_id).cloned().unwrap_or_default())
    }

    async fn discover_by_genre(&self, genre_id: i64) -> Result<Vec<MovieSummary>, SourceError> {
        self.record(SourceCall::DiscoverByGenre(genre_id));
        let data = self.data.lock().unwrap();
        if data.failing_genre_ids.contains(&genre_id) {
            return Err(unavailable(format!("discovery for genre {}", genre_id)));
        }
        Ok(data.by_genre.get(&genre_id).cloned().unwrap_or_default())
    }

    async fn genre_catalog(&self) -> Result<GenreCatalog, SourceError> {
        self.record(SourceCall::GenreCatalog);
        let data = self.data.lock().unwrap();
        if data.failing_catalog {
            return Err(unavailable("genre catalog".to_string()));
        }
        Ok(GenreCatalog::from_genres(data.genres.iter().cloned()))
    }

    async fn credits(&self, movie_id: i64) -> Result<CreditsInfo, SourceError> {
        self.record(SourceCall::Credits(movie_id));
        let data = self.data.lock().unwrap();
        if data.failing_credits.contains(&movie_id) {
            return Err(unavailable(format!("credits for movie {}", movie_id)));
        }
        Ok(data.credits.get(&movie_id).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// The error a failing mock call returns: a TMDB 503.
pub fn unavailable(what: String) -> SourceError {
    SourceError::Tmdb(tmdb::TmdbError::Api {
        status_code: 503,
        message: format!("{} unavailable", what),
    })
}

/// Build a movie summary fixture.
pub fn movie(id: i64, title: &str, genre_ids: &[i64]) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        genre_ids: genre_ids.to_vec(),
        release_date: None,
    }
}

/// Build a credits fixture from cast names and `(name, job)` crew pairs.
pub fn credits(cast: &[&str], crew: &[(&str, &str)]) -> CreditsInfo {
    CreditsInfo {
        cast: cast
            .iter()
            .map(|name| CastCredit {
                name: name.to_string(),
                character: None,
            })
            .collect(),
        crew: crew
            .iter()
            .map(|(name, job)| CrewCredit {
                name: name.to_string(),
                job: job.to_string(),
            })
            .collect(),
    }
}
