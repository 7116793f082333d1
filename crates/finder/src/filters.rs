//! Result filtering.
//!
//! Each filter keeps the input order and only removes entries. A filter
//! whose criterion is absent returns its input unchanged.

use crate::EnrichedMovie;

/// Check if the movie title contains `title`, ignoring case
pub(crate) fn matches_title(movie: &EnrichedMovie, title: &str) -> bool {
    movie
        .movie
        .title
        .to_lowercase()
        .contains(&title.to_lowercase())
}

/// Check if every person token appears in the movie's cast or crew (AND logic)
pub(crate) fn matches_people(movie: &EnrichedMovie, people: &[String]) -> bool {
    people.iter().all(|token| movie.credits.mentions(token))
}

pub(crate) fn matches_genre(movie: &EnrichedMovie, genre_id: i64) -> bool {
    movie.movie.genre_ids.contains(&genre_id)
}

/// Filter movies by title substring
pub(crate) fn filter_by_title(
    movies: Vec<EnrichedMovie>,
    title: Option<&str>,
) -> Vec<EnrichedMovie> {
    let Some(title) = title else {
        return movies;
    };
    retain_logged(movies, "title", |m| matches_title(m, title))
}

/// Filter movies by person tokens
pub(crate) fn filter_by_people(
    movies: Vec<EnrichedMovie>,
    people: &[String],
) -> Vec<EnrichedMovie> {
    if people.is_empty() {
        return movies;
    }
    retain_logged(movies, "people", |m| matches_people(m, people))
}

/// Filter movies by resolved genre id
pub(crate) fn filter_by_genre(
    movies: Vec<EnrichedMovie>,
    genre_id: Option<i64>,
) -> Vec<EnrichedMovie> {
    let Some(genre_id) = genre_id else {
        return movies;
    };
    retain_logged(movies, "genre", |m| matches_genre(m, genre_id))
}

fn retain_logged(
    movies: Vec<EnrichedMovie>,
    criterion: &str,
    keep: impl Fn(&EnrichedMovie) -> bool,
) -> Vec<EnrichedMovie> {
    let before_count = movies.len();
    let filtered: Vec<_> = movies.into_iter().filter(|m| keep(m)).collect();

    let removed = before_count - filtered.len();
    if removed > 0 {
        tracing::debug!("Filtered {} movies not matching {}", removed, criterion);
    }

    filtered
}
