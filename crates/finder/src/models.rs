//! Search data models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::SearchError;

/// User supplied search criteria.
///
/// Every field is trimmed on construction; a field that is empty after
/// trimming counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Title text to look for
    pub title: Option<String>,
    /// Actor/director name tokens, in input order
    pub people: Vec<String>,
    /// Genre display name
    pub genre: Option<String>,
}

impl SearchCriteria {
    /// Build criteria from the three raw input fields.
    ///
    /// `people` is a comma separated list of names.
    pub fn from_input(title: &str, people: &str, genre: &str) -> Self {
        Self {
            title: non_empty(title),
            people: split_people(people),
            genre: non_empty(genre),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = non_empty(title);
        self
    }

    pub fn with_people(mut self, people: &str) -> Self {
        self.people = split_people(people);
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = non_empty(genre);
        self
    }

    /// True when no criterion was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.people.is_empty() && self.genre.is_none()
    }

    /// Reject criteria that would not issue any query.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.is_empty() {
            return Err(SearchError::NoCriteria);
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Split a comma separated name list into trimmed, non-empty tokens.
pub fn split_people(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Movie record returned by any query branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub overview: String,
    /// Poster path relative to the image CDN
    pub poster_path: Option<String>,
    pub genre_ids: Vec<i64>,
    /// Release date (YYYY-MM-DD)
    pub release_date: Option<String>,
}

impl MovieSummary {
    /// Year extracted from the release date
    pub fn year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}

/// A person record matched by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonMatch {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastCredit {
    pub name: String,
    pub character: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewCredit {
    pub name: String,
    pub job: String,
}

/// Cast and crew of a single movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsInfo {
    pub cast: Vec<CastCredit>,
    pub crew: Vec<CrewCredit>,
}

impl CreditsInfo {
    /// Whether `token` is a case-insensitive substring of any cast or crew name.
    pub fn mentions(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.cast
            .iter()
            .map(|c| &c.name)
            .chain(self.crew.iter().map(|c| &c.name))
            .any(|name| name.to_lowercase().contains(&token))
    }

    /// Names of crew members credited with `job` (e.g. "Director").
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.crew
            .iter()
            .filter(move |c| c.job.eq_ignore_ascii_case(job))
            .map(|c| c.name.as_str())
    }
}

/// A candidate movie with its credits attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMovie {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub credits: CreditsInfo,
}

impl EnrichedMovie {
    pub fn new(movie: MovieSummary, credits: CreditsInfo) -> Self {
        Self { movie, credits }
    }

    pub fn id(&self) -> i64 {
        self.movie.id
    }
}

/// Case-insensitive genre name to id lookup.
#[derive(Debug, Clone, Default)]
pub struct GenreCatalog {
    by_name: HashMap<String, i64>,
}

impl GenreCatalog {
    /// Build a catalog from `(id, name)` pairs. The first id seen for a name wins.
    pub fn from_genres<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: AsRef<str>,
    {
        let mut by_name = HashMap::new();
        for (id, name) in genres {
            by_name.entry(name.as_ref().to_lowercase()).or_insert(id);
        }
        Self { by_name }
    }

    /// Resolve a genre name by case-insensitive exact match.
    pub fn resolve(&self, name: &str) -> Option<i64> {
        self.by_name.get(&name.trim().to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_trims_fields() {
        let criteria =
            SearchCriteria::from_input("  Inception ", " Tom Hanks ,Steven Spielberg ", " ");
        assert_eq!(criteria.title.as_deref(), Some("Inception"));
        assert_eq!(criteria.people, vec!["Tom Hanks", "Steven Spielberg"]);
        assert_eq!(criteria.genre, None);
    }

    #[test]
    fn test_split_people_drops_empty_tokens() {
        assert_eq!(split_people("a, ,b,,"), vec!["a", "b"]);
        assert!(split_people(" , ").is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_criteria() {
        let criteria = SearchCriteria::from_input("   ", " , ", "\t");
        assert!(criteria.is_empty());
        assert!(matches!(criteria.validate(), Err(SearchError::NoCriteria)));

        let criteria = SearchCriteria::default().with_genre("Drama");
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_credits_mentions_cast_or_crew() {
        let credits = CreditsInfo {
            cast: vec![CastCredit {
                name: "Tom Hanks".to_string(),
                character: Some("Captain Miller".to_string()),
            }],
            crew: vec![CrewCredit {
                name: "Steven Spielberg".to_string(),
                job: "Director".to_string(),
            }],
        };
        assert!(credits.mentions("tom hanks"));
        assert!(credits.mentions("SPIELBERG"));
        assert!(credits.mentions("hanks"));
        assert!(!credits.mentions("nolan"));
        assert_eq!(credits.crew_with_job("director").collect::<Vec<_>>(), vec!["Steven Spielberg"]);
    }

    #[test]
    fn test_genre_catalog_resolves_case_insensitively() {
        let catalog =
            GenreCatalog::from_genres(vec![(28, "Action"), (35, "Comedy"), (99, "comedy")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("COMEDY"), Some(35));
        assert_eq!(catalog.resolve("action"), Some(28));
        assert_eq!(catalog.resolve("Act"), None);
    }

    #[test]
    fn test_movie_year() {
        let movie = MovieSummary {
            id: 1,
            title: "Jaws".to_string(),
            overview: String::new(),
            poster_path: None,
            genre_ids: vec![],
            release_date: Some("1975-06-20".to_string()),
        };
        assert_eq!(movie.year(), Some(1975));
    }
}
