//! Query planning: criteria with the genre name resolved to an id.

use crate::{GenreCatalog, SearchCriteria};

/// Resolved form of [`SearchCriteria`] shared by the fetcher and the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    pub title: Option<String>,
    pub people: Vec<String>,
    /// Genre name as entered
    pub genre_name: Option<String>,
    /// Genre id, `None` when no genre was given or the name did not resolve
    pub genre_id: Option<i64>,
}

impl QueryPlan {
    /// Build a plan. `catalog` is only consulted when a genre criterion exists.
    pub fn new(criteria: &SearchCriteria, catalog: Option<&GenreCatalog>) -> Self {
        let genre_id = match (&criteria.genre, catalog) {
            (Some(name), Some(catalog)) => catalog.resolve(name),
            _ => None,
        };

        let plan = Self {
            title: criteria.title.clone(),
            people: criteria.people.clone(),
            genre_name: criteria.genre.clone(),
            genre_id,
        };
        if plan.genre_unresolved() {
            tracing::warn!(
                "Genre '{}' not found in catalog",
                plan.genre_name.as_deref().unwrap_or_default()
            );
        }
        plan
    }

    /// True when a genre was supplied but did not resolve.
    pub fn genre_unresolved(&self) -> bool {
        self.genre_name.is_some() && self.genre_id.is_none()
    }
}
