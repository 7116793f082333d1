use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Runtime settings for talking to TMDB.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing)]
    pub tmdb_api_key: String,
    pub tmdb_language: String,
    pub tmdb_base_url: String,
    pub max_concurrent_requests: usize,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new(tmdb_api_key: String) -> Self {
        Self {
            tmdb_api_key,
            tmdb_language: tmdb::DEFAULT_LANGUAGE.to_string(),
            tmdb_base_url: tmdb::DEFAULT_BASE_URL.to_string(),
            max_concurrent_requests: finder::DEFAULT_CONCURRENCY,
            request_timeout_secs: 30,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build the HTTP client and the TMDB client on top of it.
    pub fn tmdb_client(&self) -> reqwest::Result<tmdb::TmdbClient> {
        let http = reqwest::Client::builder()
            .timeout(self.request_timeout())
            .user_agent(concat!("movie-finder/", env!("MOVIE_FINDER_VERSION")))
            .build()?;

        Ok(tmdb::TmdbClient::new(http, self.tmdb_api_key.clone())
            .with_language(self.tmdb_language.clone())
            .with_base_url(self.tmdb_base_url.clone()))
    }
}
