use reqwest::Client;

use crate::error::TmdbError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a reqwest Client and a v3 API key.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Override the response language (e.g. `de-DE`).
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Point the client at a different API root, mainly for test servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue an authenticated GET and decode the JSON body.
    ///
    /// `api_key` and `language` are appended to `params` on every request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> crate::Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", path, params);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.lang.as_str()),
            ])
            .query(params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        decode(&body)
    }
}

/// Decode a response body, keeping the JSON path of the first mismatch.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &str) -> crate::Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
