//! Spoonacular search client, used for photo lookups only.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

#[derive(Debug, Error)]
pub enum SpoonacularError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("spoonacular returned HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("SPOONACULAR_API_KEY is not set")]
    MissingApiKey,
}

/// Thin client for `recipes/complexSearch`.
#[derive(Clone)]
pub struct SpoonacularClient {
    base_url: String,
    api_key: SecretString,
    http: Client,
}

impl SpoonacularClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: SPOONACULAR_BASE_URL.to_string(),
            api_key,
            http: Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, SpoonacularError> {
        let api_key =
            std::env::var("SPOONACULAR_API_KEY").map_err(|_| SpoonacularError::MissingApiKey)?;
        Ok(Self::new(SecretString::new(api_key)))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up one representative photo URL for a free-text query.
    ///
    /// Returns `Ok(None)` when the search has no results or the first result
    /// carries no parseable image URL; the caller decides what stands in.
    pub async fn search_image(&self, query: &str) -> Result<Option<String>, SpoonacularError> {
        let url = format!("{}/recipes/complexSearch", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(url)
            .query(&[
                ("query", query),
                ("number", "1"),
                ("apiKey", self.api_key.expose_secret()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpoonacularError::Http { status, body });
        }

        let search: SearchResponse = response.json().await?;
        let image = search
            .results
            .into_iter()
            .next()
            .and_then(|result| result.image)
            .filter(|image| Url::parse(image).is_ok());
        Ok(image)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    image: Option<String>,
}
