//! Airtable project directory client.
//!
//! Reads the single `project_id` table of the configured base and maps its
//! records onto [`Project`] values. One bounded read per call: no retry, no
//! caching, and only the first page of records.

mod types;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::config::AirtableConfig;

pub use types::{Project, ProjectFields, ProjectRecord, RecordPage};

/// Timeout for a single directory read.
const DIRECTORY_TIMEOUT: Duration = Duration::from_secs(10);

/// Table holding the project records.
const PROJECT_TABLE: &str = "project_id";

/// Errors that can occur when reading the project directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// HTTP request failed (includes timeouts).
    #[error("directory request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned an error status.
    #[error("directory read rejected: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to decode the record page.
    #[error("directory response error: {0}")]
    Decode(String),

    /// Client could not be constructed from the given configuration.
    #[error("directory configuration error: {0}")]
    Config(String),
}

/// Client for the Airtable-backed project directory.
#[derive(Debug, Clone)]
pub struct ProjectDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectDirectory {
    /// Create a new directory client.
    ///
    /// The bearer token is baked into the client's default headers so every
    /// request is authenticated the same way.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &AirtableConfig) -> Result<Self, DirectoryError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.token.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| DirectoryError::Config(format!("invalid token format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert("Authorization", auth_header);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: format!("{}/v0/{}/{PROJECT_TABLE}", config.api_url, config.base),
        })
    }

    /// Fetch all projects, in backend order.
    ///
    /// Always a fresh read; if the backend paginates, only the first page
    /// is visible.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, times out, is rejected, or the
    /// body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, DirectoryError> {
        let response = self
            .client
            .get(&self.base_url)
            .timeout(DIRECTORY_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Airtable rejected directory read");
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: RecordPage = response
            .json()
            .await
            .map_err(|e| DirectoryError::Decode(e.to_string()))?;

        let projects: Vec<Project> = page.records.into_iter().map(Project::from).collect();

        debug!(count = projects.len(), "Fetched projects from Airtable");

        Ok(projects)
    }
}
