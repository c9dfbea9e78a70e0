//! n8n automation endpoint client.
//!
//! Three outbound paths, each a single JSON POST with its own timeout:
//! file jobs (30 s), raw upload event forwards (15 s), and analytics (10 s).
//! The response body is trusted verbatim; nothing is retried.

mod types;

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, error, instrument};

pub use types::{FileJob, FilePayload, ProjectPayload};

/// Timeout for posting a file job.
const FILE_JOB_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for forwarding a raw upload event.
const EVENT_FORWARD_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for posting analytics.
const ANALYTICS_TIMEOUT: Duration = Duration::from_secs(10);

/// Sub-path for analytics posts.
const ANALYTICS_PATH: &str = "/webhook/slack-analytics";

/// Errors that can occur when posting to the automation endpoint.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// HTTP request failed (includes timeouts).
    #[error("automation endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned an error status.
    #[error("automation endpoint rejected request: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("automation endpoint response error: {0}")]
    Decode(String),

    /// File status lookups have no backing store.
    #[error("file status lookup is not supported (no status store) for file {0}")]
    StatusUnsupported(String),
}

/// Client for the n8n webhook endpoint.
#[derive(Debug, Clone)]
pub struct N8nClient {
    client: reqwest::Client,
    endpoint: String,
}

impl N8nClient {
    /// Create a new client for the given webhook endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Post a file job to the workflow.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, times out, is rejected, or the
    /// response body is not JSON.
    #[instrument(skip(self, job), fields(project = %job.project.id))]
    pub async fn post_file_job(&self, job: &FileJob) -> Result<Value, DispatchError> {
        let response = self
            .post_json(&self.endpoint, job, FILE_JOB_TIMEOUT)
            .await?;
        debug!("File job accepted by n8n");
        Ok(response)
    }

    /// Forward a raw upload event, wrapped in an `event_callback` envelope.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails; this path has no user-facing
    /// fallback, so failures surface to the caller.
    #[instrument(skip(self, event))]
    pub async fn forward_upload_event(&self, event: Value) -> Result<Value, DispatchError> {
        let envelope = json!({
            "type": "event_callback",
            "event": event,
            "timestamp": now_rfc3339(),
        });

        let response = self
            .post_json(&self.endpoint, &envelope, EVENT_FORWARD_TIMEOUT)
            .await?;
        debug!("Upload event forwarded to n8n");
        Ok(response)
    }

    /// Post analytics, tagged with this integration as the source.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[instrument(skip(self, data))]
    pub async fn send_analytics(&self, data: Value) -> Result<Value, DispatchError> {
        let mut tagged = match data {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        tagged.insert("source".to_string(), json!("airtable-integration"));

        let envelope = json!({
            "type": "analytics",
            "data": tagged,
            "timestamp": now_rfc3339(),
        });

        let url = format!("{}{ANALYTICS_PATH}", self.endpoint);
        self.post_json(&url, &envelope, ANALYTICS_TIMEOUT).await
    }

    /// POST a JSON body and decode the JSON response.
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
        timeout: Duration,
    ) -> Result<Value, DispatchError> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "n8n rejected request");
            return Err(DispatchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| DispatchError::Decode(e.to_string()))
    }
}

/// Current time in the RFC 3339 millisecond format the workflow expects.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
