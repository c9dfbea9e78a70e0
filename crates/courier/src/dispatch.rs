//! File dispatch: pair an upload with its chosen project and hand the job
//! to the automation endpoint.
//!
//! This sits at a user-facing decision point, so dispatch failures are
//! reported as a [`DispatchOutcome`] rather than raised — the bot turns them
//! into a graceful message instead of crashing the interaction.

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::airtable::{Project, ProjectDirectory};
use crate::config::CourierConfig;
use crate::n8n::{DispatchError, FileJob, FilePayload, N8nClient};

/// A user's choice of project for an uploaded file, decoded from the
/// button click.
#[derive(Debug, Clone)]
pub struct FileDispatchRequest {
    /// File content to process.
    pub file_content: String,
    /// Original filename.
    pub file_name: String,
    /// Chosen project id (Airtable record id).
    pub project_id: String,
    /// Slack user who uploaded the file.
    pub user_id: String,
    /// Channel the file was shared in.
    pub channel_id: String,
    /// Slack message timestamp of the upload.
    pub ts: String,
}

/// Result of a dispatch attempt.
///
/// Missing projects and downstream failures both collapse into `Failed`;
/// only `Delivered` means the workflow received the job.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The job reached the workflow; `response` is its body, verbatim.
    Delivered { project: Project, response: Value },
    /// Nothing was sent, or the endpoint refused the job.
    Failed { error: String },
}

impl DispatchOutcome {
    /// Whether the job was delivered.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Dispatches uploaded files to the automation endpoint, resolving the
/// chosen project against a fresh directory fetch each time.
#[derive(Debug, Clone)]
pub struct FileDispatcher {
    directory: ProjectDirectory,
    n8n: N8nClient,
}

impl FileDispatcher {
    /// Build a dispatcher from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the directory client cannot be constructed.
    pub fn new(config: &CourierConfig) -> Result<Self, crate::airtable::DirectoryError> {
        Ok(Self {
            directory: ProjectDirectory::new(&config.airtable)?,
            n8n: N8nClient::new(config.n8n_endpoint.clone()),
        })
    }

    /// Build a dispatcher from already-constructed clients.
    #[must_use]
    pub const fn from_parts(directory: ProjectDirectory, n8n: N8nClient) -> Self {
        Self { directory, n8n }
    }

    /// Dispatch a file to the workflow under its chosen project.
    ///
    /// Fetches the directory fresh (no caching), resolves the project by
    /// exact id match, and posts the job. A project that has since
    /// disappeared, a directory outage, or a rejected POST all come back as
    /// [`DispatchOutcome::Failed`] with no job sent past the failure point.
    #[instrument(skip(self, request), fields(file = %request.file_name, project = %request.project_id))]
    pub async fn dispatch_file_with_project(
        &self,
        request: FileDispatchRequest,
    ) -> DispatchOutcome {
        let projects = match self.directory.fetch_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(error = %e, "Directory fetch failed during dispatch");
                return DispatchOutcome::Failed {
                    error: format!("failed to fetch projects: {e}"),
                };
            }
        };

        let Some(project) = projects.into_iter().find(|p| p.id == request.project_id) else {
            warn!("Chosen project not in directory");
            return DispatchOutcome::Failed {
                error: format!("project with id {} not found", request.project_id),
            };
        };

        let job = FileJob::new(
            FilePayload {
                name: request.file_name,
                content: request.file_content,
                uploaded_by: request.user_id,
                channel: request.channel_id,
                timestamp: request.ts,
            },
            &project,
        );

        match self.n8n.post_file_job(&job).await {
            Ok(response) => {
                info!(project = %project.id, "File dispatched");
                DispatchOutcome::Delivered { project, response }
            }
            Err(e) => {
                warn!(error = %e, "n8n refused file job");
                DispatchOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Forward a raw upload event to the workflow.
    ///
    /// # Errors
    ///
    /// Failures are raised unmodified; this path has no user-facing
    /// fallback.
    pub async fn forward_upload_event(&self, event: Value) -> Result<Value, DispatchError> {
        self.n8n.forward_upload_event(event).await
    }

    /// Send analytics about file processing.
    ///
    /// # Errors
    ///
    /// Failures are raised unmodified.
    pub async fn send_analytics(&self, data: Value) -> Result<Value, DispatchError> {
        self.n8n.send_analytics(data).await
    }

    /// Look up the processing status of a dispatched file.
    ///
    /// There is no status store behind this relay, so the lookup is
    /// explicitly unsupported rather than answering with synthetic data.
    /// A future status store would introduce its own answer type along
    /// with a real implementation.
    ///
    /// # Errors
    ///
    /// Always returns [`DispatchError::StatusUnsupported`].
    pub fn file_status(&self, file_id: &str) -> Result<(), DispatchError> {
        Err(DispatchError::StatusUnsupported(file_id.to_string()))
    }
}
