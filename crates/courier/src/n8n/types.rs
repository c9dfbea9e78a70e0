//! Payload types for the n8n automation endpoint.

use serde::Serialize;

use crate::airtable::Project;

/// A file paired with its destination project, ready for the workflow.
///
/// Only built after the project was found in a fresh directory fetch.
#[derive(Debug, Clone, Serialize)]
pub struct FileJob {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub file: FilePayload,
    pub project: ProjectPayload,
    /// Dispatch time, RFC 3339.
    pub timestamp: String,
}

impl FileJob {
    /// Pair an uploaded file with its destination project.
    #[must_use]
    pub fn new(file: FilePayload, project: &Project) -> Self {
        Self {
            kind: "file_processing",
            file,
            project: ProjectPayload::from(project),
            timestamp: super::now_rfc3339(),
        }
    }
}

/// The uploaded file as the workflow sees it.
#[derive(Debug, Clone, Serialize)]
pub struct FilePayload {
    pub name: String,
    pub content: String,
    pub uploaded_by: String,
    pub channel: String,
    /// Slack message timestamp of the upload.
    pub timestamp: String,
}

/// Destination slice of a [`Project`] sent to the workflow.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPayload {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub repo: String,
    pub path_prefix: String,
    pub branch: String,
}

impl From<&Project> for ProjectPayload {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            owner: project.owner.clone(),
            repo: project.repo.clone(),
            path_prefix: project.path_prefix.clone(),
            branch: project.branch.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "recA1".to_string(),
            name: "Demo".to_string(),
            owner: "acme".to_string(),
            repo: "demo".to_string(),
            path_prefix: "src".to_string(),
            description: String::new(),
            emoji: "📁".to_string(),
            branch: "main".to_string(),
        }
    }

    #[test]
    fn test_file_job_shape() {
        let job = FileJob::new(
            FilePayload {
                name: "notes.txt".to_string(),
                content: "hello".to_string(),
                uploaded_by: "U123".to_string(),
                channel: "C456".to_string(),
                timestamp: "1712345678.000100".to_string(),
            },
            &project(),
        );

        let body = serde_json::to_value(&job).expect("serializes");
        assert_eq!(body["type"], "file_processing");
        assert_eq!(body["file"]["name"], "notes.txt");
        assert_eq!(body["file"]["uploaded_by"], "U123");
        assert_eq!(body["project"]["branch"], "main");
        // The project slice carries no presentation fields.
        assert!(body["project"].get("emoji").is_none());
        assert!(body["project"].get("description").is_none());
    }
}
