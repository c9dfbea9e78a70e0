//! Airtable record wire types and their mapping onto [`Project`].
//!
//! Airtable wraps user fields in a nested `fields` object and tolerates
//! sparse rows, so every optional field gets an explicit default here
//! rather than failing the whole page.

use serde::{Deserialize, Serialize};

/// Default emoji for projects without one configured.
const DEFAULT_EMOJI: &str = "📁";

/// Default branch for projects without one configured.
const DEFAULT_BRANCH: &str = "main";

/// A project destination: where an uploaded file should end up.
///
/// Built fresh on every directory fetch and discarded after use; identity
/// is `id`. Duplicate ids are not rejected, they just render twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Opaque Airtable record id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Path prefix inside the repository.
    pub path_prefix: String,
    /// Free-form description.
    pub description: String,
    /// Emoji shown on the selection button.
    pub emoji: String,
    /// Target branch.
    pub branch: String,
}

/// One page of records as returned by the Airtable list endpoint.
///
/// Only the first page is read; callers must not assume completeness
/// beyond that (inherited limitation).
#[derive(Debug, Deserialize)]
pub struct RecordPage {
    pub records: Vec<ProjectRecord>,
}

/// A single Airtable record.
#[derive(Debug, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub fields: ProjectFields,
}

/// User-defined fields of a project record.
#[derive(Debug, Deserialize)]
pub struct ProjectFields {
    #[serde(rename = "Name")]
    pub name: String,
    pub owner: String,
    pub repo: String,
    pub path_prefix: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            name: record.fields.name,
            owner: record.fields.owner,
            repo: record.fields.repo,
            path_prefix: record.fields.path_prefix,
            description: record.fields.description,
            emoji: record.fields.emoji,
            branch: record.fields.branch,
        }
    }
}
