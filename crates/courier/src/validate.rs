//! Upload validation: supported file types and project id shapes.

use serde::Deserialize;

/// The only file type the workflow accepts.
const SUPPORTED_FILETYPE: &str = "txt";

/// Extension stripped when deriving a project id from a filename.
const SUPPORTED_EXTENSION: &str = ".txt";

/// The slice of a Slack file object the relay cares about.
///
/// Slack sends many more fields; unknown ones are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackFile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub filetype: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// Whether a file is eligible for processing.
///
/// True iff a file is present and its type tag is exactly `txt`.
#[must_use]
pub fn is_supported_file(file: Option<&SlackFile>) -> bool {
    file.and_then(|f| f.filetype.as_deref())
        .is_some_and(|filetype| filetype == SUPPORTED_FILETYPE)
}

/// Derive a project id from a filename.
///
/// Strips one trailing `.txt` (case-insensitive) and trims whitespace;
/// an empty filename yields an empty id.
#[must_use]
pub fn extract_project_id(filename: &str) -> String {
    strip_supported_extension(filename).trim().to_string()
}

/// Whether a project id has the expected `org/owner/repo[/path...]` shape:
/// at least three `/`-separated segments, none empty after trimming.
#[must_use]
pub fn is_valid_project_id(project_id: &str) -> bool {
    if project_id.is_empty() {
        return false;
    }

    let segments: Vec<&str> = project_id.split('/').map(str::trim).collect();
    segments.len() >= 3 && segments.iter().all(|segment| !segment.is_empty())
}

/// Strip one trailing supported extension, case-insensitively.
fn strip_supported_extension(filename: &str) -> &str {
    let len = filename.len();
    let ext_len = SUPPORTED_EXTENSION.len();

    if len >= ext_len
        && filename
            .get(len - ext_len..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SUPPORTED_EXTENSION))
    {
        filename.get(..len - ext_len).unwrap_or(filename)
    } else {
        filename
    }
}
