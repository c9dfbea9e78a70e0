//! Project selection message builder.
//!
//! All pending-selection state travels inside the button payloads and comes
//! back with the user's click, so the relay keeps no server-side session for
//! an open selection prompt.

use serde::{Deserialize, Serialize};

use super::blocks::{ActionElement, Block, ButtonStyle, Text};
use crate::airtable::Project;

/// Slack caps action blocks at five elements.
const MAX_BUTTONS_PER_GROUP: usize = 5;

/// Action id of the trailing cancel button.
pub const CANCEL_ACTION_ID: &str = "cancel_project_selection";

/// Payload round-tripped through a project button.
///
/// Serialized key order is fixed by field order, so identical inputs
/// produce byte-identical button values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonValue {
    pub project_id: String,
    pub project_name: String,
    pub file_id: String,
}

/// Payload round-tripped through the cancel button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelValue {
    pub file_id: String,
}

impl ButtonValue {
    /// Serialize for embedding in a button.
    #[must_use]
    pub fn encode(&self) -> String {
        // String-only struct, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode a payload received back from a button click.
    ///
    /// # Errors
    ///
    /// Returns error if the value is not a valid payload.
    pub fn decode(value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(value)
    }
}

impl CancelValue {
    /// Serialize for embedding in the cancel button.
    #[must_use]
    pub fn encode(&self) -> String {
        // String-only struct, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode a payload received back from the cancel button.
    ///
    /// # Errors
    ///
    /// Returns error if the value is not a valid payload.
    pub fn decode(value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(value)
    }
}

/// Build the interactive project selection message for an uploaded file.
///
/// Emits an intro section, a divider, one actions block per chunk of up to
/// five project buttons (input order preserved), and a final cancel actions
/// block. An empty project list still gets the intro, divider, and cancel
/// block — never an empty actions block.
#[must_use]
pub fn selection_blocks(projects: &[Project], file_id: &str) -> Vec<Block> {
    let mut blocks = vec![
        Block::Section {
            text: Text::mrkdwn(
                "🎯 *Select a project* 🎯\n\n\
                 📂 Which project should the uploaded file go to?\n\
                 Use the emoji on each button as a guide.",
            ),
        },
        Block::Divider,
    ];

    for chunk in projects.chunks(MAX_BUTTONS_PER_GROUP) {
        blocks.push(Block::Actions {
            elements: chunk.iter().map(|project| project_button(project, file_id)).collect(),
        });
    }

    blocks.push(Block::Actions {
        elements: vec![ActionElement::Button {
            text: Text::plain("Close"),
            action_id: CANCEL_ACTION_ID.to_string(),
            value: CancelValue {
                file_id: file_id.to_string(),
            }
            .encode(),
            style: None,
        }],
    });

    blocks
}

/// Build one project button.
fn project_button(project: &Project, file_id: &str) -> ActionElement {
    ActionElement::Button {
        text: Text::plain(format!("{} {}", project.emoji, project.name)),
        action_id: format!("select_project_{}", project.id),
        value: ButtonValue {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            file_id: file_id.to_string(),
        }
        .encode(),
        style: Some(ButtonStyle::Primary),
    }
}
