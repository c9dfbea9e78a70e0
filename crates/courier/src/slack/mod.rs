//! Slack-facing message shapes for the selection flow.
//!
//! This module only produces data: the excluded bot process posts the
//! blocks and routes button clicks back. The contract it must honor is the
//! `select_project_{id}` / `cancel_project_selection` action id convention
//! and the JSON payloads carried in button values.

mod blocks;
mod selection;

pub use blocks::{ActionElement, Block, ButtonStyle, Text};
pub use selection::{ButtonValue, CANCEL_ACTION_ID, CancelValue, selection_blocks};
