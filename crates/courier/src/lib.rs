//! Courier - relays Slack file uploads to project repositories.
//!
//! Connective tissue between three external services: an Airtable base
//! listing project destinations, the Slack workspace where files are
//! uploaded and buttons clicked, and an n8n workflow that does the actual
//! file processing. Every operation is a single outbound HTTP request;
//! the relay itself holds no state between calls.
//!
//! # Modules
//!
//! - [`airtable`] - project directory reads
//! - [`slack`] - selection message shapes and button payloads
//! - [`n8n`] - automation endpoint posts
//! - [`dispatch`] - the fetch-resolve-post dispatch flow
//! - [`validate`] - filename and project id checks
//! - [`config`] - environment-backed configuration
//!
//! # Flow
//!
//! 1. A file upload event arrives at the (external) bot process
//! 2. The bot renders [`slack::selection_blocks`] over a fresh
//!    [`airtable::ProjectDirectory::fetch_projects`] read
//! 3. The user's button click carries the chosen project id back
//! 4. [`dispatch::FileDispatcher`] resolves it against another fresh fetch
//!    and posts the job to n8n

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod airtable;
pub mod config;
pub mod dispatch;
pub mod n8n;
pub mod slack;
pub mod validate;

pub use airtable::{DirectoryError, Project, ProjectDirectory};
pub use config::{AirtableConfig, CourierConfig};
pub use dispatch::{DispatchOutcome, FileDispatchRequest, FileDispatcher};
pub use n8n::{DispatchError, N8nClient};
