//! Shared fixtures for Courier integration tests.
//!
//! The tests stand up wiremock servers in place of Airtable and n8n and
//! point the clients at them through the config's URL fields.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use serde_json::{Value, json};

use courier::{AirtableConfig, CourierConfig};

/// Config wired to mock Airtable and n8n servers.
#[must_use]
pub fn test_config(airtable_url: &str, n8n_endpoint: &str) -> CourierConfig {
    let mut airtable = AirtableConfig::new("appTESTBASE", SecretString::from("patTestToken"));
    airtable.api_url = airtable_url.to_string();
    CourierConfig::new(airtable, n8n_endpoint)
}

/// An Airtable record with all fields populated.
#[must_use]
pub fn full_record(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "fields": {
            "Name": name,
            "owner": "acme",
            "repo": "demo",
            "path_prefix": "src",
            "description": "Demo project",
            "emoji": "🚀",
            "branch": "develop"
        }
    })
}

/// An Airtable record carrying only the identifying fields.
#[must_use]
pub fn sparse_record(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "fields": {
            "Name": name,
            "owner": "acme",
            "repo": "demo",
            "path_prefix": "src"
        }
    })
}
