//! Courier configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `AIRTABLE_BASE` - Airtable base identifier holding the project table
//! - `AIRTABLE_TOKEN` - Airtable personal access token
//! - `AIRTABLE_API_URL` - API origin override (default: `https://api.airtable.com`)
//!
//! The n8n endpoint is passed in by the embedding process rather than read
//! from the environment, matching how the bot wires its webhook targets.
//!
//! Missing Airtable credentials are not an error at load time: the backend
//! rejects the first directory read instead, and a warning is logged here so
//! the operator can tell the two failure modes apart.

use secrecy::{ExposeSecret, SecretString};

/// Default Airtable API origin.
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com";

/// Configuration for the courier relay.
#[derive(Clone)]
pub struct CourierConfig {
    /// Airtable connection settings.
    pub airtable: AirtableConfig,
    /// n8n webhook endpoint receiving file jobs, events, and analytics.
    pub n8n_endpoint: String,
}

impl std::fmt::Debug for CourierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourierConfig")
            .field("airtable", &self.airtable)
            .field("n8n_endpoint", &self.n8n_endpoint)
            .finish()
    }
}

/// Airtable connection settings.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct AirtableConfig {
    /// Base identifier (the `appXXXX` part of the Airtable URL).
    pub base: String,
    /// Personal access token used as a bearer token.
    pub token: SecretString,
    /// API origin, overridable for tests.
    pub api_url: String,
}

impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("base", &self.base)
            .field("token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl AirtableConfig {
    /// Build a config from explicit values, using the default API origin.
    #[must_use]
    pub fn new(base: impl Into<String>, token: SecretString) -> Self {
        Self {
            base: base.into(),
            token,
            api_url: DEFAULT_AIRTABLE_API_URL.to_string(),
        }
    }

    /// Whether both credential values are present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.base.is_empty() && !self.token.expose_secret().is_empty()
    }
}

impl CourierConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Absent Airtable credentials default to empty strings and surface
    /// later as an authentication failure from the backend.
    #[must_use]
    pub fn from_env(n8n_endpoint: impl Into<String>) -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base = get_env_or_default("AIRTABLE_BASE", "");
        let token = get_env_or_default("AIRTABLE_TOKEN", "");
        let api_url = get_env_or_default("AIRTABLE_API_URL", DEFAULT_AIRTABLE_API_URL);

        if base.is_empty() || token.is_empty() {
            tracing::warn!(
                "AIRTABLE_BASE or AIRTABLE_TOKEN not set; directory reads will be rejected"
            );
        }

        Self {
            airtable: AirtableConfig {
                base,
                token: SecretString::from(token),
                api_url,
            },
            n8n_endpoint: n8n_endpoint.into(),
        }
    }

    /// Build a config from explicit values (test injection).
    #[must_use]
    pub fn new(airtable: AirtableConfig, n8n_endpoint: impl Into<String>) -> Self {
        Self {
            airtable,
            n8n_endpoint: n8n_endpoint.into(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
