//! Review engine configuration.

use std::time::Duration;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EXPORT_FILENAME: &str = "data.csv";

/// Settings for one review session.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Endpoint serving the `{ "records": [...] }` payload.
    pub source_url: String,
    /// Request timeout for the acquisition call.
    pub fetch_timeout: Duration,
    /// Filename handed to the export sink when the caller does not
    /// override it.
    pub export_filename: String,
}

impl ReviewConfig {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}
