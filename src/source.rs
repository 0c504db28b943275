//! Data source boundary.
//!
//! Acquisition is a single read returning the full record payload or
//! failing; no filtering or paging parameters are sent.  Retry policy, if
//! any, belongs to the source implementation, never to the review engine.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::records::{ErrorAnnotation, Record, RecordErrors, RecordPayload};

/// Common interface for record collection providers.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the full record collection.  One-shot; the engine never
    /// retries a failed fetch.
    async fn fetch(&self) -> Result<Vec<Record>>;
}

// ─── HTTP source ─────────────────────────────────────────────────────────────

/// Fetches the collection with a GET against a JSON endpoint shaped
/// `{ "records": [...] }`.
pub struct HttpDataSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDataSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        debug!(url = %self.url, "fetching record collection");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("GET {} returned {}", self.url, status);
        }

        let payload: RecordPayload = response
            .json()
            .await
            .with_context(|| format!("malformed record payload from {}", self.url))?;

        info!(count = payload.records.len(), "record collection acquired");
        Ok(payload.records)
    }
}

// ─── Static source ───────────────────────────────────────────────────────────

/// In-memory source wrapping a fixed collection.  Never fails.
///
/// Stands in for the HTTP endpoint in tests and demo mode.
pub struct StaticDataSource {
    records: Vec<Record>,
}

impl StaticDataSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Built-in sample collection used by `--demo` and the docs.
    pub fn sample() -> Self {
        fn ann(message: &str, severity: &str) -> Option<ErrorAnnotation> {
            Some(ErrorAnnotation {
                message: Some(message.to_string()),
                severity: Some(severity.to_string()),
            })
        }

        Self::new(vec![
            Record {
                id: 1,
                name: "Ann".into(),
                email: "a@x.com".into(),
                street: "1 Elm".into(),
                city: "Springfield".into(),
                zipcode: "00000".into(),
                phone: "555".into(),
                status: "reviewed".into(),
                errors: RecordErrors {
                    zipcode: ann("Invalid format", "critical"),
                    ..Default::default()
                },
            },
            Record {
                id: 2,
                name: "Bob Barker".into(),
                email: "bob.barker".into(),
                street: "22 Oak Ave".into(),
                city: "Shelbyville".into(),
                zipcode: "49007".into(),
                phone: "269-555-0104".into(),
                status: "pending".into(),
                errors: RecordErrors {
                    email: ann("Missing @ and domain", "critical"),
                    phone: ann("Unverified area code", "warning"),
                    ..Default::default()
                },
            },
            Record {
                id: 3,
                name: "Carol".into(),
                email: "carol@example.com".into(),
                street: "".into(),
                city: "Capital City".into(),
                zipcode: "61920".into(),
                phone: "555-0199".into(),
                status: "reviewed".into(),
                errors: RecordErrors {
                    street: ann("Street is empty", "warning"),
                    ..Default::default()
                },
            },
            Record {
                id: 4,
                name: "Dave".into(),
                email: "dave@example.com".into(),
                street: "4 Pine Rd".into(),
                city: "Ogdenville".into(),
                zipcode: "33133".into(),
                phone: "555-0123".into(),
                status: "approved".into(),
                errors: RecordErrors::default(),
            },
        ])
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}
