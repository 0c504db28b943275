//! Review session orchestration.
//!
//! One session owns one record collection, the selection state machine, and
//! the data source it acquires from.  The collection is acquired exactly
//! once per session and is immutable afterwards; user actions mutate only
//! the selection.  Everything here runs on a single logical flow, so state
//! lives behind plain `&mut self` with no locking.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::export;
use crate::records::Record;
use crate::selection::SelectionState;
use crate::source::DataSource;
use crate::view::{self, RowView, SummaryEntry};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Acquisition status of the session.
///
/// `Loading` also covers a session whose `start` has not been called yet;
/// consumers must render a loading indicator and not assume rows exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Loading,
    Ready,
    Failed,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors returned by review session operations.
///
/// `NotFound` and `NoData` are local and recoverable: they never corrupt
/// the selection or the collection.  `AcquisitionFailed` is terminal for
/// the session's `Ready` transition.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The data source call failed or returned a malformed payload.
    #[error("acquisition failed: {0}")]
    AcquisitionFailed(anyhow::Error),
    /// Selection requested for an id absent from the current collection.
    #[error("no record with id {0} in the current collection")]
    NotFound(i64),
    /// Export requested before a successful acquisition.
    #[error("no data to export")]
    NoData,
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Orchestrates acquisition, selection, and export over one collection.
pub struct ReviewSession {
    source: Box<dyn DataSource>,
    status: SessionStatus,
    /// Set once the first `start` call runs; later calls are ignored so a
    /// late response can never overwrite a settled state.
    started: bool,
    records: Vec<Record>,
    selection: SelectionState,
}

impl ReviewSession {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            source,
            status: SessionStatus::Loading,
            started: false,
            records: Vec::new(),
            selection: SelectionState::Idle,
        }
    }

    /// Trigger the one-shot acquisition.
    ///
    /// On success the collection is replaced atomically and status becomes
    /// `Ready`.  On failure status becomes `Failed`, the prior (empty)
    /// collection is left untouched, and the source error is returned.
    /// Idempotent: once an acquisition has been triggered, further calls
    /// are no-ops.
    pub async fn start(&mut self) -> Result<(), ReviewError> {
        if self.started {
            debug!(status = %self.status, "start ignored, acquisition already triggered");
            return Ok(());
        }
        self.started = true;

        match self.source.fetch().await {
            Ok(records) => {
                info!(count = records.len(), "session ready");
                self.records = records;
                self.status = SessionStatus::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "acquisition failed");
                self.status = SessionStatus::Failed;
                Err(ReviewError::AcquisitionFailed(e))
            }
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The acquired collection, in display order.  Empty until `Ready`.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Select the record with `id` for detail inspection.
    ///
    /// The state machine snapshots the record as of now; selecting while
    /// already inspecting replaces the snapshot directly.
    pub fn select_row(&mut self, id: i64) -> Result<(), ReviewError> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ReviewError::NotFound(id))?;
        debug!(id, "row selected");
        self.selection.select(record);
        Ok(())
    }

    /// Close the detail view.  No-op when nothing is selected.
    pub fn close_detail(&mut self) {
        self.selection.close();
    }

    /// Serialize the collection for export.
    ///
    /// Fails fast with `NoData` unless the session is `Ready`; there is
    /// nothing to export while loading or after a failed acquisition.
    pub fn export_csv(&self) -> Result<String, ReviewError> {
        if self.status != SessionStatus::Ready {
            return Err(ReviewError::NoData);
        }
        Ok(export::to_csv(&self.records))
    }

    /// Table rows for the rendering boundary.
    pub fn rows(&self) -> Vec<RowView> {
        view::rows(&self.records)
    }

    /// Detail summary for the inspected record, if any.
    pub fn detail_summary(&self) -> Option<Vec<SummaryEntry>> {
        self.selection.snapshot().map(view::error_summary)
    }
}
