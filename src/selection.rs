//! Single-selection state machine for the detail view.
//!
//! Tracks which record, if any, is under inspection.  Selecting clones a
//! snapshot of the record at selection time; the snapshot is not
//! live-updated if the underlying collection later changes.  Selecting a
//! different record while already inspecting replaces the snapshot without
//! passing through `Idle`.  Transitions are synchronous and triggered by
//! discrete user actions only.

use crate::records::Record;

/// The current selection: nothing, or one inspected record snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Idle,
    Inspecting(Record),
}

impl SelectionState {
    /// Move to `Inspecting` with a snapshot of `record`.
    pub fn select(&mut self, record: Record) {
        *self = SelectionState::Inspecting(record);
    }

    /// Return to `Idle`.  No-op when already idle.
    pub fn close(&mut self) {
        *self = SelectionState::Idle;
    }

    /// The inspected record snapshot, if any.
    pub fn snapshot(&self) -> Option<&Record> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Inspecting(record) => Some(record),
        }
    }

    /// Id of the currently selected record, for row highlighting.
    pub fn selected_id(&self) -> Option<i64> {
        self.snapshot().map(|r| r.id)
    }

    pub fn is_inspecting(&self) -> bool {
        matches!(self, SelectionState::Inspecting(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> Record {
        Record {
            id,
            name: name.into(),
            email: String::new(),
            street: String::new(),
            city: String::new(),
            zipcode: String::new(),
            phone: String::new(),
            status: String::new(),
            errors: Default::default(),
        }
    }

    #[test]
    fn starts_idle() {
        let state = SelectionState::default();
        assert!(!state.is_inspecting());
        assert_eq!(state.selected_id(), None);
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn select_then_close() {
        let mut state = SelectionState::default();
        state.select(record(1, "Ann"));
        assert_eq!(state.selected_id(), Some(1));
        state.close();
        assert_eq!(state, SelectionState::Idle);
    }

    #[test]
    fn close_from_idle_is_noop() {
        let mut state = SelectionState::default();
        state.close();
        assert_eq!(state, SelectionState::Idle);
    }

    #[test]
    fn reselect_replaces_snapshot() {
        let mut state = SelectionState::default();
        state.select(record(1, "Ann"));
        state.select(record(2, "Bob"));
        assert_eq!(state.selected_id(), Some(2));
        assert_eq!(state.snapshot().unwrap().name, "Bob");
    }

    #[test]
    fn snapshot_is_a_copy_taken_at_selection_time() {
        let mut original = record(1, "Ann");
        let mut state = SelectionState::default();
        state.select(original.clone());
        // Mutating the caller's record does not touch the snapshot.
        original.name = "Changed".into();
        assert_eq!(state.snapshot().unwrap().name, "Ann");
    }
}
