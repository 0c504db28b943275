pub mod config;
pub mod export;
pub mod records;
pub mod selection;
pub mod session;
pub mod severity;
pub mod sink;
pub mod source;
pub mod view;

// Re-export the engine surface so callers don't need deep paths.
pub use records::{ErrorAnnotation, Record, RecordErrors, RecordPayload, ReviewField};
pub use selection::SelectionState;
pub use session::{ReviewError, ReviewSession, SessionStatus};
pub use severity::{classify, classify_annotation, Category};
