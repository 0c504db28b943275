//! Severity classification.
//!
//! Maps the free-form severity label on a validation annotation to the
//! presentation category the rendering layer colors by.  The match is exact
//! and case-sensitive: `"Critical"` is not `"critical"` and lands in [`Category::Ok`]
//! like every other unrecognized label.  Callers that want casing folded
//! must normalize before classifying.

use serde::Serialize;

use crate::records::ErrorAnnotation;

/// Presentation category for a validation severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Critical,
    Warning,
    Ok,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Warning => write!(f, "warning"),
            Self::Ok => write!(f, "ok"),
        }
    }
}

/// Classify a raw severity label.
///
/// Total over all strings: the two recognized labels map to their category,
/// everything else (including the empty string) is [`Category::Ok`].
pub fn classify(severity: &str) -> Category {
    match severity {
        "critical" => Category::Critical,
        "warning" => Category::Warning,
        _ => Category::Ok,
    }
}

/// Classify an optional annotation.
///
/// Any absent link (no annotation, no severity on it) is the default
/// category.
pub fn classify_annotation(annotation: Option<&ErrorAnnotation>) -> Category {
    annotation
        .and_then(|a| a.severity.as_deref())
        .map(classify)
        .unwrap_or(Category::Ok)
}
