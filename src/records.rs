//! Wire and domain types for reviewed records.
//!
//! The data source returns a JSON payload `{ "records": [...] }`.  Field
//! names on the wire are lowercase; any scalar may be absent and
//! deserializes to its empty default, so downstream code never has to deal
//! with missing scalars.  Annotation links (`errors`, a per-field slot,
//! `message`, `severity`) stay optional all the way down: an absent link is
//! "no annotation", never a failure.

use serde::{Deserialize, Serialize};

// ─── Payload ─────────────────────────────────────────────────────────────────

/// Top-level payload returned by the data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordPayload {
    #[serde(default)]
    pub records: Vec<Record>,
}

/// One reviewed entity with contact fields and nested per-field validation
/// annotations.
///
/// `id` is unique within a collection and is the stable identity key for
/// selection and row rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub phone: String,
    /// Review outcome label, free-form.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub errors: RecordErrors,
}

// ─── Annotations ─────────────────────────────────────────────────────────────

/// Validation annotations for the four annotated fields.
///
/// The payload ships these as a fixed-key object; a missing object or a
/// missing slot means "no annotation on that field".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<ErrorAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<ErrorAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<ErrorAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<ErrorAnnotation>,
}

impl RecordErrors {
    /// `true` when no field carries an annotation.
    pub fn is_empty(&self) -> bool {
        self.zipcode.is_none() && self.street.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// A single validation failure attached to a field.
///
/// A field may have a severity without a message, a message without a
/// severity, or neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

// ─── Annotated fields ────────────────────────────────────────────────────────

/// The four fields that can carry a validation annotation.
///
/// `ALL` is the presentation order: CSV error columns and the detail
/// summary both walk the fields in this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Zipcode,
    Email,
    Street,
    Phone,
}

impl ReviewField {
    pub const ALL: [ReviewField; 4] = [
        ReviewField::Zipcode,
        ReviewField::Email,
        ReviewField::Street,
        ReviewField::Phone,
    ];

    /// Display name used in CSV headers and detail summary labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zipcode => "Zipcode",
            Self::Email => "Email",
            Self::Street => "Street",
            Self::Phone => "Phone",
        }
    }
}

impl std::fmt::Display for ReviewField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Record {
    /// The annotation on `field`, if any.
    pub fn annotation(&self, field: ReviewField) -> Option<&ErrorAnnotation> {
        match field {
            ReviewField::Zipcode => self.errors.zipcode.as_ref(),
            ReviewField::Email => self.errors.email.as_ref(),
            ReviewField::Street => self.errors.street.as_ref(),
            ReviewField::Phone => self.errors.phone.as_ref(),
        }
    }

    /// The raw value of `field` on this record.
    pub fn field_value(&self, field: ReviewField) -> &str {
        match field {
            ReviewField::Zipcode => &self.zipcode,
            ReviewField::Email => &self.email,
            ReviewField::Street => &self.street,
            ReviewField::Phone => &self.phone,
        }
    }
}
