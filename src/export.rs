//! CSV export.
//!
//! Flattens a record collection into delimited text: a header line plus one
//! line per record, 16 comma-joined columns, lines joined by `\n` with no
//! trailing newline.  Nested annotations are flattened into message/severity
//! column pairs, one pair per annotated field in presentation order.
//! Missing values render as empty strings.
//!
//! Embedded commas, quotes, and newlines are NOT escaped.  The output
//! matches what the existing consumers of the exported file expect, not
//! RFC 4180; a caller that needs strict CSV must add quoting at the
//! boundary.

use crate::records::{Record, ReviewField};

/// Fixed column order of the exported file.
pub const CSV_HEADERS: [&str; 16] = [
    "ID",
    "Name",
    "Email",
    "Street",
    "City",
    "Zipcode",
    "Phone",
    "Status",
    "Zipcode Error Message",
    "Zipcode Error Severity",
    "Email Error Message",
    "Email Error Severity",
    "Street Error Message",
    "Street Error Severity",
    "Phone Error Message",
    "Phone Error Severity",
];

/// Serialize a record collection to delimited text.
///
/// Deterministic: the same collection always yields byte-identical output.
/// An empty collection yields the empty string, not a lone header.
pub fn to_csv(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for r in records {
        let mut fields: Vec<String> = Vec::with_capacity(CSV_HEADERS.len());
        fields.push(r.id.to_string());
        fields.push(r.name.clone());
        fields.push(r.email.clone());
        fields.push(r.street.clone());
        fields.push(r.city.clone());
        fields.push(r.zipcode.clone());
        fields.push(r.phone.clone());
        fields.push(r.status.clone());
        for field in ReviewField::ALL {
            let annotation = r.annotation(field);
            fields.push(
                annotation
                    .and_then(|a| a.message.clone())
                    .unwrap_or_default(),
            );
            fields.push(
                annotation
                    .and_then(|a| a.severity.clone())
                    .unwrap_or_default(),
            );
        }
        lines.push(fields.join(","));
    }

    lines.join("\n")
}
