//! Row and detail projections for the rendering boundary.
//!
//! The presentation layer renders color and tooltip straight from these
//! views: each annotated cell carries the raw message/severity text plus
//! the classifier's category, so no consumer re-derives classification.
//! Classification is recomputed per cell on every build; it is cheap and
//! holds no state worth caching.

use serde::Serialize;

use crate::records::{Record, ReviewField};
use crate::severity::{classify_annotation, Category};

// ─── Row views ───────────────────────────────────────────────────────────────

/// One annotated cell: the field value plus its validation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub category: Category,
}

/// One record projected for table rendering.
///
/// Plain columns (`name`, `city`, `status`) carry no annotation slot and
/// stay bare strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub id: i64,
    pub name: String,
    pub email: CellView,
    pub street: CellView,
    pub city: String,
    pub zipcode: CellView,
    pub phone: CellView,
    pub status: String,
}

fn cell(record: &Record, field: ReviewField) -> CellView {
    let annotation = record.annotation(field);
    CellView {
        value: record.field_value(field).to_string(),
        message: annotation.and_then(|a| a.message.clone()),
        severity: annotation.and_then(|a| a.severity.clone()),
        category: classify_annotation(annotation),
    }
}

/// Project one record into its table row.
pub fn row_view(record: &Record) -> RowView {
    RowView {
        id: record.id,
        name: record.name.clone(),
        email: cell(record, ReviewField::Email),
        street: cell(record, ReviewField::Street),
        city: record.city.clone(),
        zipcode: cell(record, ReviewField::Zipcode),
        phone: cell(record, ReviewField::Phone),
        status: record.status.clone(),
    }
}

/// Project a collection in display order.
pub fn rows(records: &[Record]) -> Vec<RowView> {
    records.iter().map(row_view).collect()
}

// ─── Detail summary ──────────────────────────────────────────────────────────

/// One labeled line in the detail summary for an inspected record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    /// e.g. `"Zipcode Error"` or `"Zipcode Severity"`.
    pub label: String,
    pub text: String,
}

/// Present-only error summary, fields in presentation order.
///
/// A field contributes an `Error` line only when its annotation has a
/// message and a `Severity` line only when it has a severity; a record with
/// no annotations yields an empty summary.
pub fn error_summary(record: &Record) -> Vec<SummaryEntry> {
    let mut entries = Vec::new();
    for field in ReviewField::ALL {
        let Some(annotation) = record.annotation(field) else {
            continue;
        };
        if let Some(message) = &annotation.message {
            entries.push(SummaryEntry {
                label: format!("{} Error", field.label()),
                text: message.clone(),
            });
        }
        if let Some(severity) = &annotation.severity {
            entries.push(SummaryEntry {
                label: format!("{} Severity", field.label()),
                text: severity.clone(),
            });
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ErrorAnnotation, RecordErrors};

    fn record_with_errors(errors: RecordErrors) -> Record {
        Record {
            id: 1,
            name: "Ann".into(),
            email: "a@x.com".into(),
            street: "1 Elm".into(),
            city: "Springfield".into(),
            zipcode: "00000".into(),
            phone: "555".into(),
            status: "reviewed".into(),
            errors,
        }
    }

    #[test]
    fn cell_carries_raw_text_and_category() {
        let record = record_with_errors(RecordErrors {
            zipcode: Some(ErrorAnnotation {
                message: Some("Invalid format".into()),
                severity: Some("critical".into()),
            }),
            ..Default::default()
        });
        let row = row_view(&record);

        assert_eq!(row.zipcode.value, "00000");
        assert_eq!(row.zipcode.message.as_deref(), Some("Invalid format"));
        assert_eq!(row.zipcode.severity.as_deref(), Some("critical"));
        assert_eq!(row.zipcode.category, Category::Critical);
        // Unannotated cells default to Ok with no tooltip text.
        assert_eq!(row.email.category, Category::Ok);
        assert!(row.email.message.is_none());
    }

    #[test]
    fn summary_lists_present_fields_in_order() {
        let record = record_with_errors(RecordErrors {
            zipcode: Some(ErrorAnnotation {
                message: Some("Invalid format".into()),
                severity: Some("critical".into()),
            }),
            phone: Some(ErrorAnnotation {
                message: None,
                severity: Some("warning".into()),
            }),
            ..Default::default()
        });
        let summary = error_summary(&record);

        let labels: Vec<&str> = summary.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Zipcode Error", "Zipcode Severity", "Phone Severity"]
        );
    }

    #[test]
    fn summary_is_empty_without_annotations() {
        let record = record_with_errors(RecordErrors::default());
        assert!(error_summary(&record).is_empty());
    }

    #[test]
    fn rows_preserve_display_order() {
        let a = record_with_errors(RecordErrors::default());
        let mut b = record_with_errors(RecordErrors::default());
        b.id = 9;
        let views = rows(&[a, b]);
        let ids: Vec<i64> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, [1, 9]);
    }

    #[test]
    fn row_view_serializes_with_camel_case_category() {
        let record = record_with_errors(RecordErrors {
            email: Some(ErrorAnnotation {
                message: Some("bad".into()),
                severity: Some("warning".into()),
            }),
            ..Default::default()
        });
        let json = serde_json::to_value(row_view(&record)).unwrap();
        assert_eq!(json["email"]["category"], "warning");
        assert_eq!(json["zipcode"]["category"], "ok");
        assert!(json["zipcode"].get("message").is_none());
    }
}
