//! Metadata policy tests: both annotations are mandatory and validated
//! before any output is produced

use csvbind::record::{Annotation, CsvRecord, FieldSpec, FieldValue};
use csvbind::{EncodeError, resolve_columns, to_csv_text_default};

struct Unlabeled {
    id: i64,
}

impl CsvRecord for Unlabeled {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<Unlabeled>] = &[FieldSpec::new(
            "id",
            &[Annotation::Ordinal("0")],
            |record: &Unlabeled| FieldValue::from(record.id),
        )];
        FIELDS
    }
}

struct Unordered {
    id: i64,
}

impl CsvRecord for Unordered {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<Unordered>] = &[FieldSpec::new(
            "id",
            &[Annotation::Header("Id")],
            |record: &Unordered| FieldValue::from(record.id),
        )];
        FIELDS
    }
}

struct WordOrdinal {
    id: i64,
}

impl CsvRecord for WordOrdinal {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<WordOrdinal>] = &[FieldSpec::new(
            "id",
            &[Annotation::Header("Id"), Annotation::Ordinal("2nd")],
            |record: &WordOrdinal| FieldValue::from(record.id),
        )];
        FIELDS
    }
}

struct Tally {
    label: String,
    total: Option<i64>,
}

impl CsvRecord for Tally {
    fn fields() -> &'static [FieldSpec<Self>] {
        const FIELDS: &[FieldSpec<Tally>] = &[
            FieldSpec::new(
                "label",
                &[Annotation::Header("Label"), Annotation::Ordinal("0")],
                |record: &Tally| FieldValue::from(record.label.as_str()),
            ),
            FieldSpec::new(
                "total",
                &[Annotation::Header("Total"), Annotation::Ordinal("1")],
                |record: &Tally| FieldValue::from(record.total),
            ),
        ];
        FIELDS
    }
}

#[test]
fn test_missing_header_fails_before_any_output() {
    let records = vec![Unlabeled { id: 1 }];
    let err = to_csv_text_default(&records).unwrap_err();
    assert_eq!(err, EncodeError::missing_header("id"));
}

#[test]
fn test_missing_ordinal_fails_before_any_output() {
    let records = vec![Unordered { id: 1 }];
    let err = to_csv_text_default(&records).unwrap_err();
    assert_eq!(err, EncodeError::missing_ordinal("id"));
}

#[test]
fn test_malformed_ordinal_is_a_metadata_error() {
    let err = resolve_columns::<WordOrdinal>().unwrap_err();
    assert_eq!(err, EncodeError::invalid_ordinal("id", "2nd"));
    assert_eq!(err.field(), Some("id"));
}

#[test]
fn test_metadata_failures_repeat_on_every_call() {
    // Only successful resolutions are memoized.
    for _ in 0..2 {
        let err = resolve_columns::<Unlabeled>().unwrap_err();
        assert_eq!(err, EncodeError::missing_header("id"));
    }
}

#[test]
fn test_absent_scalar_names_row_and_column() {
    let records = vec![
        Tally {
            label: "ok".to_string(),
            total: Some(3),
        },
        Tally {
            label: "broken".to_string(),
            total: None,
        },
    ];

    let err = to_csv_text_default(&records).unwrap_err();
    match err {
        EncodeError::ValueConversion { row, ref column, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Total");
        }
        other => panic!("expected ValueConversion, got {other:?}"),
    }
}

#[test]
fn test_present_scalars_still_encode() {
    let records = vec![Tally {
        label: "ok".to_string(),
        total: Some(3),
    }];

    let text = to_csv_text_default(&records).unwrap();
    assert!(text.contains("ok,3"));
}
