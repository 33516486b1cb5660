//! # csvbind
//!
//! Metadata-driven encoding of record collections as CSV documents.
//!
//! Column labels and column order come from per-field metadata registered
//! through the [`record::CsvRecord`] trait, not from field declaration
//! order. Descriptors are resolved once per record type (and memoized),
//! each field value is converted to text with temporal formatting and
//! null substitution rules, and rows are joined with delimiter-triggered
//! quoting.
//!
//! ## Example Usage
//!
//! ```rust
//! use csvbind::record::{Annotation, CsvRecord, FieldSpec, FieldValue};
//! use csvbind::{EncodeConfig, LineEnding, to_csv_text};
//!
//! struct Employee {
//!     name: String,
//!     badge: i64,
//! }
//!
//! impl CsvRecord for Employee {
//!     fn fields() -> &'static [FieldSpec<Self>] {
//!         const FIELDS: &[FieldSpec<Employee>] = &[
//!             FieldSpec::new(
//!                 "name",
//!                 &[Annotation::Header("Full Name"), Annotation::Ordinal("0")],
//!                 |record: &Employee| FieldValue::from(record.name.as_str()),
//!             ),
//!             FieldSpec::new(
//!                 "badge",
//!                 &[Annotation::Header("Badge"), Annotation::Ordinal("1")],
//!                 |record: &Employee| FieldValue::from(record.badge),
//!             ),
//!         ];
//!         FIELDS
//!     }
//! }
//!
//! let staff = vec![Employee { name: "Ada".into(), badge: 7 }];
//! let config = EncodeConfig::new().line_ending(LineEnding::Lf);
//! let text = to_csv_text(&staff, &config).unwrap();
//! assert_eq!(text, "Full Name,Badge\nAda,7\n");
//! ```

pub mod config;
pub mod document;
pub mod encode;
pub mod errors;
pub mod resolver;
pub mod row;
pub mod sink;

// Re-export main types
pub use config::{DEFAULT_DATE_FORMAT, EncodeConfig, Encoding, LineEnding};
pub use document::{to_csv_text, to_csv_text_default};
pub use encode::encode_value;
pub use errors::{EncodeError, EncodeResult};
pub use resolver::{ColumnDescriptor, resolve_columns};
pub use row::assemble_row;
pub use sink::{to_csv_bytes, write_csv};

/// Record-side model, re-exported so client crates only depend on
/// `csvbind`.
pub use csvbind_record as record;
