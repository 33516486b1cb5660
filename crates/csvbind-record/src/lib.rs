#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # csvbind-record
//!
//! Field value model and column metadata registration for CSV-bound
//! record types.
//!
//! This crate defines the record-side half of the encoding contract: a
//! typed [`FieldValue`] that accessors produce, and the [`CsvRecord`]
//! capability through which a type registers its fields together with
//! the header and ordinal annotations that drive column layout.

/// Field registration entries and the record capability trait.
pub mod meta;
/// Typed field values with per-kind absence tracking.
pub mod value;

/// Registration primitives for record types.
pub use meta::{Annotation, CsvRecord, FieldSpec};
/// Field value model and its kind discriminant.
pub use value::{FieldValue, ValueKind};
