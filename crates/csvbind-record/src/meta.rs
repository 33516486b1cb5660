//! Column metadata registration for record types
#![allow(clippy::must_use_candidate)] // Lookup helpers are clear at call sites without #[must_use].

use crate::value::FieldValue;

/// A metadata annotation attached to a record field
///
/// Annotation payloads are stored as raw text, the way they were
/// written at the declaration site; validation and parsing happen during
/// descriptor resolution so malformed metadata is reported with field
/// context instead of failing at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Display label written as the column's title in the header line
    Header(&'static str),

    /// Zero-based output column index, as annotation text
    Ordinal(&'static str),
}

/// One field's registration entry: name, annotations, and accessor
pub struct FieldSpec<R: ?Sized> {
    /// Field name on the record type, used in diagnostics
    pub field: &'static str,

    /// Annotations attached to the field
    pub annotations: &'static [Annotation],

    /// Reads the field's value from one record
    pub read: fn(&R) -> FieldValue,
}

impl<R: ?Sized> FieldSpec<R> {
    /// Create a registration entry
    pub const fn new(
        field: &'static str,
        annotations: &'static [Annotation],
        read: fn(&R) -> FieldValue,
    ) -> Self {
        Self {
            field,
            annotations,
            read,
        }
    }

    /// The header annotation's label, if one is attached
    pub fn header(&self) -> Option<&'static str> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Header(label) => Some(*label),
            Annotation::Ordinal(_) => None,
        })
    }

    /// The ordinal annotation's raw text, if one is attached
    pub fn ordinal(&self) -> Option<&'static str> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Ordinal(text) => Some(*text),
            Annotation::Header(_) => None,
        })
    }
}

impl<R: ?Sized> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for FieldSpec<R> {}

impl<R: ?Sized> std::fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("field", &self.field)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

/// Capability for record types that can be encoded as CSV rows
///
/// A type registers its fields once, in declaration order, each paired
/// with the annotations that drive column layout. Field declaration
/// order is significant: it breaks ties between equal ordinals.
pub trait CsvRecord {
    /// Field registration table in declaration order
    fn fields() -> &'static [FieldSpec<Self>]
    where
        Self: Sized;
}
