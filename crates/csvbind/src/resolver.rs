//! Field descriptor resolution with per-type memoization

use crate::errors::{EncodeError, EncodeResult};
use csvbind_record::CsvRecord;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::{Arc, LazyLock};
use tracing::trace;

/// Resolved pairing of a field's label, output position, and accessor slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Display label written as the column's title
    pub label: &'static str,
    /// Zero-based output column index
    pub position: usize,
    /// Index into the record type's field registration table
    pub(crate) field_index: usize,
}

// Successful resolutions only; a failed resolution is re-reported on
// every call so the error stays eager.
static RESOLVED: LazyLock<DashMap<TypeId, Arc<[ColumnDescriptor]>>> = LazyLock::new(DashMap::new);

/// Resolve the ordered column descriptors for a record type.
///
/// Every field in the registration table must carry both a non-empty
/// header annotation and an ordinal annotation that parses as a
/// non-negative integer. Descriptors are returned sorted ascending by
/// position; equal positions keep field declaration order. The result is
/// computed once per type and cached.
///
/// # Errors
///
/// [`EncodeError::MissingHeader`], [`EncodeError::MissingOrdinal`], or
/// [`EncodeError::InvalidOrdinal`], each naming the offending field.
pub fn resolve_columns<R: CsvRecord + 'static>() -> EncodeResult<Arc<[ColumnDescriptor]>> {
    let key = TypeId::of::<R>();
    if let Some(cached) = RESOLVED.get(&key) {
        return Ok(Arc::clone(&cached));
    }

    let fields = R::fields();
    let mut columns = Vec::with_capacity(fields.len());
    for (field_index, spec) in fields.iter().enumerate() {
        let label = match spec.header() {
            Some(label) if !label.is_empty() => label,
            _ => return Err(EncodeError::missing_header(spec.field)),
        };
        let raw = spec
            .ordinal()
            .ok_or_else(|| EncodeError::missing_ordinal(spec.field))?;
        let position = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| EncodeError::invalid_ordinal(spec.field, raw))?;

        columns.push(ColumnDescriptor {
            label,
            position,
            field_index,
        });
    }

    // Stable sort: ties between equal positions keep declaration order.
    columns.sort_by_key(|column| column.position);

    let columns: Arc<[ColumnDescriptor]> = columns.into();
    RESOLVED.insert(key, Arc::clone(&columns));
    trace!(columns = columns.len(), "Resolved column descriptors");
    Ok(columns)
}
