//! Field value to text conversion

use crate::config::EncodeConfig;
use crate::errors::{EncodeError, EncodeResult};
use chrono::format::{Item, StrftimeItems};
use csvbind_record::FieldValue;
use std::fmt::Write as _;

/// Encode one field value as column text.
///
/// Present temporal values are rendered with the configured date format;
/// absent text and temporal values render as empty text. An absent value
/// of any other kind is a conversion error carrying `row` (1-based data
/// row) and `column` (resolved label) for context.
///
/// # Errors
///
/// [`EncodeError::ValueConversion`] for absent non-text, non-temporal
/// values; [`EncodeError::DateFormat`] when the configured pattern is
/// not usable.
pub fn encode_value(
    value: &FieldValue,
    config: &EncodeConfig,
    row: usize,
    column: &str,
) -> EncodeResult<String> {
    match value {
        FieldValue::Text(Some(text)) => Ok(text.clone()),
        FieldValue::Text(None) => Ok(String::new()),
        FieldValue::Date(Some(date)) => {
            let items = strftime_items(&config.date_format)?;
            render(date.format_with_items(items.into_iter()), &config.date_format)
        }
        FieldValue::DateTime(Some(datetime)) => {
            let items = strftime_items(&config.date_format)?;
            render(
                datetime.format_with_items(items.into_iter()),
                &config.date_format,
            )
        }
        FieldValue::Date(None) | FieldValue::DateTime(None) => Ok(String::new()),
        FieldValue::Integer(Some(value)) => Ok(value.to_string()),
        FieldValue::Decimal(Some(value)) => Ok(value.to_string()),
        FieldValue::Boolean(Some(value)) => Ok(value.to_string()),
        FieldValue::Integer(None) | FieldValue::Decimal(None) | FieldValue::Boolean(None) => {
            Err(EncodeError::value_conversion(row, column, value.kind()))
        }
    }
}

/// Parse a strftime pattern, rejecting unrecognized specifiers up front
/// instead of panicking inside chrono's `Display` path.
fn strftime_items(pattern: &str) -> EncodeResult<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(EncodeError::date_format(pattern));
    }
    Ok(items)
}

// A pattern can be syntactically valid yet unusable for the value at
// hand (e.g. an hour specifier applied to a date-only field); chrono
// reports that through the formatter, so capture it here.
fn render(formatted: impl std::fmt::Display, pattern: &str) -> EncodeResult<String> {
    let mut out = String::new();
    write!(out, "{formatted}").map_err(|_| EncodeError::date_format(pattern))?;
    Ok(out)
}
