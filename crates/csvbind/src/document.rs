//! Document assembly across a record collection

use crate::config::EncodeConfig;
use crate::encode::encode_value;
use crate::errors::{EncodeError, EncodeResult};
use crate::resolver::resolve_columns;
use crate::row::assemble_row;
use csvbind_record::CsvRecord;
use tracing::{debug, trace};

/// Encode a record collection as one CSV document.
///
/// Column layout is resolved once from the record type's metadata: the
/// first line holds the column labels, then one line per record with
/// fields in ascending position order. Every line, the last included, is
/// terminated by the configured line ending. An empty collection yields
/// empty text with no header line.
///
/// # Errors
///
/// Metadata errors from descriptor resolution surface before any row is
/// encoded; see [`resolve_columns`]. Value errors carry the offending
/// row and column.
pub fn to_csv_text<R: CsvRecord + 'static>(
    records: &[R],
    config: &EncodeConfig,
) -> EncodeResult<String> {
    if records.is_empty() {
        return Ok(String::new());
    }
    if config.delimiter.is_empty() {
        return Err(EncodeError::config("delimiter must not be empty"));
    }

    let columns = resolve_columns::<R>()?;
    let fields = R::fields();
    let terminator = config.line_ending.as_str();

    let labels: Vec<&str> = columns.iter().map(|column| column.label).collect();
    let mut document = assemble_row(&labels, &config.delimiter);
    document.push_str(terminator);

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        let mut encoded = Vec::with_capacity(columns.len());
        for column in columns.iter() {
            let value = (fields[column.field_index].read)(record);
            encoded.push(encode_value(&value, config, row, column.label)?);
        }
        document.push_str(&assemble_row(&encoded, &config.delimiter));
        document.push_str(terminator);
        trace!(row, "Encoded CSV row");
    }

    debug!(
        rows = records.len(),
        columns = columns.len(),
        "Encoded CSV document"
    );
    Ok(document)
}

/// Encode a record collection with the default configuration.
///
/// # Errors
///
/// Same failure modes as [`to_csv_text`].
pub fn to_csv_text_default<R: CsvRecord + 'static>(records: &[R]) -> EncodeResult<String> {
    to_csv_text(records, &EncodeConfig::default())
}
