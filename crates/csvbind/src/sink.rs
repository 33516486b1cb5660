//! Byte and writer sinks for encoded documents
//!
//! Pass-through collaborators: they transcode the already-built text to
//! the configured character encoding and carry no encoding logic of
//! their own beyond that.

use crate::config::{EncodeConfig, Encoding};
use crate::document::to_csv_text;
use crate::errors::{EncodeError, EncodeResult};
use csvbind_record::CsvRecord;
use std::io::Write;
use tracing::debug;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Encode records and return the document as bytes in the configured
/// character encoding.
///
/// # Errors
///
/// Any error from [`to_csv_text`], plus [`EncodeError::Encoding`] when
/// the document is not representable (US-ASCII with non-ASCII output).
pub fn to_csv_bytes<R: CsvRecord + 'static>(
    records: &[R],
    config: &EncodeConfig,
) -> EncodeResult<Vec<u8>> {
    let text = to_csv_text(records, config)?;
    let bytes = match config.encoding {
        Encoding::Utf8 => text.into_bytes(),
        Encoding::Utf8Bom => {
            let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
            bytes.extend_from_slice(UTF8_BOM);
            bytes.extend_from_slice(text.as_bytes());
            bytes
        }
        Encoding::Ascii => {
            if let Some(bad) = text.chars().find(|c| !c.is_ascii()) {
                return Err(EncodeError::encoding(
                    config.encoding.name(),
                    format!("character '{bad}' has no US-ASCII representation"),
                ));
            }
            text.into_bytes()
        }
    };

    debug!(
        len = bytes.len(),
        encoding = config.encoding.name(),
        "Transcoded CSV document"
    );
    Ok(bytes)
}

/// Encode records and write the transcoded document to an arbitrary sink.
///
/// # Errors
///
/// Any error from [`to_csv_bytes`]; write and flush failures surface as
/// [`EncodeError::Io`].
pub fn write_csv<R: CsvRecord + 'static, W: Write>(
    writer: &mut W,
    records: &[R],
    config: &EncodeConfig,
) -> EncodeResult<()> {
    let bytes = to_csv_bytes(records, config)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
