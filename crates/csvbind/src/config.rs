//! Encoding configuration options

use serde::{Deserialize, Serialize};

/// Date format pattern used when none is configured, the strftime
/// rendering of "dd MMMM yyyy" (e.g. "05 March 2024").
pub const DEFAULT_DATE_FORMAT: &str = "%d %B %Y";

/// Configuration for one encoding call
///
/// The configuration is a call-scoped immutable value threaded through
/// every encoding step; it is never stored in process-wide state, so
/// concurrent calls with different settings cannot observe each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// strftime pattern applied to date and datetime fields (default: "%d %B %Y")
    pub date_format: String,
    /// Field separator, a single character or a longer string (default: comma)
    pub delimiter: String,
    /// Line terminator style (default: platform native)
    pub line_ending: LineEnding,
    /// Character encoding used by the byte-oriented sinks (default: UTF-8)
    pub encoding: Encoding,
}

/// Line ending options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    /// Unix-style line feed (\n)
    Lf,
    /// Windows-style carriage return + line feed (\r\n)
    CrLf,
    /// Platform native
    Native,
}

impl LineEnding {
    /// Get the line ending as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Character encodings supported by the byte-oriented sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8 without a byte order mark (default)
    Utf8,
    /// UTF-8 prefixed with a byte order mark
    Utf8Bom,
    /// US-ASCII (7-bit); non-ASCII output is rejected
    Ascii,
}

impl Encoding {
    /// Human-readable encoding name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf8Bom => "UTF-8 with BOM",
            Encoding::Ascii => "US-ASCII",
        }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            delimiter: ",".to_string(),
            line_ending: LineEnding::Native,
            encoding: Encoding::Utf8,
        }
    }
}

impl EncodeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date format pattern
    pub fn date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the line ending
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Set the sink character encoding
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}
