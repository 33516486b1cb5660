//! Delimited row assembly

/// Join encoded field texts into one delimited line.
///
/// A field is wrapped in double quotes iff its text contains the
/// delimiter substring. Embedded quote characters and embedded line
/// terminators are passed through untouched (known limitation). The line
/// carries no terminator; the document builder appends one per line.
pub fn assemble_row<S: AsRef<str>>(fields: &[S], delimiter: &str) -> String {
    let mut line = String::new();
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            line.push_str(delimiter);
        }
        let field = field.as_ref();
        if field.contains(delimiter) {
            line.push('"');
            line.push_str(field);
            line.push('"');
        } else {
            line.push_str(field);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_joined_unquoted() {
        let line = assemble_row(&["John", "30"], ",");
        assert_eq!(line, "John,30");
    }

    #[test]
    fn test_field_containing_delimiter_is_quoted() {
        let line = assemble_row(&["Doe, John", "30"], ",");
        assert_eq!(line, "\"Doe, John\",30");
    }

    #[test]
    fn test_quoting_follows_the_configured_delimiter() {
        // With a semicolon delimiter a comma is plain text and a
        // semicolon is the quoting trigger.
        let line = assemble_row(&["Doe, John", "a;b"], ";");
        assert_eq!(line, "Doe, John;\"a;b\"");
    }

    #[test]
    fn test_multi_character_delimiter() {
        let line = assemble_row(&["a", "has||pipes", "b"], "||");
        assert_eq!(line, "a||\"has||pipes\"||b");
    }

    #[test]
    fn test_empty_fields_keep_their_columns() {
        let line = assemble_row(&["", "x", ""], ",");
        assert_eq!(line, ",x,");
    }

    #[test]
    fn test_embedded_quotes_are_not_escaped() {
        let line = assemble_row(&["say \"hi\""], ",");
        assert_eq!(line, "say \"hi\"");
    }
}
