//! Line-level parsing for the routes dataset.
//!
//! The dataset is permissive CSV: fields may be quoted, quotes are escaped by
//! doubling, and malformed quoting never fails a row. Missing values follow
//! the OpenFlights convention of an empty field or the literal `\N`.

/// Sentinel used by the dataset for an absent value.
const NULL_SENTINEL: &str = "\\N";

/// Whether a raw field should be treated as absent.
pub fn is_missing(field: &str) -> bool {
    field.is_empty() || field == NULL_SENTINEL
}

/// Split one raw line into fields.
///
/// Commas inside a quoted span do not split; a doubled quote inside a quoted
/// span yields one literal quote. An unterminated quote is tolerated by
/// running to the end of the line, so this never fails. Callers must tolerate
/// rows shorter than the expected field count.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_fields("AA,24,JFK"), vec!["AA", "24", "JFK"]);
    }

    #[test]
    fn empty_line_yields_one_empty_field() {
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn preserves_empty_fields() {
        assert_eq!(split_fields("a,,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn quoted_comma_does_not_split() {
        assert_eq!(split_fields("\"a,b\",c"), vec!["a,b", "c"]);
    }

    #[test]
    fn doubled_quote_unescapes() {
        assert_eq!(split_fields("\"say \"\"hi\"\"\",x"), vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        assert_eq!(split_fields("\"abc,def"), vec!["abc,def"]);
    }

    #[test]
    fn missing_matches_empty_and_null_sentinel() {
        assert!(is_missing(""));
        assert!(is_missing("\\N"));
        assert!(!is_missing("JFK"));
        assert!(!is_missing(" "));
    }
}
