//! Text encodings for boolean and integer setting values.
//!
//! Parsers return `None` for malformed input so the caller can fall back to
//! the field's declared default.

/// Parses a boolean value.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, ignoring case
/// and surrounding whitespace.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Formats a boolean value the way [`parse_bool`] reads it back.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parses a signed decimal integer, ignoring surrounding whitespace.
///
/// The result is `i64` so that out-of-range values for narrower fields
/// (negative sizes, for instance) survive parsing and can be clamped by the
/// caller instead of being rejected outright.
pub fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for text in ["true", "TRUE", " 1 ", "yes", "On"] {
            assert_eq!(parse_bool(text), Some(true), "{text:?}");
        }
        for text in ["false", "False", "0", "no", "OFF"] {
            assert_eq!(parse_bool(text), Some(false), "{text:?}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_text() {
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn test_format_bool_round_trips() {
        assert_eq!(parse_bool(format_bool(true)), Some(true));
        assert_eq!(parse_bool(format_bool(false)), Some(false));
    }

    #[test]
    fn test_parse_int_keeps_negative_values() {
        assert_eq!(parse_int("-24"), Some(-24));
        assert_eq!(parse_int(" 600\t"), Some(600));
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        assert_eq!(parse_int("six hundred"), None);
        assert_eq!(parse_int("12px"), None);
        assert_eq!(parse_int(""), None);
    }
}
