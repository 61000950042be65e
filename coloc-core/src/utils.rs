//! Scalar coercion helpers shared by every field of a parsed row.
//!
//! Nullability is decided by composition: a field is wrapped in
//! [coerce_nullable] or [blank_as_null] and handed the converter for its
//! type, instead of carrying bespoke per-field logic.

///
/// Apply `convert` to `raw` unless it is missing or the empty string.
///
/// # Arguments
/// - raw: the raw field text, `None` when the field is absent
/// - convert: the function producing the typed value
///
pub fn coerce_nullable<T, E, F>(raw: Option<&str>, convert: F) -> Result<Option<T>, E>
where
    F: FnOnce(&str) -> Result<T, E>,
{
    match raw {
        None | Some("") => Ok(None),
        Some(text) => convert(text).map(Some),
    }
}

///
/// Same as [coerce_nullable], but the literal spellings `na` and `NA`
/// are treated as missing too.
///
pub fn blank_as_null<T, E, F>(raw: Option<&str>, convert: F) -> Result<Option<T>, E>
where
    F: FnOnce(&str) -> Result<T, E>,
{
    match raw {
        Some(text) if is_na(text) => Ok(None),
        _ => coerce_nullable(raw, convert),
    }
}

/// `true` for the two accepted "not available" sentinels.
pub fn is_na(text: &str) -> bool {
    matches!(text, "na" | "NA")
}

///
/// Drop every character outside 7-bit ASCII, keeping the rest in order.
///
/// Phenotype descriptions occasionally arrive with mis-encoded punctuation.
///
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Identity converter for text fields.
pub fn as_string(text: &str) -> Result<String, std::convert::Infallible> {
    Ok(text.to_string())
}

/// Converter for free-text fields that may hold mis-encoded characters.
pub fn as_ascii(text: &str) -> Result<String, std::convert::Infallible> {
    Ok(strip_non_ascii(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn to_int(text: &str) -> Result<i64, std::num::ParseIntError> {
        text.parse::<i64>()
    }

    #[rstest]
    fn test_coerce_nullable() {
        assert_eq!(coerce_nullable(None, to_int), Ok(None));
        assert_eq!(coerce_nullable(Some(""), to_int), Ok(None));
        assert_eq!(coerce_nullable(Some("1"), to_int), Ok(Some(1)));
        assert!(coerce_nullable(Some("one"), to_int).is_err());
    }

    #[rstest]
    fn test_coerce_nullable_keeps_na() {
        assert_eq!(
            coerce_nullable(Some("NA"), as_string),
            Ok(Some("NA".to_string()))
        );
    }

    #[rstest]
    #[case(Some("NA"))]
    #[case(Some("na"))]
    #[case(Some(""))]
    #[case(None)]
    fn test_blank_as_null(#[case] raw: Option<&str>) {
        assert_eq!(blank_as_null(raw, as_string), Ok(None));
    }

    #[rstest]
    fn test_blank_as_null_is_case_sensitive() {
        assert_eq!(
            blank_as_null(Some("Na"), as_string),
            Ok(Some("Na".to_string()))
        );
        assert_eq!(blank_as_null(Some("7"), to_int), Ok(Some(7)));
    }

    #[rstest]
    #[case("", "")]
    #[case("na", "na")]
    #[case("Alzheimer\u{d5}s disease", "Alzheimers disease")]
    #[case("tab\tand  spaces", "tab\tand  spaces")]
    fn test_strip_non_ascii(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(strip_non_ascii(raw), expected);
    }
}
