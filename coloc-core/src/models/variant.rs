use std::fmt::{self, Display};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ColocError, Result};
use crate::schema::{Column, ColumnType, ToRow, Value};

/// Longest reference or alternate allele accepted, in characters.
pub const MAX_ALLELE_LENGTH: usize = 1000;

// The position is framed by the same separator on both sides; the regex crate
// has no backreferences, so both are captured and compared after matching.
static VARIANT_PARSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^(?i:chr)?
        (?P<chromosome>MT|M|X|Y|2[0-2]|1[0-9]|[1-9])
        (?P<sep1>[_:/])
        (?P<position>[0-9]+)
        (?P<sep2>[_:/])
        (?P<reference><[^>]+>|[^_:/]+)
        [_:/]
        (?P<alternate>.+)$
        ",
    )
    .expect("variant grammar is a valid regex")
});

///
/// Variant struct, a single sequence change at one genomic position.
///
/// The canonical text form is `chromosome:position:reference:alternate`.
/// Either allele may be a symbolic tag such as `<INS:ME:ALU>`.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
pub struct Variant {
    pub chromosome: String,
    pub position: u64,
    pub reference: String,
    pub alternate: String,
}

impl Variant {
    pub fn new(
        chromosome: impl Into<String>,
        position: u64,
        reference: impl Into<String>,
        alternate: impl Into<String>,
    ) -> Self {
        Variant {
            chromosome: chromosome.into(),
            position,
            reference: reference.into(),
            alternate: alternate.into(),
        }
    }

    ///
    /// Get the canonical string of the variant
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.chromosome, self.position, self.reference, self.alternate
        )
    }

    ///
    /// Column layout of one embedded variant.
    ///
    /// # Arguments
    /// - prefix: prepended to every column name
    /// - primary_key: mark all four columns as part of the key
    /// - nullable: allow a missing variant
    ///
    pub fn columns_with(prefix: Option<&str>, primary_key: bool, nullable: bool) -> Vec<Column> {
        [
            ("chromosome", ColumnType::String(2)),
            ("position", ColumnType::Integer),
            ("ref", ColumnType::String(MAX_ALLELE_LENGTH)),
            ("alt", ColumnType::String(MAX_ALLELE_LENGTH)),
        ]
        .into_iter()
        .map(|(name, kind)| {
            Column::new(prefix, name, kind)
                .primary_key(primary_key)
                .nullable(nullable)
        })
        .collect()
    }

    /// Row cells for an optional variant; four nulls when absent.
    pub fn values_of(variant: Option<&Variant>) -> Vec<Value> {
        match variant {
            Some(variant) => variant.values(),
            None => vec![Value::Null; 4],
        }
    }
}

///
/// Parse a variant identifier.
///
/// Accepts an optional `chr` prefix (any case), a chromosome from
/// 1..22, X, Y, M or MT, and `_`, `:` or `/` as separators. The two separators
/// around the position must agree; the one before the alternate allele may
/// differ. Text that does not follow this grammar is always an error.
///
pub fn parse_variant(text: &str) -> Result<Variant> {
    let malformed = || ColocError::MalformedIdentifier(text.to_string());

    let fragments = VARIANT_PARSER.captures(text).ok_or_else(malformed)?;

    if fragments["sep1"] != fragments["sep2"] {
        return Err(malformed());
    }

    let reference = &fragments["reference"];
    let alternate = &fragments["alternate"];
    if reference.chars().count() > MAX_ALLELE_LENGTH
        || alternate.chars().count() > MAX_ALLELE_LENGTH
    {
        return Err(malformed());
    }

    let position = fragments["position"]
        .parse::<u64>()
        .map_err(|_| malformed())?;

    Ok(Variant::new(
        &fragments["chromosome"],
        position,
        reference,
        alternate,
    ))
}

impl FromStr for Variant {
    type Err = ColocError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl ToRow for Variant {
    fn columns(prefix: Option<&str>) -> Vec<Column> {
        Variant::columns_with(prefix, false, false)
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.chromosome.as_str()),
            Value::from(self.position),
            Value::from(self.reference.as_str()),
            Value::from(self.alternate.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("1_2_A_G")]
    #[case("1:2:A:G")]
    #[case("1/2/A/G")]
    #[case("1_2_A/G")]
    #[case("1:2:A_G")]
    #[case("chr1_2_A_G")]
    #[case("CHR1:2:A:G")]
    fn test_parse_variant_separators(#[case] text: &str) {
        let expected = Variant::new("1", 2, "A", "G");
        assert_eq!(parse_variant(text).unwrap(), expected);
    }

    #[rstest]
    fn test_variant_as_string() {
        let variant = parse_variant("1_2_A_G").unwrap();
        assert_eq!(variant.to_string(), "1:2:A:G");
    }

    #[rstest]
    fn test_structural_variant_alternate() {
        let variant = parse_variant("chr9_96792507_T_<INS:ME:ALU>").unwrap();
        assert_eq!(variant.chromosome, "9");
        assert_eq!(variant.position, 96792507);
        assert_eq!(variant.reference, "T");
        assert_eq!(variant.alternate, "<INS:ME:ALU>");
        assert_eq!(variant.to_string(), "9:96792507:T:<INS:ME:ALU>");
    }

    #[rstest]
    fn test_structural_variant_both_alleles() {
        let variant = parse_variant("chr9_96792507_<INS:ME:ALU>_<INS:ME:ALU>").unwrap();
        assert_eq!(variant.reference, "<INS:ME:ALU>");
        assert_eq!(variant.alternate, "<INS:ME:ALU>");
        assert_eq!(
            variant.to_string(),
            "9:96792507:<INS:ME:ALU>:<INS:ME:ALU>"
        );
    }

    #[rstest]
    #[case("X", 100, "AT", "A")]
    #[case("MT", 7, "C", "T")]
    #[case("M", 7, "C", "T")]
    #[case("22", 16050075, "A", "G")]
    #[case("9", 96792507, "<DEL>", "<INS:ME:ALU>")]
    fn test_variant_round_trip(
        #[case] chromosome: &str,
        #[case] position: u64,
        #[case] reference: &str,
        #[case] alternate: &str,
    ) {
        let variant = Variant::new(chromosome, position, reference, alternate);
        assert_eq!(parse_variant(&variant.to_string()).unwrap(), variant);
    }

    #[rstest]
    #[case("")]
    #[case("1_2_A")]
    #[case("23_2_A_G")]
    #[case("0_2_A_G")]
    #[case("1_x_A_G")]
    #[case("1_2:A_G")]
    #[case("1-2-A-G")]
    #[case("1_99999999999999999999999_A_G")]
    fn test_parse_variant_malformed(#[case] text: &str) {
        assert_eq!(
            parse_variant(text),
            Err(ColocError::MalformedIdentifier(text.to_string()))
        );
    }

    #[rstest]
    fn test_parse_variant_allele_too_long() {
        let text = format!("1_2_A_{}", "G".repeat(MAX_ALLELE_LENGTH + 1));
        assert!(parse_variant(&text).is_err());

        let text = format!("1_2_A_{}", "G".repeat(MAX_ALLELE_LENGTH));
        assert!(parse_variant(&text).is_ok());
    }

    #[rstest]
    fn test_variant_from_str() {
        let variant: Variant = "chrY/5/G/C".parse().unwrap();
        assert_eq!(variant, Variant::new("Y", 5, "G", "C"));
    }

    #[rstest]
    fn test_variant_columns() {
        let columns = Variant::columns_with(Some("locus_id1_"), false, true);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "locus_id1_chromosome",
                "locus_id1_position",
                "locus_id1_ref",
                "locus_id1_alt"
            ]
        );
        assert!(columns.iter().all(|c| c.nullable && !c.primary_key));
    }

    #[rstest]
    fn test_variant_values() {
        let variant = Variant::new("1", 2, "A", "G");
        assert_eq!(
            variant.values(),
            vec![
                Value::Text("1".to_string()),
                Value::Integer(2),
                Value::Text("A".to_string()),
                Value::Text("G".to_string()),
            ]
        );
        assert_eq!(Variant::values_of(None), vec![Value::Null; 4]);
    }
}
