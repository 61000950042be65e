use std::fmt::Display;
use std::str::FromStr;

use log::{debug, warn};

use crate::errors::{ColocError, Result};
use crate::models::causal_variant::{CausalVariant, reconcile};
use crate::models::locus::{Locus, normalize_chromosome};
use crate::models::variant::{Variant, parse_variant};
use crate::schema::{Column, ColumnType, ToRow, Value};
use crate::utils::{as_ascii, as_string, blank_as_null, coerce_nullable};

/// Default delimiter between the fields of an input row.
pub const DEFAULT_DELIMITER: char = '\t';

///
/// Positional layout of an input row. The column order is defined here and
/// determines how data is loaded.
///
pub const IMPORT_COLUMN_NAMES: [&str; 23] = [
    "source1",
    "source2",
    "phenotype1",
    "phenotype1_description",
    "phenotype2",
    "phenotype2_description",
    "quant1",
    "quant2",
    "tissue1",
    "tissue2",
    "locus_id1",
    "locus_id2",
    "chromosome",
    "start",
    "stop",
    "clpp",
    "clpa",
    "vars",
    "len_cs1",
    "len_cs2",
    "len_inter",
    "vars1_info",
    "vars2_info",
];

/// Number of fields in an input row.
pub const FIELD_COUNT: usize = IMPORT_COLUMN_NAMES.len();

///
/// Colocalization struct, two analyses sharing a causal signal at one locus.
///
/// Built once from a parsed row (or by hand) and never mutated afterwards.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Colocalization {
    pub source1: String,
    pub source2: String,

    pub phenotype1: String,
    pub phenotype1_description: String,
    pub phenotype2: String,
    pub phenotype2_description: String,

    pub quant1: Option<String>,
    pub quant2: Option<String>,

    pub tissue1: Option<String>,
    pub tissue2: String,

    /// Lead variants of each analysis.
    pub locus_id1: Variant,
    pub locus_id2: Variant,

    /// Shared locus; absent when the input range was inverted.
    pub locus: Option<Locus>,

    pub clpp: f64,
    pub clpa: f64,

    pub len_cs1: u64,
    pub len_cs2: u64,
    pub len_inter: u64,

    pub variants: Vec<CausalVariant>,
}

/// Borrowed view of one row, used to coerce fields by position.
struct RowFields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RowFields<'a> {
    fn raw(&self, index: usize) -> &'a str {
        self.fields[index]
    }

    fn invalid(&self, index: usize, error: impl Display) -> ColocError {
        ColocError::malformed_row(
            format!("invalid {}: {}", IMPORT_COLUMN_NAMES[index], error),
            self.raw(index),
        )
    }

    fn missing(&self, index: usize) -> ColocError {
        ColocError::malformed_row(
            format!("missing {}", IMPORT_COLUMN_NAMES[index]),
            self.raw(index),
        )
    }

    fn optional<T, E, F>(&self, index: usize, convert: F) -> Result<Option<T>>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: Display,
    {
        coerce_nullable(Some(self.raw(index)), convert).map_err(|e| self.invalid(index, e))
    }

    fn required<T, E, F>(&self, index: usize, convert: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: Display,
    {
        self.optional(index, convert)?
            .ok_or_else(|| self.missing(index))
    }

    /// Required field where `NA`/`na` also counts as missing.
    fn required_na<T, E, F>(&self, index: usize, convert: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: Display,
    {
        blank_as_null(Some(self.raw(index)), convert)
            .map_err(|e| self.invalid(index, e))?
            .ok_or_else(|| self.missing(index))
    }

    fn variant(&self, index: usize) -> Result<Variant> {
        match self.raw(index) {
            "" => Err(self.missing(index)),
            text => parse_variant(text),
        }
    }

    fn chromosome(&self, index: usize) -> Result<String> {
        match self.raw(index) {
            "" => Err(self.missing(index)),
            text => normalize_chromosome(text)
                .ok_or_else(|| self.invalid(index, "not a chromosome name")),
        }
    }
}

fn parse_u64(text: &str) -> std::result::Result<u64, std::num::ParseIntError> {
    text.parse::<u64>()
}

fn parse_f64(text: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    text.parse::<f64>()
}

impl Colocalization {
    ///
    /// Build a colocalization from the fields of one input row.
    ///
    /// The whole record fails on a wrong field count, an unparseable
    /// numeric field, a missing required field or a malformed identifier.
    /// Only the shared locus degrades: an inverted `start`/`stop` leaves it
    /// absent.
    ///
    /// # Arguments
    /// - fields: the row, in [IMPORT_COLUMN_NAMES] order
    ///
    pub fn from_row<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        let row = RowFields {
            fields: fields.iter().map(|field| field.as_ref()).collect(),
        };

        if row.fields.len() != FIELD_COUNT {
            return Err(ColocError::malformed_row(
                format!("expected {} fields, found {}", FIELD_COUNT, row.fields.len()),
                row.fields.join("\t"),
            ));
        }

        let chromosome = row.chromosome(12)?;
        let start = row.required_na(13, parse_u64)?;
        let stop = row.required_na(14, parse_u64)?;
        let locus = Locus::new(chromosome, start, stop);
        if locus.is_none() {
            warn!(
                "Inverted locus {}:{}-{} treated as absent",
                row.raw(12),
                start,
                stop
            );
        }

        // an empty list means the analysis reported no causal variants
        let variants = reconcile(row.raw(21), row.raw(22))?;

        let colocalization = Colocalization {
            source1: row.required(0, as_string)?,
            source2: row.required(1, as_string)?,

            phenotype1: row.required(2, as_ascii)?,
            phenotype1_description: row.required(3, as_ascii)?,
            phenotype2: row.required(4, as_ascii)?,
            phenotype2_description: row.required(5, as_ascii)?,

            quant1: row.optional(6, as_string)?,
            quant2: row.optional(7, as_string)?,

            tissue1: row.optional(8, as_string)?,
            tissue2: row.required(9, as_string)?,

            locus_id1: row.variant(10)?,
            locus_id2: row.variant(11)?,

            locus,

            clpp: row.required(15, parse_f64)?,
            clpa: row.required(16, parse_f64)?,

            len_cs1: row.required_na(18, parse_u64)?,
            len_cs2: row.required_na(19, parse_u64)?,
            len_inter: row.required_na(20, parse_u64)?,

            variants,
        };

        debug!(
            "Parsed colocalization {}/{} with {} causal variants",
            colocalization.phenotype1,
            colocalization.phenotype2,
            colocalization.variants.len()
        );

        Ok(colocalization)
    }

    ///
    /// Split a line on `delimiter` and build a colocalization from it.
    ///
    pub fn from_str_with(text: &str, delimiter: char) -> Result<Self> {
        let line = text.trim_end_matches(['\n', '\r']);
        let fields: Vec<&str> = line.split(delimiter).collect();
        Colocalization::from_row(&fields)
    }

    /// Field names of the record, in declaration order.
    pub fn column_names() -> Vec<&'static str> {
        vec![
            "source1",
            "source2",
            "phenotype1",
            "phenotype1_description",
            "phenotype2",
            "phenotype2_description",
            "quant1",
            "quant2",
            "tissue1",
            "tissue2",
            "locus_id1",
            "locus_id2",
            "locus",
            "clpp",
            "clpa",
            "len_cs1",
            "len_cs2",
            "len_inter",
            "variants",
        ]
    }

    /// Causal variants reported by analysis 1.
    pub fn credible_set_size_1(&self) -> usize {
        self.variants.iter().map(CausalVariant::count_cs1).sum()
    }

    /// Causal variants reported by analysis 2.
    pub fn credible_set_size_2(&self) -> usize {
        self.variants.iter().map(CausalVariant::count_cs2).sum()
    }
}

impl FromStr for Colocalization {
    type Err = ColocError;

    fn from_str(s: &str) -> Result<Self> {
        Colocalization::from_str_with(s, DEFAULT_DELIMITER)
    }
}

impl ToRow for Colocalization {
    fn columns(prefix: Option<&str>) -> Vec<Column> {
        let text = |name: &str, width: usize| Column::new(prefix, name, ColumnType::String(width));

        let locus_id1 = format!("{}locus_id1_", prefix.unwrap_or(""));
        let locus_id2 = format!("{}locus_id2_", prefix.unwrap_or(""));

        let mut columns = vec![
            Column::id(prefix),
            text("source1", 80),
            text("source2", 80),
            text("phenotype1", 1000),
            text("phenotype1_description", 1000),
            text("phenotype2", 1000),
            text("phenotype2_description", 1000),
            text("quant1", 80).nullable(true),
            text("quant2", 80).nullable(true),
            text("tissue1", 80).nullable(true),
            text("tissue2", 80),
        ];
        columns.extend(Variant::columns(Some(&locus_id1)));
        columns.extend(Variant::columns(Some(&locus_id2)));
        columns.extend(Locus::columns_with(prefix, true));
        columns.extend([
            Column::new(prefix, "clpp", ColumnType::Float),
            Column::new(prefix, "clpa", ColumnType::Float),
            Column::new(prefix, "len_cs1", ColumnType::Integer),
            Column::new(prefix, "len_cs2", ColumnType::Integer),
            Column::new(prefix, "len_inter", ColumnType::Integer),
        ]);
        columns
    }

    fn values(&self) -> Vec<Value> {
        let mut values = vec![
            Value::Null,
            Value::from(self.source1.as_str()),
            Value::from(self.source2.as_str()),
            Value::from(self.phenotype1.as_str()),
            Value::from(self.phenotype1_description.as_str()),
            Value::from(self.phenotype2.as_str()),
            Value::from(self.phenotype2_description.as_str()),
            Value::from(self.quant1.as_deref()),
            Value::from(self.quant2.as_deref()),
            Value::from(self.tissue1.as_deref()),
            Value::from(self.tissue2.as_str()),
        ];
        values.extend(self.locus_id1.values());
        values.extend(self.locus_id2.values());
        values.extend(Locus::values_of(self.locus.as_ref()));
        values.extend([
            Value::from(self.clpp),
            Value::from(self.clpa),
            Value::from(self.len_cs1),
            Value::from(self.len_cs2),
            Value::from(self.len_inter),
        ]);
        values
    }
}
