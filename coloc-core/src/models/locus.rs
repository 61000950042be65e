use std::fmt::{self, Display};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{Column, ColumnType, ToRow, Value};

static LOCUS_PARSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<chromosome>[A-Za-z0-9]+):(?P<start>[0-9]+)-(?P<stop>[0-9]+)$")
        .expect("locus grammar is a valid regex")
});

///
/// Locus struct, a chromosome coordinate range.
///
/// `start <= stop` always holds; whether the interval is open or closed is up
/// to the caller.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
pub struct Locus {
    chromosome: String,
    start: u64,
    stop: u64,
}

impl Locus {
    ///
    /// Build a locus, or `None` when `start > stop`.
    ///
    pub fn new(chromosome: impl Into<String>, start: u64, stop: u64) -> Option<Self> {
        (start <= stop).then(|| Locus {
            chromosome: chromosome.into(),
            start,
            stop,
        })
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn stop(&self) -> u64 {
        self.stop
    }

    ///
    /// Get the canonical `chromosome:start-stop` string
    ///
    pub fn as_string(&self) -> String {
        format!("{}:{}-{}", self.chromosome, self.start, self.stop)
    }

    pub fn columns_with(prefix: Option<&str>, nullable: bool) -> Vec<Column> {
        vec![
            Column::new(prefix, "chromosome", ColumnType::String(2)).nullable(nullable),
            Column::new(prefix, "start", ColumnType::Integer).nullable(nullable),
            Column::new(prefix, "stop", ColumnType::Integer).nullable(nullable),
        ]
    }

    /// Row cells for an optional locus; three nulls when absent.
    pub fn values_of(locus: Option<&Locus>) -> Vec<Value> {
        match locus {
            Some(locus) => locus.values(),
            None => vec![Value::Null; 3],
        }
    }
}

///
/// Parse a `chromosome:start-stop` range.
///
/// Returns `None` when the text does not match, when a coordinate does not
/// fit in 64 bits, or when `start > stop`. Callers read `None` as "no locus".
///
pub fn parse_locus(text: &str) -> Option<Locus> {
    let fragments = LOCUS_PARSER.captures(text)?;
    let start = fragments["start"].parse::<u64>().ok()?;
    let stop = fragments["stop"].parse::<u64>().ok()?;
    Locus::new(&fragments["chromosome"], start, stop)
}

///
/// Normalise a bare chromosome field: strips a leading `chr` in any case and
/// requires the remainder to be alphanumeric.
///
pub fn normalize_chromosome(text: &str) -> Option<String> {
    let stripped = match text.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &text[3..],
        _ => text,
    };

    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(stripped.to_string())
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl ToRow for Locus {
    fn columns(prefix: Option<&str>) -> Vec<Column> {
        Locus::columns_with(prefix, false)
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::from(self.chromosome.as_str()),
            Value::from(self.start),
            Value::from(self.stop),
        ]
    }
}
