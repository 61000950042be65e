use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};

use crate::errors::{ColocError, Result};
use crate::models::variant::{Variant, parse_variant};
use crate::schema::{Column, ColumnType, ToRow, Value};

/// Separates entries of a causal variant list.
pub const ENTRY_DELIMITER: char = ';';
/// Separates `variant,pip,beta` inside one entry.
pub const FIELD_DELIMITER: char = ',';

///
/// Posterior inclusion probability and effect size reported by one analysis.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CredibleSetStatistics {
    pub pip: f64,
    pub beta: f64,
}

///
/// Which credible sets a causal variant belongs to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Both,
    Side1Only,
    Side2Only,
    Neither,
}

impl Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Membership::Both => "Both",
            Membership::Side1Only => "CS1",
            Membership::Side2Only => "CS2",
            Membership::Neither => "None",
        };
        write!(f, "{}", label)
    }
}

///
/// One variant's statistics as reported by analysis 1 and analysis 2.
///
/// A side is either fully present (pip and beta) or fully absent.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CausalVariant {
    pub variant: Option<Variant>,
    pub side1: Option<CredibleSetStatistics>,
    pub side2: Option<CredibleSetStatistics>,
}

impl CausalVariant {
    pub fn new(
        variant: Option<Variant>,
        side1: Option<CredibleSetStatistics>,
        side2: Option<CredibleSetStatistics>,
    ) -> Self {
        CausalVariant {
            variant,
            side1,
            side2,
        }
    }

    pub fn pip1(&self) -> Option<f64> {
        self.side1.map(|s| s.pip)
    }

    pub fn beta1(&self) -> Option<f64> {
        self.side1.map(|s| s.beta)
    }

    pub fn pip2(&self) -> Option<f64> {
        self.side2.map(|s| s.pip)
    }

    pub fn beta2(&self) -> Option<f64> {
        self.side2.map(|s| s.beta)
    }

    pub fn has_side1(&self) -> bool {
        self.side1.is_some()
    }

    pub fn has_side2(&self) -> bool {
        self.side2.is_some()
    }

    pub fn count_cs1(&self) -> usize {
        usize::from(self.has_side1())
    }

    pub fn count_cs2(&self) -> usize {
        usize::from(self.has_side2())
    }

    /// Number of analyses (0, 1 or 2) reporting this variant.
    pub fn credible_set_count(&self) -> usize {
        self.count_cs1() + self.count_cs2()
    }

    pub fn credible_set_membership(&self) -> Membership {
        match (self.has_side1(), self.has_side2()) {
            (true, true) => Membership::Both,
            (true, false) => Membership::Side1Only,
            (false, true) => Membership::Side2Only,
            (false, false) => Membership::Neither,
        }
    }
}

impl ToRow for CausalVariant {
    fn columns(prefix: Option<&str>) -> Vec<Column> {
        let mut columns = vec![
            Column::id(prefix),
            Column::new(prefix, "pip1", ColumnType::Float).nullable(true),
            Column::new(prefix, "pip2", ColumnType::Float).nullable(true),
            Column::new(prefix, "beta1", ColumnType::Float).nullable(true),
            Column::new(prefix, "beta2", ColumnType::Float).nullable(true),
        ];
        columns.extend(Variant::columns_with(prefix, false, true));
        columns
    }

    fn values(&self) -> Vec<Value> {
        let mut values = vec![
            Value::Null,
            Value::from(self.pip1()),
            Value::from(self.pip2()),
            Value::from(self.beta1()),
            Value::from(self.beta2()),
        ];
        values.extend(Variant::values_of(self.variant.as_ref()));
        values
    }
}

///
/// Split one `variant,pip,beta` entry into its raw variant token and statistics.
///
pub fn parse_causal_variant_entry(entry: &str) -> Result<(&str, CredibleSetStatistics)> {
    let malformed = || ColocError::MalformedCausalVariant(entry.to_string());

    let parts: Vec<&str> = entry.split(FIELD_DELIMITER).collect();
    let [variant, pip, beta] = parts.as_slice() else {
        return Err(malformed());
    };

    let pip = pip.parse::<f64>().map_err(|_| malformed())?;
    let beta = beta.parse::<f64>().map_err(|_| malformed())?;

    Ok((*variant, CredibleSetStatistics { pip, beta }))
}

///
/// Index a semicolon separated list by its raw variant token.
///
/// Empty entries are skipped; when a token repeats, the last entry wins.
///
pub fn index_credible_set(list: &str) -> Result<BTreeMap<&str, CredibleSetStatistics>> {
    let mut index = BTreeMap::new();
    for entry in list.split(ENTRY_DELIMITER).filter(|e| !e.is_empty()) {
        let (variant, statistics) = parse_causal_variant_entry(entry)?;
        index.insert(variant, statistics);
    }
    Ok(index)
}

///
/// Merge two independently reported causal variant lists.
///
/// Performs an outer join keyed by the raw variant token: every token found in
/// either list yields exactly one [CausalVariant], carrying each side's
/// statistics when that side reports it. Results come back ordered by token,
/// not by parsed variant.
///
/// # Arguments
/// - list1: entries reported by analysis 1
/// - list2: entries reported by analysis 2
///
pub fn reconcile(list1: &str, list2: &str) -> Result<Vec<CausalVariant>> {
    let index1 = index_credible_set(list1)?;
    let index2 = index_credible_set(list2)?;

    let keys: BTreeSet<&str> = index1.keys().chain(index2.keys()).copied().collect();

    keys.into_iter()
        .map(|key| -> Result<CausalVariant> {
            let variant = parse_variant(key)?;
            Ok(CausalVariant::new(
                Some(variant),
                index1.get(key).copied(),
                index2.get(key).copied(),
            ))
        })
        .collect()
}
