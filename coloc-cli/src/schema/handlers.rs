use std::io::{self, Write};
use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;

use coloc_core::schema::{Column, ToRow};
use coloc_core::{CausalVariant, Colocalization};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Colocalization,
    CausalVariant,
}

impl FromStr for Table {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "colocalization" => Ok(Table::Colocalization),
            "causal_variant" => Ok(Table::CausalVariant),
            _ => anyhow::bail!(
                "Invalid table: {}. Valid options are 'colocalization' or 'causal_variant'",
                s
            ),
        }
    }
}

impl Table {
    pub fn columns(&self, prefix: Option<&str>) -> Vec<Column> {
        match self {
            Table::Colocalization => Colocalization::columns(prefix),
            Table::CausalVariant => CausalVariant::columns(prefix),
        }
    }
}

pub fn run_schema(matches: &ArgMatches) -> Result<()> {
    let table = matches
        .get_one::<String>("table")
        .map(|s| s.parse::<Table>())
        .transpose()?
        .unwrap_or(Table::Colocalization);
    let prefix = matches.get_one::<String>("prefix").map(String::as_str);

    let stdout = io::stdout();
    write_schema(table, prefix, &mut stdout.lock())
}

///
/// Write the column layout of `table` as TSV: name, type, nullable, primary key.
///
pub fn write_schema<W: Write>(table: Table, prefix: Option<&str>, writer: &mut W) -> Result<()> {
    writeln!(writer, "name\ttype\tnullable\tprimary_key")?;
    for column in table.columns(prefix) {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            column.name, column.kind, column.nullable, column.primary_key
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("colocalization", Table::Colocalization)]
    #[case("causal_variant", Table::CausalVariant)]
    fn test_table_from_str(#[case] text: &str, #[case] expected: Table) {
        assert_eq!(text.parse::<Table>().unwrap(), expected);
    }

    #[rstest]
    fn test_table_from_str_invalid() {
        assert!("variants".parse::<Table>().is_err());
    }

    #[rstest]
    fn test_write_schema() {
        let mut out = Vec::new();
        write_schema(Table::CausalVariant, Some("cv_"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "name\ttype\tnullable\tprimary_key");
        assert_eq!(lines[1], "cv_id\tINTEGER\tfalse\ttrue");
        assert_eq!(lines[2], "cv_pip1\tFLOAT\ttrue\tfalse");
        assert_eq!(lines.last().copied(), Some("cv_alt\tVARCHAR(1000)\ttrue\tfalse"));
    }
}
