use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use crate::reader::{ColocalizationReader, get_dynamic_reader_w_stdin};

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub header: bool,
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub parsed: usize,
    pub skipped: usize,
}

pub fn run_parse(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("An input path is required.");

    let options = ParseOptions {
        header: matches.get_flag("header"),
        skip_malformed: matches.get_flag("skip-malformed"),
    };

    let reader = get_dynamic_reader_w_stdin(input)?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let summary = parse_colocalizations(reader, &mut writer, options)
        .with_context(|| format!("Failed to parse {}", input))?;
    writer.flush()?;

    info!(
        "Parsed {} colocalizations from {} ({} skipped)",
        summary.parsed, input, summary.skipped
    );

    Ok(())
}

///
/// Parse every row of `reader` and write one JSON record per line to `writer`.
///
/// Without `skip_malformed`, the first bad row aborts with its line number.
///
pub fn parse_colocalizations<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: ParseOptions,
) -> Result<ParseSummary> {
    let mut summary = ParseSummary::default();

    for parsed in ColocalizationReader::new(reader, options.header) {
        let parsed = parsed?;
        match parsed.record {
            Ok(colocalization) => {
                writeln!(writer, "{}", colocalization.to_json_string()?)?;
                summary.parsed += 1;
            }
            Err(e) if options.skip_malformed => {
                warn!("Skipping line {}: {}", parsed.line_number, e);
                summary.skipped += 1;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!(
                    "Malformed row at line {}",
                    parsed.line_number
                )));
            }
        }
    }

    Ok(summary)
}
