//! Integration: plain and gzipped tables -> JSON lines

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use coloc_cli::parse::handlers::{ParseOptions, ParseSummary, parse_colocalizations};
use coloc_cli::reader::get_dynamic_reader;

#[fixture]
fn table_path() -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/colocalization/colocalization.tsv")
}

fn run(reader: impl std::io::BufRead, options: ParseOptions) -> (anyhow::Result<ParseSummary>, Vec<String>) {
    let mut out = Vec::new();
    let summary = parse_colocalizations(reader, &mut out, options);
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect();
    (summary, lines)
}

#[rstest]
fn test_parse_plain_table(table_path: PathBuf) {
    let reader = get_dynamic_reader(&table_path).unwrap();
    let options = ParseOptions {
        header: true,
        skip_malformed: false,
    };

    let (summary, lines) = run(reader, options);

    assert_eq!(
        summary.unwrap(),
        ParseSummary {
            parsed: 3,
            skipped: 0
        }
    );
    assert_eq!(lines.len(), 3);

    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["phenotype1"], "G6_ALZHEIMER");
    assert_eq!(first["credible_set_size_1"], 3);
    assert_eq!(first["variants"].as_array().unwrap().len(), 4);
}

#[rstest]
fn test_parse_gzipped_table(table_path: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();
    let gz_path = tempdir.path().join("colocalization.tsv.gz");

    let content = std::fs::read(&table_path).unwrap();
    let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
    encoder.write_all(&content).unwrap();
    encoder.finish().unwrap();

    let plain = run(
        get_dynamic_reader(&table_path).unwrap(),
        ParseOptions {
            header: true,
            skip_malformed: false,
        },
    )
    .1;
    let gzipped = run(
        get_dynamic_reader(&gz_path).unwrap(),
        ParseOptions {
            header: true,
            skip_malformed: false,
        },
    )
    .1;

    assert_eq!(plain, gzipped);
}

#[rstest]
fn test_header_is_malformed_without_flag(table_path: PathBuf) {
    let reader = get_dynamic_reader(&table_path).unwrap();
    let (summary, lines) = run(reader, ParseOptions::default());

    let error = summary.unwrap_err();
    assert!(error.to_string().contains("line 1"), "{}", error);
    assert!(lines.is_empty());
}

#[rstest]
fn test_skip_malformed(table_path: PathBuf) {
    let mut content = std::fs::read_to_string(&table_path).unwrap();
    content.push_str("too\tfew\tfields\n");

    let options = ParseOptions {
        header: true,
        skip_malformed: true,
    };
    let (summary, lines) = run(Cursor::new(content), options);

    assert_eq!(
        summary.unwrap(),
        ParseSummary {
            parsed: 3,
            skipped: 1
        }
    );
    assert_eq!(lines.len(), 3);
}
