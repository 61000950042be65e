use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use coloc_core::Colocalization;
use coloc_core::models::colocalization::DEFAULT_DELIMITER;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for a gzipped file, a plain file, or stdin when the path is `-`.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// One input line and the outcome of parsing it.
///
#[derive(Debug)]
pub struct ParsedLine {
    /// 1-based, counting the header if there is one.
    pub line_number: usize,
    pub line: String,
    pub record: coloc_core::Result<Colocalization>,
}

///
/// Iterates the colocalization rows of a delimited text stream.
///
/// Blank lines are skipped. A bad row does not stop iteration; the caller
/// decides what to do with it.
///
pub struct ColocalizationReader<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    skip_header: bool,
    delimiter: char,
}

impl<R: BufRead> ColocalizationReader<R> {
    pub fn new(reader: R, header: bool) -> Self {
        ColocalizationReader {
            lines: reader.lines(),
            line_number: 0,
            skip_header: header,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl<R: BufRead> Iterator for ColocalizationReader<R> {
    type Item = std::io::Result<ParsedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line_number += 1;

            if self.skip_header {
                self.skip_header = false;
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            let record = Colocalization::from_str_with(&line, self.delimiter);
            return Some(Ok(ParsedLine {
                line_number: self.line_number,
                line,
                record,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_reader_skips_header_and_blank_lines() {
        let input = "header\n\nnot\ta\trow\n";
        let lines: Vec<ParsedLine> = ColocalizationReader::new(Cursor::new(input), true)
            .collect::<std::io::Result<_>>()
            .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_number, 3);
        assert_eq!(lines[0].line, "not\ta\trow");
        assert!(lines[0].record.is_err());
    }

    #[rstest]
    fn test_reader_without_header() {
        let input = "a\nb\n";
        let numbers: Vec<usize> = ColocalizationReader::new(Cursor::new(input), false)
            .map(|parsed| parsed.unwrap().line_number)
            .collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[rstest]
    fn test_missing_file() {
        assert!(get_dynamic_reader(Path::new("does/not/exist.tsv")).is_err());
    }
}
