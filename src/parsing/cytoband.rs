//! Reader for UCSC `cytoBand` tables.
//!
//! Format: `chrom\tchromStart\tchromEnd\tname\tgieStain`. Only `chrom` and `name`
//! are kept; coordinates and stains are not part of the hierarchy.

use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::parsing::ParseError;
use crate::utils::validation::is_comment_line;

/// Minimum number of tab-separated fields for a usable row
pub const MIN_FIELDS: usize = 4;

/// One data row of a cytoband table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CytobandRow {
    /// 1-based line number in the source
    pub line: usize,
    /// Chromosome label as written (e.g. "chr1")
    pub chromosome: String,
    /// Band name (e.g. "p36.33"), possibly empty
    pub name: String,
}

/// Parsed rows plus the count of lines that could not be used
#[derive(Debug, Clone, Default)]
pub struct CytobandTable {
    pub rows: Vec<CytobandRow>,
    /// Comment/header lines and rows with too few fields
    pub malformed: usize,
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a cytoband table from disk, decompressing `.gz`/`.bgz` files
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or decompressed, or
/// `ParseError::InvalidFormat` if it contains no data rows.
pub fn read_cytoband_file(path: &Path) -> Result<CytobandTable, ParseError> {
    let file = std::fs::File::open(path)?;
    let mut text = String::new();

    if is_gzipped(path) {
        BufReader::new(GzDecoder::new(file)).read_to_string(&mut text)?;
    } else {
        BufReader::new(file).read_to_string(&mut text)?;
    }

    parse_cytoband_text(&text)
}

/// Parse cytoband TSV text
///
/// Blank lines are ignored. Comment/header lines (`#`, `track`, `browser`) and rows
/// with fewer than four fields are counted as malformed and skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no data rows are found.
pub fn parse_cytoband_text(text: &str) -> Result<CytobandTable, ParseError> {
    let mut table = CytobandTable::default();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if is_comment_line(line) {
            debug!(line = line_num, "skipping comment/header line");
            table.malformed += 1;
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            debug!(
                line = line_num,
                fields = fields.len(),
                "skipping row with fewer than {MIN_FIELDS} fields"
            );
            table.malformed += 1;
            continue;
        }

        table.rows.push(CytobandRow {
            line: line_num,
            chromosome: fields[0].trim().to_string(),
            name: fields[3].trim().to_string(),
        });
    }

    if table.rows.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No cytoband rows found in input".to_string(),
        ));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "#chrom\tchromStart\tchromEnd\tname\tgieStain
chr1\t0\t2300000\tp36.33\tgneg
chr1\t2300000\t5300000\tp36.32\tgpos25
chr1_KI270706v1_random\t0\t175055\t\tgneg
";

    #[test]
    fn test_parse_cytoband_text() {
        let table = parse_cytoband_text(SAMPLE).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.malformed, 1);

        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[0].chromosome, "chr1");
        assert_eq!(table.rows[0].name, "p36.33");
        assert_eq!(table.rows[2].name, "");
    }

    #[test]
    fn test_short_rows_and_track_lines_are_malformed() {
        let text = "track name=cytoBand\nbrowser position chr1\nchr1\t0\t100\nchr2\t0\t100\tp25.3\tgneg\n\n";
        let table = parse_cytoband_text(text).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.malformed, 3);
        assert_eq!(table.rows[0].line, 4);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "chr1\t0\t100\tp36.33\tgneg\r\nchr1\t100\t200\tp36.32\tgneg\r\n";
        let table = parse_cytoband_text(text).unwrap();
        assert_eq!(table.rows[1].name, "p36.32");
    }

    #[test]
    fn test_no_rows_is_an_error() {
        assert!(parse_cytoband_text("").is_err());
        assert!(parse_cytoband_text("# only a header\n").is_err());
    }

    #[test]
    fn test_read_plain_and_gzipped_files() {
        let mut plain = NamedTempFile::with_suffix(".txt").unwrap();
        plain.write_all(SAMPLE.as_bytes()).unwrap();
        plain.flush().unwrap();
        let table = read_cytoband_file(plain.path()).unwrap();
        assert_eq!(table.rows.len(), 3);

        let mut gz = NamedTempFile::with_suffix(".txt.gz").unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        gz.write_all(&encoder.finish().unwrap()).unwrap();
        gz.flush().unwrap();
        let table = read_cytoband_file(gz.path()).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].name, "p36.32");
    }
}
