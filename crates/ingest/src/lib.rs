//! CSV ingestion for quotevault.
//!
//! Reads the fixed-schema quotes file (quote, author, season, episode),
//! normalizes quoting in the text column, and skips malformed rows with a
//! warning instead of aborting the whole read.

mod error;

pub use error::IngestError;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quotevault_core::Quote;

/// Outcome of one CSV read: the valid records plus how many rows were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvReport {
    pub records: Vec<Quote>,
    pub skipped: usize,
}

/// Reads and validates the quotes CSV at `path`.
///
/// The header row is always skipped. A missing file fails the whole read;
/// header-only or all-invalid input yields an empty record list, which the
/// storage layer rejects at insert time.
pub fn read_quotes(path: &Path) -> Result<CsvReport, IngestError> {
    let file = File::open(path)?;
    parse_quotes(file)
}

fn parse_quotes<R: Read>(input: R) -> Result<CsvReport, IngestError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    // Data rows start at line 2, after the header.
    for (i, result) in reader.records().enumerate() {
        let line = i + 2;
        let record = result?;

        if record.len() < 4 {
            tracing::warn!(line, fields = record.len(), "skipping row: insufficient columns");
            skipped += 1;
            continue;
        }

        let quote = normalize_quote(record.get(0).unwrap_or(""));
        let author = record.get(1).unwrap_or("").trim().to_string();
        if quote.is_empty() || author.is_empty() {
            tracing::warn!(line, "skipping row: empty quote or author");
            skipped += 1;
            continue;
        }

        let season = record.get(2).unwrap_or("").trim().parse::<i32>();
        let episode = record.get(3).unwrap_or("").trim().parse::<i32>();
        let (season, episode) = match (season, episode) {
            (Ok(s), Ok(e)) => (s, e),
            _ => {
                tracing::warn!(line, "skipping row: invalid season/episode");
                skipped += 1;
                continue;
            },
        };

        records.push(Quote { quote, author, season, episode });
    }

    Ok(CsvReport { records, skipped })
}

/// Strips one outer pair of double quotes if present, then collapses
/// CSV-escaped doubled quotes to single literal quotes.
///
/// Standard quoting is already resolved by the reader; this handles source
/// files where the text column arrives quoted a second time.
fn normalize_quote(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = match trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner,
        None => trimmed,
    };
    inner.replace("\"\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> CsvReport {
        parse_quotes(content.as_bytes()).unwrap()
    }

    #[test]
    fn test_parses_valid_rows() {
        let report = parse(
            "quote,author,season,episode\n\
             No soup for you!,Soup Nazi,7,6\n\
             Serenity now!,Frank,9,3\n",
        );
        assert_eq!(report.skipped, 0);
        assert_eq!(
            report.records,
            vec![
                Quote {
                    quote: "No soup for you!".to_string(),
                    author: "Soup Nazi".to_string(),
                    season: 7,
                    episode: 6,
                },
                Quote {
                    quote: "Serenity now!".to_string(),
                    author: "Frank".to_string(),
                    season: 9,
                    episode: 3,
                },
            ]
        );
    }

    #[test]
    fn test_trims_whitespace() {
        let report = parse("quote,author,season,episode\n  Hello ,  Newman , 3 , 10 \n");
        assert_eq!(report.records[0].quote, "Hello");
        assert_eq!(report.records[0].author, "Newman");
        assert_eq!(report.records[0].season, 3);
        assert_eq!(report.records[0].episode, 10);
    }

    #[test]
    fn test_skips_short_rows() {
        let report = parse(
            "quote,author,season,episode\n\
             only,three,fields\n\
             A valid one,Jerry,1,1\n\
             lonely\n",
        );
        assert_eq!(report.skipped, 2);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].author, "Jerry");
    }

    #[test]
    fn test_skips_invalid_integers() {
        let report = parse("quote,author,season,episode\nI'm out,George,4,abc\n");
        assert_eq!(report.records, vec![]);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_skips_empty_quote_or_author() {
        let report = parse(
            "quote,author,season,episode\n\
             ,George,4,2\n\
             Something,   ,4,2\n",
        );
        assert_eq!(report.records, vec![]);
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn test_unescapes_embedded_quotes() {
        // The text column carries its own CSV-style quoting on top of the
        // file's: outer pair stripped, doubled quotes collapsed.
        let report = parse(concat!(
            "quote,author,season,episode\n",
            r#""""Hello"", Newman",Jerry,3,10"#,
            "\n",
        ));
        assert_eq!(report.skipped, 0);
        assert_eq!(
            report.records,
            vec![Quote {
                quote: r#""Hello", Newman"#.to_string(),
                author: "Jerry".to_string(),
                season: 3,
                episode: 10,
            }]
        );
    }

    #[test]
    fn test_normalize_strips_exactly_one_outer_pair() {
        assert_eq!(normalize_quote("\"hello\""), "hello");
        assert_eq!(normalize_quote("  \"hello\"  "), "hello");
        assert_eq!(normalize_quote("\"\"hello\"\""), "\"hello\"");
        // A lone quote character is not a pair and survives untouched.
        assert_eq!(normalize_quote("\""), "\"");
        assert_eq!(normalize_quote("plain"), "plain");
    }

    #[test]
    fn test_header_only_yields_empty() {
        let report = parse("quote,author,season,episode\n");
        assert_eq!(report.records, vec![]);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_missing_file_errors() {
        let result = read_quotes(Path::new("/nonexistent/quotes.csv"));
        assert!(matches!(result, Err(IngestError::Io(_))));
    }

    #[test]
    fn test_reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        std::fs::write(&path, "quote,author,season,episode\nGiddy up!,Kramer,6,14\n").unwrap();

        let report = read_quotes(&path).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].quote, "Giddy up!");
    }
}
