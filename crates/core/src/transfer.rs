//! CSV export and import of anchors.
//!
//! Files have a `Key,Value` header row followed by one row per anchor. Ids
//! are never exported; the importing store assigns its own.

use std::fmt::{Display, Formatter};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use log::{debug, warn};

use crate::anchor::Anchor;
use crate::error::{Error, Result};
use crate::file_handling::get_reader;

const CSV_HEADER: [&str; 2] = ["Key", "Value"];

/// Path of the export file for `date` inside `directory`:
/// `<directory>/anchor-YYYY-MM-DD.csv`.
#[must_use]
pub fn export_path(directory: &str, date: NaiveDate) -> PathBuf {
    Path::new(directory).join(format!("anchor-{}.csv", date.format("%Y-%m-%d")))
}

/// Writes the header and one row per anchor to `writer`.
///
/// # Errors
///
/// Returns an error if a row cannot be written or the output cannot be
/// flushed. `destination` is only used in error messages.
pub fn write_csv<W: Write>(writer: W, anchors: &[Anchor], destination: &str) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| Error::csv_error(destination.to_string(), e))?;

    for anchor in anchors {
        csv_writer
            .write_record([&anchor.key, &anchor.value])
            .map_err(|e| Error::csv_error(destination.to_string(), e))?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io_error("CSV export".to_string(), destination.to_string(), e))
}

/// Reads anchors from CSV, skipping the header row and any row with fewer
/// than two fields.
///
/// # Errors
///
/// Returns an error if the CSV is malformed, or [`Error::EmptyImport`] if no
/// usable row was found.
pub fn read_csv<R: Read>(reader: R, source_name: &str) -> Result<Vec<Anchor>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut anchors = Vec::new();

    for record in csv_reader.records() {
        let record = record.map_err(|e| Error::csv_error(source_name.to_string(), e))?;

        if record.len() < 2 {
            warn!("Skipping CSV row with {} field(s) from {source_name}", record.len());
            continue;
        }

        anchors.push(Anchor::new(&record[0], &record[1]));
    }

    if anchors.is_empty() {
        return Err(Error::EmptyImport(source_name.to_string()));
    }

    debug!("Read {} anchor(s) from {source_name}", anchors.len());
    Ok(anchors)
}

/// Where an import reads its CSV from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    File(String),
    Url(String),
}

impl ImportSource {
    /// Picks the file path when given, otherwise the URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingImportSource`] if neither is given.
    pub fn from_options(path: Option<String>, url: Option<String>) -> Result<Self> {
        match (path, url) {
            (Some(path), _) if !path.is_empty() => Ok(Self::File(path)),
            (_, Some(url)) if !url.is_empty() => Ok(Self::Url(url)),
            _ => Err(Error::MissingImportSource),
        }
    }

    /// Reads and parses the CSV behind this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the request fails or
    /// does not answer with `200 OK`, or the CSV has no usable rows.
    pub fn read_anchors(&self) -> Result<Vec<Anchor>> {
        match self {
            Self::File(path) => {
                let reader = get_reader("CSV file", path)?;
                read_csv(reader, &self.to_string())
            }
            Self::Url(url) => read_csv(fetch(url)?, &self.to_string()),
        }
    }
}

impl Display for ImportSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(formatter, "`{path}`"),
            Self::Url(url) => write!(formatter, "<{url}>"),
        }
    }
}

fn fetch(url: &str) -> Result<impl Read + Send> {
    debug!("Fetching CSV from {url}");

    match ureq::get(url).call() {
        Ok(response) => Ok(response.into_reader()),
        Err(ureq::Error::Status(code, response)) => Err(Error::Http {
            url: url.to_string(),
            reason: format!("status {code} {}", response.status_text()),
        }),
        Err(ureq::Error::Transport(transport)) => Err(Error::Http {
            url: url.to_string(),
            reason: transport.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_path() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let path = export_path("/tmp/exports", date);
        assert_eq!(path, PathBuf::from("/tmp/exports/anchor-2024-03-09.csv"));
    }

    #[test]
    fn test_write_csv_quotes_when_needed() {
        let anchors = vec![
            Anchor::new("gh", "https://github.com/$1"),
            Anchor::new("greeting", "hello, world"),
        ];

        let mut output = Vec::new();
        write_csv(&mut output, &anchors, "memory").unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Key,Value\ngh,https://github.com/$1\ngreeting,\"hello, world\"\n"
        );
    }

    #[test]
    fn test_write_csv_with_no_anchors_has_header() {
        let mut output = Vec::new();
        write_csv(&mut output, &[], "memory").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Key,Value\n");
    }

    #[test]
    fn test_read_csv_skips_header_and_short_rows() {
        let csv = "Key,Value\nhello,world\nlonely\nahoj,ciao,extra\n";
        let anchors = read_csv(csv.as_bytes(), "memory").unwrap();

        assert_eq!(
            anchors,
            vec![Anchor::new("hello", "world"), Anchor::new("ahoj", "ciao")]
        );
    }

    #[test]
    fn test_read_csv_header_only_is_empty_import() {
        let error = read_csv("Key,Value\n".as_bytes(), "memory").unwrap_err();
        assert!(matches!(error, Error::EmptyImport(source) if source == "memory"));
    }

    #[test]
    fn test_written_csv_reads_back() {
        let anchors = vec![
            Anchor::new("quote", "say \"hi\""),
            Anchor::new("multi", "line one\nline two"),
        ];

        let mut output = Vec::new();
        write_csv(&mut output, &anchors, "memory").unwrap();

        let read_back = read_csv(output.as_slice(), "memory").unwrap();
        assert_eq!(read_back, anchors);
    }

    #[test]
    fn test_import_source_prefers_path() {
        let source =
            ImportSource::from_options(Some("a.csv".to_string()), Some("https://x".to_string()))
                .unwrap();
        assert_eq!(source, ImportSource::File("a.csv".to_string()));

        let source = ImportSource::from_options(None, Some("https://x".to_string())).unwrap();
        assert_eq!(source, ImportSource::Url("https://x".to_string()));
    }

    #[test]
    fn test_import_source_requires_one_option() {
        let result = ImportSource::from_options(None, None);
        assert!(matches!(result, Err(Error::MissingImportSource)));

        let result = ImportSource::from_options(Some(String::new()), Some(String::new()));
        assert!(matches!(result, Err(Error::MissingImportSource)));
    }

    #[test]
    fn test_import_from_missing_file() {
        let source = ImportSource::File("/definitely/not/here.csv".to_string());
        assert!(matches!(source.read_anchors(), Err(Error::Io { .. })));
    }
}
