//! Delimiter and quote detection from a bounded prefix of the input.

use std::io::{self, BufRead, Seek, SeekFrom};

use serde::{Serialize, Serializer};

use crate::error::{Result, SamplesheetError};

/// Delimiters to try when auto-detecting, in tie-break order.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Delimiters tried only when none of the primary candidates qualifies.
const FALLBACK_DELIMITERS: &[u8] = &[b' ', b':'];

/// Quote characters to try, in tie-break order.
const QUOTES: &[u8] = &[b'"', b'\''];

/// Sniffer configuration.
#[derive(Debug, Clone)]
pub struct SnifferConfig {
    /// Number of lines read from the start of the input.
    pub sample_lines: usize,
    /// Candidate delimiters.
    pub delimiters: Vec<u8>,
    /// Lower-priority delimiters, considered only when no entry of
    /// `delimiters` splits the sample uniformly.
    pub fallback_delimiters: Vec<u8>,
    /// Candidate quote characters.
    pub quotes: Vec<u8>,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            sample_lines: 10,
            delimiters: DELIMITERS.to_vec(),
            fallback_delimiters: FALLBACK_DELIMITERS.to_vec(),
            quotes: QUOTES.to_vec(),
        }
    }
}

/// Delimiter and quoting convention of a delimited text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dialect {
    #[serde(serialize_with = "byte_as_char")]
    pub delimiter: u8,
    #[serde(serialize_with = "byte_as_char")]
    pub quote: u8,
    /// Spaces directly after a delimiter are not part of the next field.
    pub skip_initial_space: bool,
}

impl Dialect {
    pub fn new(delimiter: u8, quote: u8) -> Self {
        Self {
            delimiter,
            quote,
            skip_initial_space: false,
        }
    }

    /// A header name or field value as this dialect reads it.
    ///
    /// The csv reader only trims both ends, so leading spaces are dropped here.
    pub fn field<'a>(&self, raw: &'a str) -> &'a str {
        if self.skip_initial_space {
            raw.trim_start_matches(' ')
        } else {
            raw
        }
    }

    /// A CSV reader builder configured for this dialect.
    ///
    /// Records may be shorter or longer than the header.
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(true)
            .flexible(true);
        builder
    }

    /// Short format name derived from the delimiter.
    pub fn format_name(&self) -> &'static str {
        match self.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
    }
}

fn byte_as_char<S: Serializer>(byte: &u8, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_char(*byte as char)
}

/// Infers the [`Dialect`] of a delimited text stream.
#[derive(Debug, Clone, Default)]
pub struct FormatSniffer {
    config: SnifferConfig,
}

impl FormatSniffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SnifferConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnifferConfig {
        &self.config
    }

    /// Sniff the dialect of a stream and rewind it to where it started.
    pub fn sniff<R: BufRead + Seek>(&self, reader: &mut R) -> Result<Dialect> {
        let sample = self
            .read_sample(reader)
            .map_err(|e| SamplesheetError::Sniff(format!("could not read sample: {e}")))?;
        self.detect(&sample)
    }

    /// Read up to `sample_lines` lines, then seek back to the starting
    /// position so the caller can read the full stream.
    pub fn read_sample<R: BufRead + Seek>(&self, reader: &mut R) -> io::Result<Vec<u8>> {
        let start = reader.stream_position()?;
        let mut sample = Vec::new();
        for _ in 0..self.config.sample_lines {
            if reader.read_until(b'\n', &mut sample)? == 0 {
                break;
            }
        }
        reader.seek(SeekFrom::Start(start))?;
        Ok(sample)
    }

    /// Infer the dialect from a sample.
    ///
    /// A delimiter qualifies when it splits every sampled record into the
    /// same number of fields, and that number is at least two. Among
    /// qualifying delimiters the one producing the most fields wins; ties go
    /// to the earlier candidate. Fallback delimiters are only tried when no
    /// primary one qualifies.
    pub fn detect(&self, sample: &[u8]) -> Result<Dialect> {
        let sample = sample.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(sample);
        if sample.iter().all(u8::is_ascii_whitespace) {
            return Err(SamplesheetError::Sniff("no lines to analyze".to_string()));
        }

        let quote = self.guess_quote(sample);

        let delimiter = self
            .best_delimiter(sample, quote, &self.config.delimiters)
            .or_else(|| self.best_delimiter(sample, quote, &self.config.fallback_delimiters))
            .ok_or_else(|| SamplesheetError::Sniff("could not determine delimiter".to_string()))?;

        let header = sample.split(|&b| b == b'\n').next().unwrap_or_default();
        Ok(Dialect {
            delimiter,
            quote,
            skip_initial_space: spaces_follow_every_delimiter(header, delimiter),
        })
    }

    fn best_delimiter(&self, sample: &[u8], quote: u8, candidates: &[u8]) -> Option<u8> {
        let mut best: Option<(u8, usize)> = None;
        for &delimiter in candidates {
            let Some(fields) = uniform_field_count(sample, delimiter, quote) else {
                continue;
            };
            if fields < 2 {
                continue;
            }
            if best.is_none_or(|(_, best_fields)| fields > best_fields) {
                best = Some((delimiter, fields));
            }
        }
        best.map(|(delimiter, _)| delimiter)
    }

    /// Pick the quote character that most often opens a field.
    fn guess_quote(&self, sample: &[u8]) -> u8 {
        let default = self.config.quotes.first().copied().unwrap_or(b'"');
        let mut best = (default, 0usize);

        for &quote in &self.config.quotes {
            let mut opens = 0;
            let mut previous: Option<u8> = None;
            for &byte in sample {
                if byte == quote {
                    let at_field_start = match previous {
                        None => true,
                        Some(p) => p == b'\n' || self.config.delimiters.contains(&p),
                    };
                    if at_field_start {
                        opens += 1;
                    }
                }
                previous = Some(byte);
            }
            if opens > best.1 {
                best = (quote, opens);
            }
        }

        best.0
    }
}

/// True when the line has at least one delimiter and each one is followed
/// by a space.
fn spaces_follow_every_delimiter(line: &[u8], delimiter: u8) -> bool {
    let delimiters = line.iter().filter(|&&b| b == delimiter).count();
    let spaced = line
        .windows(2)
        .filter(|pair| pair[0] == delimiter && pair[1] == b' ')
        .count();
    delimiters > 0 && delimiters == spaced
}

/// Field count shared by every record in `sample`, if there is one.
fn uniform_field_count(sample: &[u8], delimiter: u8, quote: u8) -> Option<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quote(quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(sample);

    let mut count = None;
    for record in reader.records() {
        let fields = record.ok()?.len();
        match count {
            None => count = Some(fields),
            Some(c) if c != fields => return None,
            Some(_) => {}
        }
    }
    count
}
