//! Word list scanning
//!
//! Reads a line-oriented word list, normalizes each entry and runs it
//! through the key-walk check, collecting the statistics reported at the
//! end of a run.

use crate::keyboard::{AdjacencyTable, QWERTY};
use crate::utils::LongestWord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors raised while reading a word source
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot open word source {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Scanner behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Count words containing anything besides letters as skipped. When
    /// off they are still read as rejections, never as matches.
    pub letters_only: bool,
    /// Keep every typeable word in the summary
    pub collect_matches: bool,
    /// Log where rejected words break the walk
    pub explain: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            letters_only: true,
            collect_matches: true,
            explain: false,
        }
    }
}

/// Statistics gathered over one word list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Non-blank lines read
    pub total_words: u64,
    /// Words that can be walked
    pub typeable_words: u64,
    /// Words rejected for containing non-letters
    pub skipped_words: u64,
    pub longest_word: LongestWord,
    pub longest_typeable: LongestWord,
    /// Typeable words in input order, when collected
    pub matches: Vec<String>,
    /// Wall-clock time spent scanning
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Normalize one raw line into the validator's domain.
///
/// Strips trailing whitespace (including `\r`) and uppercases ASCII letters.
/// Returns `None` for blank lines.
pub fn normalize(line: &str) -> Option<String> {
    let word = line.trim_end();
    if word.is_empty() {
        None
    } else {
        Some(word.to_ascii_uppercase())
    }
}

/// Feeds words from a source through an adjacency table
pub struct Scanner<'a> {
    table: &'a AdjacencyTable,
    options: ScanOptions,
}

impl Scanner<'static> {
    /// Scanner over the QWERTY layout
    pub fn qwerty(options: ScanOptions) -> Self {
        Self::new(&QWERTY, options)
    }
}

impl<'a> Scanner<'a> {
    pub fn new(table: &'a AdjacencyTable, options: ScanOptions) -> Self {
        Self { table, options }
    }

    /// Open `path` and scan it, calling `on_match` for each typeable word.
    pub fn scan_path<F>(&self, path: &Path, on_match: F) -> Result<ScanSummary, ScanError>
    where
        F: FnMut(&str),
    {
        let file = File::open(path).map_err(|source| ScanError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Scanning word list {}", path.display());
        self.scan_reader(BufReader::new(file), on_match)
    }

    /// Scan every line of `reader`, calling `on_match` for each typeable
    /// word as it is found.
    pub fn scan_reader<R, F>(&self, reader: R, mut on_match: F) -> Result<ScanSummary, ScanError>
    where
        R: BufRead,
        F: FnMut(&str),
    {
        let start = Instant::now();
        let mut summary = ScanSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ScanError::Read {
                line: index + 1,
                source,
            })?;
            let Some(word) = normalize(&line) else {
                continue;
            };

            summary.total_words += 1;
            summary.longest_word.offer(&word);

            let plain = word.bytes().all(|b| b.is_ascii_uppercase());
            if !plain && self.options.letters_only {
                log::trace!("Skipping {:?} on line {}: not a plain word", word, index + 1);
                summary.skipped_words += 1;
                continue;
            }

            // A lone non-letter has no pairs to break, so check the domain here
            let verdict = self.table.validate(&word);
            if plain && verdict.typeable {
                summary.typeable_words += 1;
                summary.longest_typeable.offer_with_len(&word, verdict.len);
                on_match(&word);
                if self.options.collect_matches {
                    summary.matches.push(word);
                }
            } else if !self.options.explain {
                continue;
            } else if !plain && verdict.typeable {
                log::debug!("{} is not a letter sequence", word);
            } else if let Some(i) = self.table.first_break(&word) {
                let mut pair = word.chars().skip(i);
                log::debug!(
                    "{} breaks at {}: {} -> {} is not a neighbor step",
                    word,
                    i,
                    pair.next().unwrap_or_default(),
                    pair.next().unwrap_or_default()
                );
            }
        }

        summary.elapsed = start.elapsed();
        log::debug!(
            "Scanned {} words ({} typeable, {} skipped) in {:?}",
            summary.total_words,
            summary.typeable_words,
            summary.skipped_words,
            summary.elapsed
        );
        Ok(summary)
    }
}
