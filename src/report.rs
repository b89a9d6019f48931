//! Scan report and export functionality

use crate::scan::ScanSummary;
use crate::utils::LongestWord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Complete scan report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Summary statistics
    pub summary: ReportSummary,
    /// Typeable words in input order
    pub matches: Vec<String>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report generation timestamp
    pub generated_at: String,
    /// Application version
    pub version: String,
    /// Word list that was scanned
    pub source: String,
    /// Scan duration in seconds
    pub duration_secs: f64,
}

/// Scan summary statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_words: u64,
    pub typeable_words: u64,
    pub skipped_words: u64,
    pub longest_word: Option<WordEntry>,
    pub longest_typeable: Option<WordEntry>,
}

/// A word with its letter count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub len: usize,
}

impl ScanReport {
    /// Create a report from a finished scan
    pub fn new(source: &Path, summary: &ScanSummary) -> Self {
        let now: DateTime<Utc> = Utc::now();
        let entry = |longest: &LongestWord| {
            longest.word().map(|word| WordEntry {
                word: word.to_string(),
                len: longest.len(),
            })
        };

        Self {
            metadata: ReportMetadata {
                generated_at: now.to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                source: source.display().to_string(),
                duration_secs: summary.elapsed.as_secs_f64(),
            },
            summary: ReportSummary {
                total_words: summary.total_words,
                typeable_words: summary.typeable_words,
                skipped_words: summary.skipped_words,
                longest_word: entry(&summary.longest_word),
                longest_typeable: entry(&summary.longest_typeable),
            },
            matches: summary.matches.clone(),
        }
    }

    /// Export report to JSON file
    pub fn export_json(&self, path: &Path) -> std::io::Result<()> {
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Export report to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{ScanOptions, Scanner};
    use std::io::Cursor;

    fn scanned(input: &str) -> ScanSummary {
        Scanner::qwerty(ScanOptions::default())
            .scan_reader(Cursor::new(input), |_| {})
            .unwrap()
    }

    #[test]
    fn report_copies_summary() {
        let report = ScanReport::new(Path::new("words.txt"), &scanned("desert\nhello\nasdf\n"));
        assert_eq!(report.metadata.source, "words.txt");
        assert_eq!(report.metadata.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.summary.total_words, 3);
        assert_eq!(report.summary.typeable_words, 2);
        assert_eq!(
            report.summary.longest_typeable,
            Some(WordEntry { word: "DESERT".to_string(), len: 6 })
        );
        assert_eq!(report.matches, vec!["DESERT", "ASDF"]);
    }

    #[test]
    fn empty_scan_has_no_longest_words() {
        let report = ScanReport::new(Path::new("empty"), &scanned(""));
        assert!(report.summary.longest_word.is_none());
        assert!(report.summary.longest_typeable.is_none());
    }

    #[test]
    fn json_has_expected_sections() {
        let report = ScanReport::new(Path::new("words.txt"), &scanned("we\n"));
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["typeable_words"], 1);
        assert_eq!(value["summary"]["longest_word"]["word"], "WE");
        assert_eq!(value["matches"][0], "WE");
        assert!(value["metadata"]["generated_at"].is_string());
    }

    #[test]
    fn export_writes_file() {
        let path = std::env::temp_dir().join(format!("qwerty-walk-report-{}.json", std::process::id()));
        let report = ScanReport::new(Path::new("words.txt"), &scanned("asdf\n"));
        report.export_json(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"ASDF\""));
        let _ = std::fs::remove_file(&path);
    }
}
