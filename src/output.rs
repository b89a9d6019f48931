//! Console rendering of scan results

use crate::report::ScanReport;
use crate::scan::ScanSummary;
use clap::ValueEnum;
use crossterm::style::{style, Color, Stylize};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::{self, Write};

/// Output format for scan results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Matching words followed by colored statistics
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Colors for the two statistic groups
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Whole-dictionary statistics and timing
    pub dictionary: Option<(Color, bool)>,
    /// Typeable-word statistics
    pub matches: Option<(Color, bool)>,
}

impl Palette {
    /// Bold red for the dictionary, green for matches
    pub fn colored() -> Self {
        Self {
            dictionary: Some((Color::Red, true)),
            matches: Some((Color::Green, false)),
        }
    }

    pub fn plain() -> Self {
        Self {
            dictionary: None,
            matches: None,
        }
    }

    pub fn new(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

fn paint(value: impl Display, spec: Option<(Color, bool)>) -> String {
    match spec {
        Some((color, true)) => style(value).with(color).bold().to_string(),
        Some((color, false)) => style(value).with(color).to_string(),
        None => value.to_string(),
    }
}

/// Statistics block printed after the matching words
pub fn render_summary(summary: &ScanSummary, palette: Palette) -> String {
    let dict = palette.dictionary;
    let hit = palette.matches;
    let mut lines = Vec::new();

    lines.push(format!(
        "Number of words in the dictionary: {}",
        paint(summary.total_words, dict)
    ));
    if let Some(word) = summary.longest_word.word() {
        lines.push(format!(
            "Max word length in the dictionary: {}",
            paint(summary.longest_word.len(), dict)
        ));
        lines.push(format!("Max word in the dictionary: {}", paint(word, dict)));
    }

    lines.push(format!(
        "Number of searched word: {}",
        paint(summary.typeable_words, hit)
    ));
    if let Some(word) = summary.longest_typeable.word() {
        lines.push(format!(
            "Max length of the searched word: {}",
            paint(summary.longest_typeable.len(), hit)
        ));
        lines.push(format!("Max length searched word: {}", paint(word, hit)));
    }

    if summary.skipped_words > 0 {
        lines.push(format!(
            "Skipped non-letter words: {}",
            paint(summary.skipped_words, dict)
        ));
    }

    lines.push(format!(
        "Time: {} s",
        paint(format!("{:.6}", summary.elapsed.as_secs_f64()), dict)
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Write the statistics block as text
pub fn write_summary<W: Write>(out: &mut W, summary: &ScanSummary, palette: Palette) -> io::Result<()> {
    out.write_all(render_summary(summary, palette).as_bytes())
}

/// Write the full report as pretty-printed JSON
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    let json = report
        .to_json()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(out, "{}", json)
}
