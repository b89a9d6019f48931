use std::path::PathBuf;

use clap::Parser;

use qwerty_walk::config::Config;
use qwerty_walk::output::OutputFormat;
use qwerty_walk::scan::ScanOptions;

/// Find words that can be typed moving only between adjacent QWERTY keys
#[derive(Parser, Debug)]
#[command(name = "qwerty-walk", version, about)]
pub struct Cli {
    /// Word list to scan, one word per line [default: /usr/share/dict/words]
    pub wordlist: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored statistics.
    #[arg(long)]
    pub no_color: bool,

    /// Print only the statistics, not every matching word.
    #[arg(short, long)]
    pub quiet: bool,

    /// Validate words containing non-letters instead of skipping them.
    #[arg(long)]
    pub all_symbols: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long, env = "QWERTY_WALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write a JSON report to this file.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Log where each rejected word breaks the walk (needs RUST_LOG=debug).
    #[arg(long)]
    pub explain: bool,
}

impl Cli {
    /// Override config values with the flags given on the command line
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.wordlist {
            config.scan.dictionary = path.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.no_color {
            config.output.color = false;
        }
        if self.quiet {
            config.output.list_matches = false;
        }
        if self.all_symbols {
            config.scan.letters_only = false;
        }
    }

    /// Scanner options for `config`; a report file needs the match list
    pub fn scan_options(&self, config: &Config) -> ScanOptions {
        let mut options = config.scan_options();
        options.explain = self.explain;
        options.collect_matches |= self.report.is_some();
        options
    }
}
