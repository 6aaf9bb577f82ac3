use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::RatioRange;
use crate::data::loader::DEFAULT_PATTERN;

/// Aggregate price lists from a directory and search them by product name.
#[derive(Parser, Debug, Clone)]
#[command(name = "price-machine")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory to scan. Defaults to the directory of the executable.
    pub dir: Option<PathBuf>,

    /// Case-sensitive file-name fragment that marks a price list.
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// HTML export destination, overwritten on exit.
    #[arg(short, long, default_value = "output.html")]
    pub output: PathBuf,

    /// Drop entries with a price per unit below this value after loading.
    #[arg(long)]
    pub min_ratio: Option<f64>,

    /// Drop entries with a price per unit above this value after loading.
    #[arg(long)]
    pub max_ratio: Option<f64>,

    /// Run these searches and exit instead of prompting. Repeatable.
    #[arg(short, long = "query")]
    pub queries: Vec<String>,

    /// Skip the HTML export.
    #[arg(long, default_value_t = false)]
    pub no_export: bool,
}

impl Config {
    /// The ratio window from `--min-ratio` / `--max-ratio`.
    pub fn ratio_range(&self) -> RatioRange {
        RatioRange {
            min: self.min_ratio,
            max: self.max_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["price-machine"]).unwrap();
        assert_eq!(config.dir, None);
        assert_eq!(config.pattern, "price");
        assert_eq!(config.output, PathBuf::from("output.html"));
        assert!(config.ratio_range().is_unbounded());
        assert!(config.queries.is_empty());
        assert!(!config.no_export);
    }

    #[test]
    fn test_full_command_line() {
        let config = Config::try_parse_from([
            "price-machine",
            "/tmp/prices",
            "--min-ratio",
            "25",
            "--query",
            "яблоко",
            "-q",
            "груша",
            "--no-export",
        ])
        .unwrap();
        assert_eq!(config.dir, Some(PathBuf::from("/tmp/prices")));
        assert_eq!(config.ratio_range(), RatioRange { min: Some(25.0), max: None });
        assert_eq!(config.queries, vec!["яблоко", "груша"]);
        assert!(config.no_export);
    }
}
