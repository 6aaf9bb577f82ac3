use std::path::Path;

use crate::data::error::{PriceError, Result};
use crate::data::filter::{self, RatioRange};
use crate::data::loader::{self, ScanReport, DEFAULT_PATTERN};
use crate::data::model::Entry;
use crate::render::html::HtmlReport;

// ---------------------------------------------------------------------------
// Catalog – aggregated entries from every scanned price file
// ---------------------------------------------------------------------------

/// In-memory collection of all loaded entries.
///
/// After [`Catalog::load`] or [`Catalog::sort`] the entries are in ascending
/// `(ratio, name, price, weight, file)` order. [`Catalog::filter_by_ratio_range`]
/// is destructive: dropped entries only come back with another `load`.
/// There is no internal locking; callers sharing a catalog across threads
/// must synchronise access themselves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    /// Longest product name seen by the last load, in characters.
    name_width: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with every `*price*` file found in `dir`.
    pub fn load(&mut self, dir: &Path) -> Result<ScanReport> {
        self.load_matching(dir, DEFAULT_PATTERN)
    }

    /// Replace the contents with every file in `dir` whose name contains `pattern`.
    ///
    /// Previous state is discarded even when the directory cannot be listed.
    pub fn load_matching(&mut self, dir: &Path, pattern: &str) -> Result<ScanReport> {
        self.entries.clear();
        self.name_width = 0;

        let outcome = loader::scan_dir(dir, pattern)?;
        self.name_width = outcome
            .entries
            .iter()
            .map(Entry::name_width)
            .max()
            .unwrap_or(0);
        self.entries = outcome.entries;
        self.sort();

        let report = outcome.report;
        log::info!(
            "Processed {} files and {} lines ({} files, {} rows skipped)",
            report.files_processed,
            report.lines_processed,
            report.files_skipped,
            report.rows_skipped
        );
        Ok(report)
    }

    /// Restore ascending tuple order.
    pub fn sort(&mut self) {
        self.entries.sort();
    }

    /// Entries whose name contains `text`, ignoring case. Does not touch the catalog.
    pub fn search(&self, text: &str) -> Vec<&Entry> {
        filter::search(&self.entries, text)
    }

    /// Keep only entries with `min <= ratio <= max`. Returns how many were dropped.
    pub fn filter_by_ratio_range(&mut self, min: f64, max: f64) -> usize {
        self.retain_range(RatioRange::new(min, max))
    }

    /// Keep only entries inside `range`. Returns how many were dropped.
    pub fn retain_range(&mut self, range: RatioRange) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| range.contains(entry.ratio()));
        let dropped = before - self.entries.len();
        log::info!(
            "Ratio filter {:?}..={:?} kept {} entries, dropped {dropped}",
            range.min,
            range.max,
            self.entries.len()
        );
        dropped
    }

    /// Write the current order as an HTML table, overwriting `path`.
    /// Returns the number of data rows written.
    pub fn export_html(&self, path: &Path) -> Result<usize> {
        let html = HtmlReport::default().generate(&self.entries);
        log::info!("Exporting {} entries to {}", self.entries.len(), path.display());
        std::fs::write(path, html).map_err(|source| PriceError::MissingTargetFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.entries.len())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest product name from the last load, for console column padding.
    pub fn name_width(&self) -> usize {
        self.name_width
    }
}
