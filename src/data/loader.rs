use std::fs::File;
use std::path::{Path, PathBuf};

use super::columns::resolve_fields;
use super::error::{PriceError, Result};
use super::model::Entry;
use super::record::parse_fields;

/// File-name fragment that marks a file as a price list.
pub const DEFAULT_PATTERN: &str = "price";

// ---------------------------------------------------------------------------
// Scan results
// ---------------------------------------------------------------------------

/// Counters produced by a directory scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Files whose header resolved and whose body was read to the end.
    pub files_processed: usize,
    /// Non-blank data lines read from processed files, valid or not.
    pub lines_processed: usize,
    /// Matching files dropped because of a missing column or an I/O failure.
    pub files_skipped: usize,
    /// Data lines dropped as malformed or zero-weight.
    pub rows_skipped: usize,
}

/// Entries plus counters from scanning a directory.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub entries: Vec<Entry>,
    pub report: ScanReport,
}

/// Entries and counters for a single file.
#[derive(Debug, Clone, Default)]
pub struct FileScan {
    pub entries: Vec<Entry>,
    pub lines: usize,
    pub rows_skipped: usize,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Directory containing the running executable, used when no scan directory is given.
pub fn default_scan_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|source| PriceError::FileAccess {
        path: PathBuf::from("."),
        source,
    })?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Matching files found in a directory listing.
#[derive(Debug, Clone, Default)]
pub struct DirListing {
    /// Regular files whose name contains the pattern, sorted by name.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be read.
    pub unreadable: usize,
}

/// List regular files in `dir` whose name contains `pattern` (case-sensitive).
///
/// Only failing to open the directory is an error; an entry that cannot be
/// read is logged and counted in [`DirListing::unreadable`].
pub fn matching_files(dir: &Path, pattern: &str) -> Result<DirListing> {
    let entries = std::fs::read_dir(dir).map_err(|source| PriceError::FileAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut listing = DirListing::default();
    for item in entries {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                listing.unreadable += 1;
                continue;
            }
        };
        let path = item.path();
        let matches = item.file_name().to_string_lossy().contains(pattern);
        if matches && path.is_file() {
            listing.files.push(path);
        }
    }
    listing.files.sort();
    Ok(listing)
}

/// Scan every matching file in `dir` and collect its entries.
///
/// A file that cannot be opened or whose header lacks a price/weight column is
/// skipped and counted; bad rows are skipped and counted. Only failing to list
/// `dir` itself is returned as an error.
pub fn scan_dir(dir: &Path, pattern: &str) -> Result<ScanOutcome> {
    let listing = matching_files(dir, pattern)?;
    let mut outcome = ScanOutcome::default();
    outcome.report.files_skipped = listing.unreadable;

    for path in listing.files {
        match load_file(&path) {
            Ok(scan) => {
                outcome.report.files_processed += 1;
                outcome.report.lines_processed += scan.lines;
                outcome.report.rows_skipped += scan.rows_skipped;
                outcome.entries.extend(scan.entries);
            }
            Err(e) => {
                log::warn!("Skipping file: {e}");
                outcome.report.files_skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Read one price file: header first, then every data line.
///
/// Lines are split on a bare `,`; quotes carry no meaning.
pub fn load_file(path: &Path) -> Result<FileScan> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    log::info!("Reading file {file_name}");

    let access = |source| PriceError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(access)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);
    let mut records = reader.records();

    // The reader drops blank lines, so a record that does not start on line 1
    // means the header line itself was blank.
    let header = match records.next() {
        Some(Ok(record)) if record.position().map_or(true, |p| p.line() == 1) => record,
        Some(Ok(_)) => csv::StringRecord::new(),
        Some(Err(e)) if e.is_io_error() => return Err(access(e.into())),
        Some(Err(e)) => {
            return Err(PriceError::MalformedRecord {
                file: file_name,
                row: 1,
                reason: format!("unreadable header: {e}"),
            })
        }
        None => csv::StringRecord::new(),
    };
    let columns = resolve_fields(header.iter(), &file_name)?;
    if columns.product.is_none() {
        log::warn!("{file_name}: header has no product column, every row will be rejected");
    }

    let mut scan = FileScan::default();
    for (idx, result) in records.enumerate() {
        // Header is line 1.
        let fallback_row = idx + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(access(e.into())),
            Err(e) => {
                let row = e
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_row);
                log::warn!("{file_name}, row {row}: {e}");
                scan.lines += 1;
                scan.rows_skipped += 1;
                continue;
            }
        };

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        scan.lines += 1;

        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(fallback_row);
        let fields: Vec<&str> = record.iter().collect();
        match parse_fields(&fields, &columns, &file_name, row) {
            Ok(entry) => scan.entries.push(entry),
            Err(e) => {
                log::warn!("Skipping row: {e}");
                scan.rows_skipped += 1;
            }
        }
    }

    log::debug!(
        "{file_name}: {} entries, {} rows skipped",
        scan.entries.len(),
        scan.rows_skipped
    );
    Ok(scan)
}
