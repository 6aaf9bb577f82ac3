//! Fixed-width console table for search results.

use std::io::{self, Write};

use crate::data::model::Entry;

const NAME_HEADING: &str = "Name";

/// Write `entries` as a table, padding the name column to `name_width`
/// characters (or the heading, whichever is wider). Rows are numbered from 1.
pub fn write_table<W: Write>(out: &mut W, entries: &[&Entry], name_width: usize) -> io::Result<()> {
    let width = name_width.max(NAME_HEADING.chars().count());
    writeln!(
        out,
        "{:<4}  {:<width$} {:^5} {:^6} {:^12} {}",
        "No", NAME_HEADING, "Price", "Weight", "File", "Ratio per unit"
    )?;
    for (number, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:<4}  {:<width$} {:^5} {:^6} {:^12} {:.2}",
            number + 1,
            entry.product_name(),
            entry.price(),
            entry.weight(),
            entry.source_file(),
            entry.ratio()
        )?;
    }
    Ok(())
}
