use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Entry – one normalised price-list row
// ---------------------------------------------------------------------------

/// One product row with its computed price per unit of weight.
///
/// Entries are immutable once built; the catalog orders them by
/// `(ratio, product_name, price, weight, source_file)`.
#[derive(Debug, Clone)]
pub struct Entry {
    ratio: f64,
    product_name: String,
    price: i64,
    weight: i64,
    source_file: String,
}

impl Entry {
    /// Build an entry, normalising the name and computing the ratio.
    ///
    /// Returns `None` when `weight` is zero.
    pub fn new(product_name: &str, price: i64, weight: i64, source_file: &str) -> Option<Self> {
        if weight == 0 {
            return None;
        }
        Some(Entry {
            ratio: round_cents(price as f64 / weight as f64),
            product_name: product_name.trim().to_lowercase(),
            price,
            weight,
            source_file: source_file.to_string(),
        })
    }

    /// Price divided by weight, rounded to two decimals.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Trimmed, lower-cased product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Name of the file the row came from.
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Display width of the product name, in characters.
    pub fn name_width(&self) -> usize {
        self.product_name.chars().count()
    }
}

/// Round to two decimals. An exact half cent goes to the even neighbour,
/// so 0.125 becomes 0.12 and 0.625 becomes 0.62.
fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        scaled.round_ties_even()
    } else {
        scaled.round()
    };
    rounded / 100.0
}

// -- Manual Eq/Ord: the ratio is a float, compared with `total_cmp` --

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ratio
            .total_cmp(&other.ratio)
            .then_with(|| self.product_name.cmp(&other.product_name))
            .then_with(|| self.price.cmp(&other.price))
            .then_with(|| self.weight.cmp(&other.weight))
            .then_with(|| self.source_file.cmp(&other.source_file))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {} = {:.2} ({})",
            self.product_name, self.price, self.weight, self.ratio, self.source_file
        )
    }
}

// ---------------------------------------------------------------------------
// ColumnMap – per-file column positions
// ---------------------------------------------------------------------------

/// Column indices resolved from one file's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// `None` when the header has no product-name column.
    pub product: Option<usize>,
    pub price: usize,
    pub weight: usize,
}

impl ColumnMap {
    /// Minimum number of fields a data row needs to cover every resolved column.
    pub fn required_fields(&self) -> usize {
        self.product
            .unwrap_or(0)
            .max(self.price)
            .max(self.weight)
            + 1
    }
}
