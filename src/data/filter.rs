use super::model::Entry;

// ---------------------------------------------------------------------------
// Query predicates over entries
// ---------------------------------------------------------------------------

/// Inclusive price-per-unit window. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RatioRange {
    pub fn new(min: f64, max: f64) -> Self {
        RatioRange {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, ratio: f64) -> bool {
        self.min.map_or(true, |min| min <= ratio) && self.max.map_or(true, |max| ratio <= max)
    }
}

/// Lower-cased needle for a product-name search.
pub fn search_needle(text: &str) -> String {
    text.to_lowercase()
}

/// Whether `entry` matches an already lower-cased needle. An empty needle matches all.
pub fn matches_name(entry: &Entry, needle: &str) -> bool {
    entry.product_name().contains(needle)
}

/// Entries that match `text`, case-insensitively, in ascending order.
pub fn search<'a>(entries: &'a [Entry], text: &str) -> Vec<&'a Entry> {
    let needle = search_needle(text);
    let mut found: Vec<&Entry> = entries
        .iter()
        .filter(|entry| matches_name(entry, &needle))
        .collect();
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, price: i64, weight: i64) -> Entry {
        Entry::new(name, price, weight, "price.csv").unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = RatioRange::new(25.0, 50.0);
        assert!(range.contains(25.0));
        assert!(range.contains(50.0));
        assert!(!range.contains(24.99));
        assert!(!range.contains(50.01));
    }

    #[test]
    fn test_open_bounds() {
        let below = RatioRange { min: None, max: Some(10.0) };
        assert!(below.contains(-5.0));
        assert!(!below.contains(10.5));
        assert!(RatioRange::default().is_unbounded());
        assert!(RatioRange::default().contains(f64::MAX));
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorted() {
        let entries = vec![
            entry("Яблоко зелёное", 300, 2),
            entry("Груша", 100, 1),
            entry("яблоко красное", 100, 2),
        ];
        let found = search(&entries, "ЯБЛОКО");
        let names: Vec<_> = found.iter().map(|e| e.product_name()).collect();
        assert_eq!(names, vec!["яблоко красное", "яблоко зелёное"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let entries = vec![entry("груша", 100, 1), entry("слива", 10, 1)];
        assert_eq!(search(&entries, "").len(), 2);
    }
}
