use super::error::{PriceError, Result};
use super::model::ColumnMap;

// ---------------------------------------------------------------------------
// Header synonyms
// ---------------------------------------------------------------------------

/// Header names accepted for the product-name column.
pub const PRODUCT_SYNONYMS: &[&str] = &["товар", "название", "наименование", "продукт"];

/// Header names accepted for the price column.
pub const PRICE_SYNONYMS: &[&str] = &["розница", "цена"];

/// Header names accepted for the weight column.
pub const WEIGHT_SYNONYMS: &[&str] = &["вес", "масса", "фасовка"];

/// Resolve column positions from a raw comma-delimited header line.
pub fn resolve_header(line: &str, file: &str) -> Result<ColumnMap> {
    resolve_fields(line.split(','), file)
}

/// Resolve column positions from already split header fields.
///
/// Tokens are trimmed and lower-cased. Scanning runs left to right and a later
/// match overwrites an earlier one, so the *last* synonym of each kind wins.
/// A missing product column is allowed; missing price or weight is not.
pub fn resolve_fields<'a, I>(fields: I, file: &str) -> Result<ColumnMap>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut product = None;
    let mut price = None;
    let mut weight = None;

    for (idx, raw) in fields.into_iter().enumerate() {
        let token = raw.trim_start_matches('\u{feff}').trim().to_lowercase();
        if PRODUCT_SYNONYMS.contains(&token.as_str()) {
            product = Some(idx);
        }
        if PRICE_SYNONYMS.contains(&token.as_str()) {
            price = Some(idx);
        }
        if WEIGHT_SYNONYMS.contains(&token.as_str()) {
            weight = Some(idx);
        }
    }

    let missing = |column| PriceError::MissingColumn {
        file: file.to_string(),
        column,
    };

    Ok(ColumnMap {
        product,
        price: price.ok_or_else(|| missing("price"))?,
        weight: weight.ok_or_else(|| missing("weight"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_basic_header() {
        let map = resolve_header("товар,цена,вес\n", "price1.csv").unwrap();
        assert_eq!(map, ColumnMap { product: Some(0), price: 1, weight: 2 });
    }

    #[test]
    fn test_header_is_case_and_space_insensitive() {
        let map = resolve_header(" Фасовка , НАИМЕНОВАНИЕ,артикул,Розница", "p.csv").unwrap();
        assert_eq!(map, ColumnMap { product: Some(1), price: 3, weight: 0 });
    }

    #[test]
    fn test_last_synonym_wins() {
        let map = resolve_header("товар,цена,название,розница,вес,масса", "p.csv").unwrap();
        assert_eq!(map.product, Some(2));
        assert_eq!(map.price, 3);
        assert_eq!(map.weight, 5);
    }

    #[test]
    fn test_missing_product_is_not_an_error() {
        let map = resolve_header("код,цена,вес", "p.csv").unwrap();
        assert_eq!(map.product, None);
    }

    #[test]
    fn test_missing_price_or_weight_fails() {
        let err = resolve_header("товар,вес", "p.csv").unwrap_err();
        assert!(matches!(err, PriceError::MissingColumn { column: "price", .. }));

        let err = resolve_header("товар,цена", "p.csv").unwrap_err();
        assert!(matches!(err, PriceError::MissingColumn { column: "weight", .. }));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let map = resolve_header("\u{feff}товар,цена,вес", "p.csv").unwrap();
        assert_eq!(map.product, Some(0));
    }
}
