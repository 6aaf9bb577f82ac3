use super::error::{PriceError, Result};
use super::model::{ColumnMap, Entry};

/// Parse one raw comma-delimited data line.
pub fn parse_line(line: &str, columns: &ColumnMap, file: &str, row: usize) -> Result<Entry> {
    let fields: Vec<&str> = line.split(',').collect();
    parse_fields(&fields, columns, file, row)
}

/// Turn the fields of one data row into an [`Entry`].
///
/// `row` is the 1-based line number inside `file`, used only for error reporting.
pub fn parse_fields(fields: &[&str], columns: &ColumnMap, file: &str, row: usize) -> Result<Entry> {
    let malformed = |reason: String| PriceError::MalformedRecord {
        file: file.to_string(),
        row,
        reason,
    };

    let product_idx = columns
        .product
        .ok_or_else(|| malformed("file has no product column".to_string()))?;

    if fields.len() < columns.required_fields() {
        return Err(malformed(format!(
            "expected at least {} fields, found {}",
            columns.required_fields(),
            fields.len()
        )));
    }

    let parse_int = |idx: usize, what: &str| -> Result<i64> {
        let raw = fields[idx].trim();
        raw.parse::<i64>()
            .map_err(|_| malformed(format!("{what} '{raw}' is not an integer")))
    };

    let price = parse_int(columns.price, "price")?;
    let weight = parse_int(columns.weight, "weight")?;

    Entry::new(fields[product_idx], price, weight, file).ok_or_else(|| {
        PriceError::DivisionByZero {
            file: file.to_string(),
            row,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: ColumnMap = ColumnMap { product: Some(0), price: 1, weight: 2 };

    #[test]
    fn test_parses_apple_row() {
        let entry = parse_line("Яблоко,100,2\n", &BASIC, "price1.csv", 2).unwrap();
        assert_eq!(entry.product_name(), "яблоко");
        assert_eq!(entry.price(), 100);
        assert_eq!(entry.weight(), 2);
        assert_eq!(entry.ratio(), 50.0);
        assert_eq!(entry.source_file(), "price1.csv");
    }

    #[test]
    fn test_reordered_columns() {
        let columns = ColumnMap { product: Some(2), price: 0, weight: 3 };
        let entry = parse_line(" 90 ,id-7, Груша ,3", &columns, "price2.csv", 5).unwrap();
        assert_eq!(entry.product_name(), "груша");
        assert_eq!(entry.ratio(), 30.0);
    }

    #[test]
    fn test_short_row_is_malformed() {
        let err = parse_line("Яблоко,100", &BASIC, "price1.csv", 3).unwrap_err();
        assert!(matches!(err, PriceError::MalformedRecord { row: 3, .. }));
    }

    #[test]
    fn test_non_integer_price_is_malformed() {
        let err = parse_line("Яблоко,10.5,2", &BASIC, "price1.csv", 4).unwrap_err();
        assert!(matches!(err, PriceError::MalformedRecord { .. }));
        assert!(err.to_string().contains("10.5"));
    }

    #[test]
    fn test_zero_weight() {
        let err = parse_line("Яблоко,100,0", &BASIC, "price1.csv", 6).unwrap_err();
        assert!(matches!(err, PriceError::DivisionByZero { row: 6, .. }));
    }

    #[test]
    fn test_absent_product_column_fails_typed() {
        let columns = ColumnMap { product: None, price: 0, weight: 1 };
        let err = parse_line("100,2", &columns, "price1.csv", 2).unwrap_err();
        assert!(matches!(err, PriceError::MalformedRecord { .. }));
    }
}
