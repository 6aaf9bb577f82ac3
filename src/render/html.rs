//! HTML table export.

use crate::data::model::Entry;

/// Column headings of the exported table, in output order.
pub const HEADINGS: [&str; 6] = ["Number", "Name", "Price", "Weight", "File", "Ratio per unit"];

/// Renders catalog entries as a standalone HTML document.
pub struct HtmlReport {
    pub title: String,
}

impl Default for HtmlReport {
    fn default() -> Self {
        HtmlReport {
            title: "Product positions".to_string(),
        }
    }
}

impl HtmlReport {
    /// One header row plus one row per entry, in the order given. Rows are numbered from 1.
    pub fn generate(&self, entries: &[Entry]) -> String {
        let mut html = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<table>\n<thead>\n<tr>",
            escape(&self.title)
        );
        for heading in HEADINGS {
            html.push_str(&format!("<th>{heading}</th>"));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for (number, entry) in entries.iter().enumerate() {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>\n",
                number + 1,
                escape(entry.product_name()),
                entry.price(),
                entry.weight(),
                escape(entry.source_file()),
                entry.ratio()
            ));
        }

        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        html
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_numbered_in_order() {
        let entries = vec![
            Entry::new("капуста", 100, 5, "price2.csv").unwrap(),
            Entry::new("яблоко", 100, 2, "price1.csv").unwrap(),
        ];
        let html = HtmlReport::default().generate(&entries);

        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<tr><td>1</td><td>капуста</td><td>100</td><td>5</td><td>price2.csv</td><td>20.00</td></tr>"));
        assert!(html.contains("<tr><td>2</td><td>яблоко</td>"));
        assert!(html.contains("<th>Ratio per unit</th>"));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let entries = vec![Entry::new("соль <крупная> & йод", 20, 1, "price.csv").unwrap()];
        let html = HtmlReport::default().generate(&entries);
        assert!(html.contains("соль &lt;крупная&gt; &amp; йод"));
    }
}
