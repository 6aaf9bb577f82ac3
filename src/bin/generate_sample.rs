use std::path::PathBuf;

/// Header layouts the scanner has to cope with: reordered columns, different
/// synonyms, mixed case, extra columns and a file without a weight column.
const LAYOUTS: &[(&str, &str)] = &[
    ("price_0.csv", "товар,цена,вес"),
    ("price_1.csv", "Фасовка,Наименование,Розница,Артикул"),
    ("price_2.csv", "№,продукт,масса,цена"),
    ("price_3.csv", "название,розница"),
];

const PRODUCTS: &[&str] = &[
    "Яблоко", "Груша", "Слива", "Вишня", "Картофель", "Морковь", "Капуста", "Лук",
    "Говядина", "Свинина", "Курица", "Сыр твёрдый", "Масло сливочное", "Гречка",
];

/// Minimal deterministic linear congruential generator.
struct Lcg(u64);

impl Lcg {
    fn next_in(&mut self, low: u64, high: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        low + (self.0 >> 33) % (high - low + 1)
    }
}

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    let mut rng = Lcg(42);
    let mut rows_written = 0;

    for (file_name, header) in LAYOUTS {
        let columns: Vec<String> = header.split(',').map(str::to_lowercase).collect();
        let mut body = format!("{header}\n");

        for (n, product) in PRODUCTS.iter().enumerate() {
            if rng.next_in(0, 3) == 0 {
                continue;
            }
            let price = rng.next_in(30, 1500);
            let weight = rng.next_in(1, 5);
            let cells: Vec<String> = columns
                .iter()
                .map(|column| match column.as_str() {
                    "товар" | "наименование" | "продукт" | "название" => product.to_string(),
                    "цена" | "розница" => price.to_string(),
                    "вес" | "фасовка" | "масса" => weight.to_string(),
                    _ => format!("{}", n + 1),
                })
                .collect();
            body.push_str(&cells.join(","));
            body.push('\n');
            rows_written += 1;
        }

        let path = out_dir.join(file_name);
        std::fs::write(&path, body).expect("Failed to write price file");
    }

    println!(
        "Wrote {} price files ({rows_written} rows) to {}",
        LAYOUTS.len(),
        out_dir.display()
    );
}
