use std::io::{self, BufRead, Write};

use crate::catalog::Catalog;
use crate::render::console;

/// Input line that ends the prompt loop.
pub const EXIT_COMMAND: &str = "exit";

const PROMPT: &str = "Type exit to quit or part of a product name to search:";

// ---------------------------------------------------------------------------
// Interactive search prompt
// ---------------------------------------------------------------------------

/// Read-loop that answers product-name searches against a [`Catalog`].
///
/// The catalog is owned by the caller; the prompt only borrows it per call.
pub struct SearchPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SearchPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt until `exit` or end of input. Returns the number of searches answered.
    pub fn run(&mut self, catalog: &Catalog) -> io::Result<usize> {
        let mut answered = 0;
        let mut line = String::new();
        loop {
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let command = line.trim_end_matches(['\n', '\r']);
            if command == EXIT_COMMAND {
                break;
            }
            self.answer(catalog, command)?;
            answered += 1;
        }
        Ok(answered)
    }

    /// Print the search results for one query.
    pub fn answer(&mut self, catalog: &Catalog, query: &str) -> io::Result<()> {
        let found = catalog.search(query);
        log::debug!("Query {query:?} matched {} entries", found.len());
        console::write_table(&mut self.output, &found, catalog.name_width())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loaded_catalog() -> (TempDir, Catalog) {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("price1.csv"),
            "товар,цена,вес\nЯблоко,100,2\nГруша,90,3\n",
        )
        .unwrap();
        let mut catalog = Catalog::new();
        catalog.load(dir.path()).unwrap();
        (dir, catalog)
    }

    #[test]
    fn test_loop_stops_on_exit() {
        let (_dir, catalog) = loaded_catalog();
        let input = "груш\nexit\nяблоко\n".as_bytes();
        let mut prompt = SearchPrompt::new(input, Vec::new());

        assert_eq!(prompt.run(&catalog).unwrap(), 1);
        let text = String::from_utf8(prompt.into_output()).unwrap();
        assert!(text.contains("груша"));
        assert!(!text.contains("яблоко"));
    }

    #[test]
    fn test_loop_stops_at_end_of_input() {
        let (_dir, catalog) = loaded_catalog();
        let input = "\r\nЯБЛОКО\n".as_bytes();
        let mut prompt = SearchPrompt::new(input, Vec::new());

        assert_eq!(prompt.run(&catalog).unwrap(), 2);
        let text = String::from_utf8(prompt.into_output()).unwrap();
        // The empty query lists both products, the second only the apple.
        assert_eq!(text.matches("яблоко").count(), 2);
        assert_eq!(text.matches("груша").count(), 1);
    }

    #[test]
    fn test_exit_is_case_sensitive() {
        let (_dir, catalog) = loaded_catalog();
        let input = "EXIT\nexit\n".as_bytes();
        let mut prompt = SearchPrompt::new(input, Vec::new());
        assert_eq!(prompt.run(&catalog).unwrap(), 1);
    }
}
