use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use price_machine::app::SearchPrompt;
use price_machine::config::Config;
use price_machine::data::loader;
use price_machine::render::console;
use price_machine::Catalog;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let dir = match &config.dir {
        Some(dir) => dir.clone(),
        None => loader::default_scan_dir().context("locating the executable directory")?,
    };

    let mut catalog = Catalog::new();
    let report = catalog
        .load_matching(&dir, &config.pattern)
        .with_context(|| format!("scanning {}", dir.display()))?;
    println!(
        "Processed {} files and {} lines",
        report.files_processed, report.lines_processed
    );
    if report.files_skipped > 0 || report.rows_skipped > 0 {
        println!(
            "Skipped {} files and {} rows, see the log for details",
            report.files_skipped, report.rows_skipped
        );
    }

    let range = config.ratio_range();
    if !range.is_unbounded() {
        catalog.retain_range(range);
    }

    if config.queries.is_empty() {
        SearchPrompt::new(io::stdin().lock(), io::stdout().lock())
            .run(&catalog)
            .context("reading search queries")?;
        println!("the end");
    } else {
        let mut out = io::stdout().lock();
        for query in &config.queries {
            let found = catalog.search(query);
            console::write_table(&mut out, &found, catalog.name_width())
                .context("writing search results")?;
        }
    }

    if !config.no_export {
        let rows = catalog
            .export_html(&config.output)
            .with_context(|| format!("exporting to {}", config.output.display()))?;
        println!("Exported {rows} entries to {}", config.output.display());
    }

    Ok(())
}
