//! Price-list aggregator: scans a directory for price files, works out which
//! columns hold product, price and weight, and keeps every row as a
//! price-per-unit entry in a sortable, searchable [`Catalog`].

pub mod app;
pub mod catalog;
pub mod config;
pub mod data;
pub mod render;

pub use catalog::Catalog;
pub use data::error::{PriceError, Result};
pub use data::filter::RatioRange;
pub use data::loader::ScanReport;
pub use data::model::{ColumnMap, Entry};
