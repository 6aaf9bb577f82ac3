/// Data layer: entry types, header resolution, row parsing, scanning, queries.
///
/// Architecture:
/// ```text
///   dir/*price*
///        │
///        ▼
///   ┌──────────┐   header row   ┌──────────┐
///   │  loader   │ ─────────────▶ │ columns   │  synonyms → ColumnMap
///   └──────────┘                └──────────┘
///        │ data rows
///        ▼
///   ┌──────────┐
///   │  record   │  fields + ColumnMap → Entry
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  name search, ratio window
///   └──────────┘
/// ```

pub mod columns;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod record;
