/// Output formats for catalog entries: console table and HTML export.
pub mod console;
pub mod html;
