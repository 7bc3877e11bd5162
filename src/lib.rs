pub mod catalog;
pub mod font;
pub mod placeholder;

// Curated re-exports
pub use catalog::{catalog, generate_all, generate_all_in, CatalogEntry, CatalogLayout, GenerationSummary};
pub use placeholder::{create_placeholder, PlaceholderSpec};
