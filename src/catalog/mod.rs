pub mod loader;
pub mod types;

pub use loader::{load_and_clean, load_and_clean_path};
pub use types::{CatalogRecord, CleanedCatalog, CleaningReport};
