mod store;

pub use store::ArtifactStore;

pub const CLEANED_TABLE: &str = "cleaned_data";
pub const NORMALIZED_TABLE: &str = "normalized_data";
pub const DOMAINS_FILE: &str = "category_domains";
