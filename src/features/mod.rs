pub mod encoding;
pub mod normalization;
pub mod types;

pub use encoding::{encode, CategoryAttribute, CategoryDomain, CategoryDomains, FilterRejection};
pub use normalization::normalize;
pub use types::{CategoryCodes, EncodedCatalog, NormalizedCatalog};
