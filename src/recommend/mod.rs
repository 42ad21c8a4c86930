pub mod by_category;
pub mod by_name;
mod context;
pub mod types;

pub use by_category::{recommend_by_category, CategoryFilter};
pub use by_name::recommend_by_name;
pub use context::RecommenderContext;
pub use types::{Recommendation, SelfTermPolicy};
