use super::by_category::{recommend_by_category, CategoryFilter};
use super::by_name::recommend_by_name;
use super::types::{Recommendation, SelfTermPolicy};
use crate::catalog::CleanedCatalog;
use crate::features::{
    encode, normalize, CategoryCodes, CategoryDomains, EncodedCatalog, FilterRejection,
    NormalizedCatalog,
};
use crate::similarity::SimilarityMatrix;

/// Everything the queries read, built once and never mutated afterwards
#[derive(Debug)]
pub struct RecommenderContext {
    catalog: CleanedCatalog,
    encoded: EncodedCatalog,
    normalized: NormalizedCatalog,
    domains: CategoryDomains,
    matrix: SimilarityMatrix,
    self_term: SelfTermPolicy,
}

impl RecommenderContext {
    /// Runs encoding, normalization and the similarity build over a cleaned catalog
    pub fn from_catalog(catalog: CleanedCatalog, self_term: SelfTermPolicy) -> Self {
        let (encoded, domains) = encode(&catalog);
        let normalized = normalize(&encoded);
        let matrix = SimilarityMatrix::build(&normalized);

        Self {
            catalog,
            encoded,
            normalized,
            domains,
            matrix,
            self_term,
        }
    }

    pub fn recommend_by_name(&self, name: &str, k: usize) -> Vec<Recommendation> {
        recommend_by_name(&self.matrix, name, k)
    }

    pub fn recommend_by_category(
        &self,
        platform: &str,
        genre: &str,
        rating: &str,
        k: usize,
    ) -> Vec<Recommendation> {
        recommend_by_category(
            &self.matrix,
            &self.encoded,
            &self.domains,
            &CategoryFilter::new(platform, genre, rating),
            k,
            self.self_term,
        )
    }

    /// Lets callers tell an invalid filter apart from one with no matches
    pub fn validate_filter(
        &self,
        platform: &str,
        genre: &str,
        rating: &str,
    ) -> Result<CategoryCodes, FilterRejection> {
        self.domains.resolve(platform, genre, rating)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.matrix.contains(name)
    }

    pub fn game_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &CleanedCatalog {
        &self.catalog
    }

    pub fn encoded(&self) -> &EncodedCatalog {
        &self.encoded
    }

    pub fn normalized(&self) -> &NormalizedCatalog {
        &self.normalized
    }

    pub fn domains(&self) -> &CategoryDomains {
        &self.domains
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn self_term(&self) -> SelfTermPolicy {
        self.self_term
    }
}
