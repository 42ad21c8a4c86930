use std::collections::BTreeSet;
use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{CategoryCode, CategoryCodes, EncodedCatalog, EncodedRecord};
use crate::catalog::CleanedCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryAttribute {
    Platform,
    Genre,
    Rating,
}

impl CategoryAttribute {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryAttribute::Platform => "Platform",
            CategoryAttribute::Genre => "Genre",
            CategoryAttribute::Rating => "Rating",
        }
    }
}

impl fmt::Display for CategoryAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a (platform, genre, rating) filter cannot be resolved to codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterRejection {
    #[error("Please complete all filters (Platform, Genre, Rating): {0} is empty.")]
    Empty(CategoryAttribute),
    #[error("{attribute} '{value}' not found in dataset.")]
    Unknown {
        attribute: CategoryAttribute,
        value: String,
    },
}

/// Sorted distinct values of one attribute; a value's code is its position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryDomain {
    values: Vec<String>,
}

impl CategoryDomain {
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = values.into_iter().collect();
        Self {
            values: distinct.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn code_of(&self, value: &str) -> Option<CategoryCode> {
        self.values
            .binary_search_by(|candidate| candidate.as_str().cmp(value))
            .ok()
            .map(|idx| idx as CategoryCode)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The single value-to-code table shared by encoding and filter validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDomains {
    pub platform: CategoryDomain,
    pub genre: CategoryDomain,
    pub rating: CategoryDomain,
}

impl CategoryDomains {
    pub fn from_catalog(catalog: &CleanedCatalog) -> Self {
        Self {
            platform: CategoryDomain::from_values(catalog.iter().map(|r| r.platform.as_str())),
            genre: CategoryDomain::from_values(catalog.iter().map(|r| r.genre.as_str())),
            rating: CategoryDomain::from_values(catalog.iter().map(|r| r.rating.as_str())),
        }
    }

    pub fn domain(&self, attribute: CategoryAttribute) -> &CategoryDomain {
        match attribute {
            CategoryAttribute::Platform => &self.platform,
            CategoryAttribute::Genre => &self.genre,
            CategoryAttribute::Rating => &self.rating,
        }
    }

    pub fn code_of(&self, attribute: CategoryAttribute, value: &str) -> Option<CategoryCode> {
        self.domain(attribute).code_of(value)
    }

    /// Looks up all three filter values, reporting the first one that fails
    pub fn resolve(
        &self,
        platform: &str,
        genre: &str,
        rating: &str,
    ) -> Result<CategoryCodes, FilterRejection> {
        Ok(CategoryCodes {
            platform: self.lookup(CategoryAttribute::Platform, platform)?,
            genre: self.lookup(CategoryAttribute::Genre, genre)?,
            rating: self.lookup(CategoryAttribute::Rating, rating)?,
        })
    }

    fn lookup(
        &self,
        attribute: CategoryAttribute,
        value: &str,
    ) -> Result<CategoryCode, FilterRejection> {
        if value.trim().is_empty() {
            return Err(FilterRejection::Empty(attribute));
        }

        self.code_of(attribute, value)
            .ok_or_else(|| FilterRejection::Unknown {
                attribute,
                value: value.to_string(),
            })
    }

    fn encode_record(&self, record: &crate::catalog::CatalogRecord) -> EncodedRecord {
        // Domains are derived from this same catalog, so every value resolves
        EncodedRecord {
            platform: self.platform.code_of(&record.platform).unwrap_or_default(),
            genre: self.genre.code_of(&record.genre).unwrap_or_default(),
            rating: self.rating.code_of(&record.rating).unwrap_or_default(),
            critic_score: record.critic_score,
            user_score: record.user_score,
        }
    }
}

/// Replaces categorical attributes with codes from a freshly derived domain table
pub fn encode(catalog: &CleanedCatalog) -> (EncodedCatalog, CategoryDomains) {
    let domains = CategoryDomains::from_catalog(catalog);
    info!(
        "  → Encoded {} platforms, {} genres, {} ratings",
        domains.platform.len(),
        domains.genre.len(),
        domains.rating.len()
    );

    let names = catalog.iter().map(|record| record.name.clone()).collect();
    let rows = catalog
        .iter()
        .map(|record| domains.encode_record(record))
        .collect();

    (EncodedCatalog::new(names, rows), domains)
}
