use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const NAME_COLUMN: &str = "Name";
pub const PLATFORM_COLUMN: &str = "Platform";
pub const GENRE_COLUMN: &str = "Genre";
pub const RATING_COLUMN: &str = "Rating";
pub const CRITIC_SCORE_COLUMN: &str = "Critic_Score";
pub const USER_SCORE_COLUMN: &str = "User_Score";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    NAME_COLUMN,
    PLATFORM_COLUMN,
    GENRE_COLUMN,
    RATING_COLUMN,
    CRITIC_SCORE_COLUMN,
    USER_SCORE_COLUMN,
];

/// Columns of the raw video game dataset that never enter the model
pub const DROPPED_COLUMNS: [&str; 10] = [
    "Year_of_Release",
    "Publisher",
    "Global_Sales",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Critic_Count",
    "User_Count",
    "Developer",
];

/// "Rating Pending" is not a real rating
pub const EXCLUDED_RATING: &str = "RP";

/// One game with its retained attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Critic_Score")]
    pub critic_score: f64,
    #[serde(rename = "User_Score")]
    pub user_score: f64,
}

/// Clean records keyed by unique name, in source order
#[derive(Debug, Clone, Default)]
pub struct CleanedCatalog {
    records: Vec<CatalogRecord>,
    index: HashMap<String, usize>,
}

impl CleanedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record unless its name is already present.
    /// Returns `false` for a duplicate name.
    pub fn insert(&mut self, record: CatalogRecord) -> bool {
        if self.index.contains_key(&record.name) {
            return false;
        }

        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogRecord> {
        self.position(name).map(|idx| &self.records[idx])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogRecord> {
        self.records.iter()
    }
}

impl FromIterator<CatalogRecord> for CleanedCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogRecord>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

/// Row counts gathered while cleaning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub rows_read: usize,
    pub dropped_missing: usize,
    pub dropped_excluded_rating: usize,
    pub dropped_duplicate_names: usize,
    pub identical_rows: usize,
    pub kept: usize,
}

#[cfg(test)]
pub(crate) fn record(
    name: &str,
    platform: &str,
    genre: &str,
    rating: &str,
    critic_score: f64,
    user_score: f64,
) -> CatalogRecord {
    CatalogRecord {
        name: name.to_string(),
        platform: platform.to_string(),
        genre: genre.to_string(),
        rating: rating.to_string(),
        critic_score,
        user_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_occurrence() {
        let mut catalog = CleanedCatalog::new();

        assert!(catalog.insert(record("Tetris", "GB", "Puzzle", "E", 90.0, 9.0)));
        assert!(!catalog.insert(record("Tetris", "NES", "Puzzle", "E", 70.0, 7.0)));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Tetris").unwrap().platform, "GB");
    }

    #[test]
    fn test_positions_follow_insertion_order() {
        let catalog: CleanedCatalog = vec![
            record("B", "X", "Y", "Z", 1.0, 1.0),
            record("A", "X", "Y", "Z", 2.0, 2.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.position("B"), Some(0));
        assert_eq!(catalog.position("A"), Some(1));
        assert_eq!(catalog.position("C"), None);
    }
}
