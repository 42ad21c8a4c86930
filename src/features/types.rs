use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::catalog::types::{
    CRITIC_SCORE_COLUMN, GENRE_COLUMN, PLATFORM_COLUMN, RATING_COLUMN, USER_SCORE_COLUMN,
};

pub const FEATURE_COUNT: usize = 5;

pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    PLATFORM_COLUMN,
    GENRE_COLUMN,
    RATING_COLUMN,
    CRITIC_SCORE_COLUMN,
    USER_SCORE_COLUMN,
];

pub type CategoryCode = u32;

/// A catalog record with its categorical attributes replaced by codes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedRecord {
    pub platform: CategoryCode,
    pub genre: CategoryCode,
    pub rating: CategoryCode,
    pub critic_score: f64,
    pub user_score: f64,
}

impl EncodedRecord {
    /// Feature vector in `FEATURE_COLUMNS` order
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.platform as f64,
            self.genre as f64,
            self.rating as f64,
            self.critic_score,
            self.user_score,
        ]
    }

    pub fn matches(&self, codes: &CategoryCodes) -> bool {
        self.platform == codes.platform && self.genre == codes.genre && self.rating == codes.rating
    }
}

/// Codes of one (platform, genre, rating) filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryCodes {
    pub platform: CategoryCode,
    pub genre: CategoryCode,
    pub rating: CategoryCode,
}

/// Encoded records; row `i` belongs to `names[i]`
#[derive(Debug, Clone, Default)]
pub struct EncodedCatalog {
    names: Vec<String>,
    rows: Vec<EncodedRecord>,
}

impl EncodedCatalog {
    pub(crate) fn new(names: Vec<String>, rows: Vec<EncodedRecord>) -> Self {
        debug_assert_eq!(names.len(), rows.len());
        Self { names, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn rows(&self) -> &[EncodedRecord] {
        &self.rows
    }

    /// Row indices whose three categorical codes all equal `codes`
    pub fn indices_matching(&self, codes: &CategoryCodes) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.matches(codes))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Dense `(items x features)` matrix
    pub fn feature_matrix(&self) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((self.rows.len(), FEATURE_COUNT));

        for (i, row) in self.rows.iter().enumerate() {
            for (j, value) in row.features().into_iter().enumerate() {
                matrix[[i, j]] = value;
            }
        }

        matrix
    }
}

/// Observed range of one feature column before scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Min-max scaled feature vectors; row `i` belongs to `names[i]`
#[derive(Debug, Clone)]
pub struct NormalizedCatalog {
    names: Vec<String>,
    features: Array2<f64>,
    ranges: Vec<ColumnRange>,
}

impl NormalizedCatalog {
    pub(crate) fn new(names: Vec<String>, features: Array2<f64>, ranges: Vec<ColumnRange>) -> Self {
        debug_assert_eq!(names.len(), features.nrows());
        Self {
            names,
            features,
            ranges,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn ranges(&self) -> &[ColumnRange] {
        &self.ranges
    }

    pub fn rows(&self) -> impl Iterator<Item = NormalizedRow<'_>> {
        self.names
            .iter()
            .zip(self.features.rows())
            .map(|(name, row)| NormalizedRow {
                name,
                platform: row[0],
                genre: row[1],
                rating: row[2],
                critic_score: row[3],
                user_score: row[4],
            })
    }
}

/// One line of the normalized table, in the source's column names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Platform")]
    pub platform: f64,
    #[serde(rename = "Genre")]
    pub genre: f64,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Critic_Score")]
    pub critic_score: f64,
    #[serde(rename = "User_Score")]
    pub user_score: f64,
}
