use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::similarity::SimilarityMatrix;

/// A recommended game and its similarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub game: String,
    pub score: f64,
}

/// How category ranking treats each item's similarity to itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfTermPolicy {
    /// Average over the whole subset (self included), then drop the top entry
    #[default]
    TruncateTop,
    /// Average over the other members only; nothing is dropped
    ExcludeDiagonal,
}

pub(crate) type ScoredIndex = (usize, f64);

/// Sorts by score descending, ties by name ascending
pub(crate) fn sort_by_score(scored: &mut [ScoredIndex], matrix: &SimilarityMatrix) {
    scored.sort_by(|a, b| compare_scored(a, b, matrix));
}

fn compare_scored(a: &ScoredIndex, b: &ScoredIndex, matrix: &SimilarityMatrix) -> Ordering {
    b.1.total_cmp(&a.1)
        .then_with(|| matrix.name(a.0).cmp(matrix.name(b.0)))
}

pub(crate) fn to_recommendations<I>(scored: I, matrix: &SimilarityMatrix) -> Vec<Recommendation>
where
    I: IntoIterator<Item = ScoredIndex>,
{
    scored
        .into_iter()
        .map(|(idx, score)| Recommendation {
            game: matrix.name(idx).to_string(),
            score,
        })
        .collect()
}
