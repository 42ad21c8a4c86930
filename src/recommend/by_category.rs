use log::info;
use ndarray::{Array1, Axis};

use super::types::{sort_by_score, to_recommendations, Recommendation, ScoredIndex, SelfTermPolicy};
use crate::features::{CategoryDomains, EncodedCatalog};
use crate::similarity::SimilarityMatrix;

/// A (platform, genre, rating) filter in its original string form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter<'a> {
    pub platform: &'a str,
    pub genre: &'a str,
    pub rating: &'a str,
}

impl<'a> CategoryFilter<'a> {
    pub fn new(platform: &'a str, genre: &'a str, rating: &'a str) -> Self {
        Self {
            platform,
            genre,
            rating,
        }
    }
}

/// Ranks the games matching `filter` by their mean similarity to the rest of
/// the matching subset and returns the top `k`.
///
/// With [`SelfTermPolicy::TruncateTop`] every mean includes the item's own 1.0
/// and the highest-ranked entry is dropped. This assumes the top entry is the
/// one inflated by its self-term, which is not verified.
pub fn recommend_by_category(
    matrix: &SimilarityMatrix,
    encoded: &EncodedCatalog,
    domains: &CategoryDomains,
    filter: &CategoryFilter<'_>,
    k: usize,
    policy: SelfTermPolicy,
) -> Vec<Recommendation> {
    if k == 0 {
        return Vec::new();
    }

    let codes = match domains.resolve(filter.platform, filter.genre, filter.rating) {
        Ok(codes) => codes,
        Err(rejection) => {
            info!("{}", rejection);
            return Vec::new();
        }
    };

    let members = encoded.indices_matching(&codes);
    if members.is_empty() {
        log_no_matches(filter);
        return Vec::new();
    }

    let mut scored = mean_similarities(matrix, &members, policy);
    sort_by_score(&mut scored, matrix);

    let skip = match policy {
        SelfTermPolicy::TruncateTop => 1,
        SelfTermPolicy::ExcludeDiagonal => 0,
    };

    to_recommendations(scored.into_iter().skip(skip).take(k), matrix)
}

fn mean_similarities(
    matrix: &SimilarityMatrix,
    members: &[usize],
    policy: SelfTermPolicy,
) -> Vec<ScoredIndex> {
    let submatrix = matrix
        .scores()
        .select(Axis(0), members)
        .select(Axis(1), members);

    // Column sums over the subset; the matrix is symmetric so rows would do too
    let sums = submatrix.sum_axis(Axis(0));

    let means = match policy {
        SelfTermPolicy::TruncateTop => column_means(&sums, members.len()),
        SelfTermPolicy::ExcludeDiagonal => peer_means(&sums, members.len()),
    };

    members.iter().copied().zip(means).collect()
}

fn column_means(sums: &Array1<f64>, size: usize) -> Vec<f64> {
    sums.iter().map(|sum| sum / size as f64).collect()
}

fn peer_means(sums: &Array1<f64>, size: usize) -> Vec<f64> {
    // A lone member has no peers to average over
    if size < 2 {
        return Vec::new();
    }

    sums.iter()
        .map(|sum| (sum - 1.0) / (size - 1) as f64)
        .collect()
}

fn log_no_matches(filter: &CategoryFilter<'_>) {
    info!(
        "No games found for Platform '{}', Genre '{}', and Rating '{}'.",
        filter.platform, filter.genre, filter.rating
    );
}
