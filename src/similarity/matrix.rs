use std::collections::HashMap;

use log::info;
use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::features::NormalizedCatalog;

const SELF_SIMILARITY: f64 = 1.0;

/// Symmetric all-pairs cosine similarity, indexed by game name on both axes.
///
/// Memory grows with the square of the catalog size (8 bytes per cell), which
/// bounds how large a catalog can be served from one process.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    names: Vec<String>,
    index: HashMap<String, usize>,
    scores: Array2<f64>,
}

impl SimilarityMatrix {
    /// Computes cosine similarity between every pair of normalized feature vectors
    pub fn build(normalized: &NormalizedCatalog) -> Self {
        let n_items = normalized.len();
        info!(
            "Building {}x{} similarity matrix (~{} MiB)",
            n_items,
            n_items,
            estimated_bytes(n_items) / (1024 * 1024)
        );

        let features = normalized.features();
        let norms = calculate_norms(features);
        let scores = build_scores(features, &norms);

        let names = normalized.names().to_vec();
        let index = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();

        Self {
            names,
            index,
            scores,
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

    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn scores(&self) -> &Array2<f64> {
        &self.scores
    }

    pub fn row(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.scores.row(idx)
    }

    /// Similarity between two named games
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        Some(self.scores[[i, j]])
    }
}

/// Approximate heap size of a similarity matrix over `n_items` games
pub fn estimated_bytes(n_items: usize) -> usize {
    n_items
        .saturating_mul(n_items)
        .saturating_mul(std::mem::size_of::<f64>())
}

fn calculate_norms(features: &Array2<f64>) -> Array1<f64> {
    features.map_axis(Axis(1), |row| row.dot(&row).sqrt())
}

fn build_scores(features: &Array2<f64>, norms: &Array1<f64>) -> Array2<f64> {
    let n_items = features.nrows();
    let mut scores = Array2::<f64>::zeros((n_items, n_items));

    for i in 0..n_items {
        scores[[i, i]] = SELF_SIMILARITY;

        // Upper triangle only, mirrored into the lower one
        for j in (i + 1)..n_items {
            let similarity = cosine_similarity(&features.row(i), &features.row(j), norms[i], norms[j]);
            scores[[i, j]] = similarity;
            scores[[j, i]] = similarity;
        }
    }

    scores
}

fn cosine_similarity(a: &ArrayView1<f64>, b: &ArrayView1<f64>, norm_a: f64, norm_b: f64) -> f64 {
    // A zero vector has no direction; it is dissimilar to everything else
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::record;
    use crate::catalog::CleanedCatalog;
    use crate::features::{encode, normalize};

    fn matrix_for(records: Vec<crate::catalog::CatalogRecord>) -> SimilarityMatrix {
        let catalog: CleanedCatalog = records.into_iter().collect();
        let (encoded, _) = encode(&catalog);
        SimilarityMatrix::build(&normalize(&encoded))
    }

    fn scenario_matrix() -> SimilarityMatrix {
        matrix_for(vec![
            record("A", "X", "Y", "Z", 80.0, 8.0),
            record("B", "X", "Y", "Z", 82.0, 8.2),
            record("C", "X", "W", "Z", 40.0, 4.0),
        ])
    }

    #[test]
    fn test_diagonal_is_exactly_one() {
        let matrix = matrix_for(vec![
            record("A", "PS3", "Action", "E", 13.0, 0.7),
            record("B", "Wii", "Racing", "M", 98.0, 9.6),
            record("C", "X360", "Sports", "T", 61.0, 4.3),
            record("D", "PS3", "Sports", "M", 77.0, 6.1),
        ]);

        for i in 0..matrix.len() {
            assert_eq!(matrix.scores()[[i, i]], 1.0);
        }
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = matrix_for(vec![
            record("A", "PS3", "Action", "E", 13.0, 0.7),
            record("B", "Wii", "Racing", "M", 98.0, 9.6),
            record("C", "X360", "Sports", "T", 61.0, 4.3),
            record("D", "PS3", "Sports", "M", 77.0, 6.1),
        ]);

        for a in matrix.names() {
            for b in matrix.names() {
                assert_eq!(matrix.get(a, b), matrix.get(b, a));
            }
        }
    }

    #[test]
    fn test_closer_items_score_higher() {
        let matrix = scenario_matrix();

        let a_b = matrix.get("A", "B").unwrap();
        let a_c = matrix.get("A", "C").unwrap();

        assert!(a_b > a_c);
        assert!(a_b <= 1.0);
        assert!(a_c >= 0.0);
    }

    #[test]
    fn test_zero_vector_is_dissimilar_to_others() {
        // "C" sits at every column minimum and normalizes to the zero vector
        let matrix = scenario_matrix();

        assert_eq!(matrix.get("C", "A"), Some(0.0));
        assert_eq!(matrix.get("C", "C"), Some(1.0));
    }

    #[test]
    fn test_unknown_name_has_no_score() {
        let matrix = scenario_matrix();

        assert!(matrix.contains("A"));
        assert_eq!(matrix.get("A", "missing"), None);
    }

    #[test]
    fn test_estimated_bytes_is_quadratic() {
        assert_eq!(estimated_bytes(10), 800);
        assert_eq!(estimated_bytes(20), 3200);
    }
}
