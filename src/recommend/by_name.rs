use log::debug;

use super::types::{sort_by_score, to_recommendations, Recommendation, ScoredIndex};
use crate::similarity::SimilarityMatrix;

/// Top `k` games most similar to `name`, best first.
///
/// An unknown name yields an empty list. The game itself is never returned.
pub fn recommend_by_name(matrix: &SimilarityMatrix, name: &str, k: usize) -> Vec<Recommendation> {
    if k == 0 {
        return Vec::new();
    }

    let Some(target) = matrix.position(name) else {
        debug!("Game '{}' not found in similarity matrix", name);
        return Vec::new();
    };

    let mut scored = collect_peer_scores(matrix, target);
    sort_by_score(&mut scored, matrix);

    to_recommendations(scored.into_iter().take(k), matrix)
}

fn collect_peer_scores(matrix: &SimilarityMatrix, target: usize) -> Vec<ScoredIndex> {
    matrix
        .row(target)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(idx, _)| idx != target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::record;
    use crate::catalog::{CatalogRecord, CleanedCatalog};
    use crate::features::{encode, normalize};

    fn matrix_for(records: Vec<CatalogRecord>) -> SimilarityMatrix {
        let catalog: CleanedCatalog = records.into_iter().collect();
        let (encoded, _) = encode(&catalog);
        SimilarityMatrix::build(&normalize(&encoded))
    }

    fn varied_matrix() -> SimilarityMatrix {
        matrix_for(vec![
            record("Halo 3", "X360", "Shooter", "M", 94.0, 7.8),
            record("Gears of War", "X360", "Shooter", "M", 94.0, 8.4),
            record("Wii Sports", "Wii", "Sports", "E", 76.0, 8.0),
            record("Uncharted", "PS3", "Action", "T", 88.0, 8.5),
            record("Mario Kart Wii", "Wii", "Racing", "E", 82.0, 8.3),
            record("Killzone 2", "PS3", "Shooter", "M", 91.0, 7.7),
        ])
    }

    #[test]
    fn test_scenario_ranks_closest_first() {
        let matrix = matrix_for(vec![
            record("A", "X", "Y", "Z", 80.0, 8.0),
            record("B", "X", "Y", "Z", 82.0, 8.2),
            record("C", "X", "W", "Z", 40.0, 4.0),
        ]);

        let games: Vec<String> = recommend_by_name(&matrix, "A", 2)
            .into_iter()
            .map(|r| r.game)
            .collect();

        assert_eq!(games, vec!["B", "C"]);
    }

    #[test]
    fn test_returns_k_entries_without_self_in_descending_order() {
        let matrix = varied_matrix();
        let k = 3;

        for name in matrix.names() {
            let recommendations = recommend_by_name(&matrix, name, k);

            assert_eq!(recommendations.len(), k);
            assert!(recommendations.iter().all(|r| &r.game != name));
            assert!(recommendations.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_unknown_name_returns_empty() {
        let matrix = varied_matrix();

        assert!(recommend_by_name(&matrix, "does-not-exist", 5).is_empty());
    }

    #[test]
    fn test_fewer_peers_than_k_returns_all_peers() {
        let matrix = varied_matrix();

        let recommendations = recommend_by_name(&matrix, "Halo 3", 50);

        assert_eq!(recommendations.len(), matrix.len() - 1);
    }

    #[test]
    fn test_identical_twin_never_displaces_self_exclusion() {
        let matrix = matrix_for(vec![
            record("B Twin", "X", "Y", "Z", 80.0, 8.0),
            record("A Twin", "X", "Y", "Z", 80.0, 8.0),
            record("Other", "Q", "W", "Z", 40.0, 4.0),
        ]);

        let recommendations = recommend_by_name(&matrix, "B Twin", 1);

        assert_eq!(recommendations[0].game, "A Twin");
        assert_eq!(recommendations[0].score, 1.0);
    }

    #[test]
    fn test_zero_k_returns_empty() {
        let matrix = varied_matrix();

        assert!(recommend_by_name(&matrix, "Halo 3", 0).is_empty());
    }
}
