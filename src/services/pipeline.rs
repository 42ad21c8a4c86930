use anyhow::Result;
use log::{info, warn};

use crate::catalog;
use crate::config::settings::{DataSettings, RecommenderSettings};
use crate::recommend::RecommenderContext;
use crate::similarity::estimated_bytes;

/// Runs the load → clean → encode → normalize → similarity stages once
pub struct PipelineService {
    data: DataSettings,
    recommender: RecommenderSettings,
}

impl PipelineService {
    pub fn new(data: DataSettings, recommender: RecommenderSettings) -> Self {
        Self { data, recommender }
    }

    pub fn build_context(&self) -> Result<RecommenderContext> {
        info!("=== Building Recommender Context ===\n");

        // Step 1: Load and clean
        info!(
            "Step 1: Loading catalog from {}...",
            self.data.catalog_path.display()
        );
        let catalog = catalog::load_and_clean_path(&self.data.catalog_path)?;

        // Step 2: Features and similarity
        info!("Step 2: Encoding, normalizing and building similarity matrix...");
        self.check_matrix_size(catalog.len());
        let context = RecommenderContext::from_catalog(catalog, self.recommender.self_term);

        info!("=== Context Ready: {} games ===", context.game_count());
        Ok(context)
    }

    fn check_matrix_size(&self, n_items: usize) {
        if n_items > self.recommender.matrix_warn_items {
            warn!(
                "Catalog has {} games; the similarity matrix needs ~{} MiB and grows quadratically",
                n_items,
                estimated_bytes(n_items) / (1024 * 1024)
            );
        }
    }
}
