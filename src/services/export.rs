use anyhow::Result;
use log::info;

use crate::artifacts::{ArtifactStore, CLEANED_TABLE, DOMAINS_FILE, NORMALIZED_TABLE};
use crate::recommend::RecommenderContext;

/// Writes the cleaned table, normalized table and category domains for inspection
pub struct ExportService {
    store: ArtifactStore,
}

impl ExportService {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    pub fn run(&self, context: &RecommenderContext) -> Result<()> {
        info!("=== Exporting Artifacts to {} ===\n", self.store.dir().display());

        self.store.save_table(CLEANED_TABLE, context.catalog().records())?;
        info!("  → Saved {} cleaned rows", context.catalog().len());

        self.store.save_table(NORMALIZED_TABLE, context.normalized().rows())?;
        info!("  → Saved {} normalized rows", context.normalized().len());

        self.store.save_json(DOMAINS_FILE, context.domains())?;
        info!("  → Saved category domains\n");

        info!("=== Export Complete ===");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::record;
    use crate::features::CategoryDomains;
    use crate::recommend::SelfTermPolicy;

    #[test]
    fn test_export_writes_all_artifacts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog = vec![
            record("A", "X", "Y", "Z", 80.0, 8.0),
            record("B", "X", "W", "Z", 40.0, 4.0),
        ]
        .into_iter()
        .collect();
        let context = RecommenderContext::from_catalog(catalog, SelfTermPolicy::TruncateTop);

        let store = ArtifactStore::new(temp_dir.path()).unwrap();
        ExportService::new(store).run(&context).unwrap();

        let cleaned = std::fs::read_to_string(temp_dir.path().join("cleaned_data.csv")).unwrap();
        assert!(cleaned.starts_with("Name,Platform,Genre,Rating,Critic_Score,User_Score\n"));
        assert!(cleaned.contains("A,X,Y,Z,80.0,8.0"));

        let normalized = std::fs::read_to_string(temp_dir.path().join("normalized_data.csv")).unwrap();
        assert!(normalized.contains("A,0.0,1.0,0.0,1.0,1.0"));
        assert!(normalized.contains("B,0.0,0.0,0.0,0.0,0.0"));

        let store = ArtifactStore::new(temp_dir.path()).unwrap();
        let domains: Option<CategoryDomains> = store.load_json(DOMAINS_FILE).unwrap();
        assert_eq!(domains.as_ref(), Some(context.domains()));
    }
}
