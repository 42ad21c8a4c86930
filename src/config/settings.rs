use std::path::PathBuf;

use crate::recommend::SelfTermPolicy;

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub catalog_path: PathBuf,
    pub artifacts_dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/Video_Games.csv"),
            artifacts_dir: PathBuf::from("data"),
        }
    }
}

impl DataSettings {
    /// Defaults overridden by `CATALOG_PATH` and `ARTIFACTS_DIR`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: env_path("CATALOG_PATH").unwrap_or(defaults.catalog_path),
            artifacts_dir: env_path("ARTIFACTS_DIR").unwrap_or(defaults.artifacts_dir),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone)]
pub struct RecommenderSettings {
    pub default_k: usize,
    pub max_k: usize,
    pub self_term: SelfTermPolicy,
    pub matrix_warn_items: usize,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            default_k: 6,
            max_k: 50,
            self_term: SelfTermPolicy::TruncateTop,
            matrix_warn_items: 20_000,
        }
    }
}

impl RecommenderSettings {
    /// Requested `k`, falling back to the default and clamped to `[1, max_k]`
    pub fn resolve_k(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_k).clamp(1, self.max_k.max(1))
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data: DataSettings,
    pub recommender: RecommenderSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::from_env(),
            recommender: RecommenderSettings::default(),
            server: ServerSettings::default(),
        }
    }
}
