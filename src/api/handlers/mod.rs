use std::sync::{Arc, RwLock};

use crate::config::settings::AppConfig;
use crate::recommend::RecommenderContext;

pub mod admin;
pub mod recommend;

pub struct AppState {
    context: RwLock<Arc<RecommenderContext>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(context: RecommenderContext, config: AppConfig) -> Self {
        Self {
            context: RwLock::new(Arc::new(context)),
            config,
        }
    }

    /// Snapshot of the live context; a concurrent reload does not affect it
    pub fn current_context(&self) -> Arc<RecommenderContext> {
        let guard = self.context.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    pub fn replace_context(&self, context: RecommenderContext) {
        let mut guard = self
            .context
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(context);
    }
}
