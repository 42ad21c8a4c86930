use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::admin_reload,
    recommend::{get_categories, recommend_by_category, recommend_by_name},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/recommend", get(recommend_by_name))
        .route("/api/recommend/category", get(recommend_by_category))
        .route("/api/categories", get(get_categories))
        .route("/api/admin/reload", post(admin_reload))
        .with_state(state)
}
