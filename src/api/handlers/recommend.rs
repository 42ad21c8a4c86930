use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use log::debug;
use std::sync::Arc;

use super::AppState;
use crate::api::models::{CategoryParams, NameParams, RecommendationResponse};

pub async fn recommend_by_name(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NameParams>,
) -> impl IntoResponse {
    let name = trimmed(params.name);
    if name.is_empty() {
        return Json(RecommendationResponse::failed("Please enter a valid game name."));
    }

    let context = state.current_context();
    if !context.contains(&name) {
        debug!("Name query for unknown game '{}'", name);
        return Json(RecommendationResponse::failed(format!(
            "Game '{}' not found in dataset.",
            name
        )));
    }

    let k = state.config.recommender.resolve_k(params.k);
    Json(RecommendationResponse::found(context.recommend_by_name(&name, k)))
}

pub async fn recommend_by_category(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> impl IntoResponse {
    let platform = trimmed(params.platform);
    let genre = trimmed(params.genre);
    let rating = trimmed(params.rating);

    let context = state.current_context();
    if let Err(rejection) = context.validate_filter(&platform, &genre, &rating) {
        return Json(RecommendationResponse::failed(rejection.to_string()));
    }

    let k = state.config.recommender.resolve_k(params.k);
    let recommendations = context.recommend_by_category(&platform, &genre, &rating, k);

    if recommendations.is_empty() {
        return Json(RecommendationResponse::failed(format!(
            "No games found for Platform '{}', Genre '{}', and Rating '{}'.",
            platform, genre, rating
        )));
    }

    Json(RecommendationResponse::found(recommendations))
}

pub async fn get_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let context = state.current_context();
    Json(context.domains().clone())
}

fn trimmed(value: Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}
