use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use log::{error, info};
use std::sync::Arc;

use super::AppState;
use crate::services::pipeline::PipelineService;

/// Rebuilds the context in the background; queries keep using the old one until the swap
pub async fn admin_reload(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tokio::spawn(async move {
        info!("Admin triggered reload started");

        match reload_context(&state).await {
            Ok(()) => info!("Admin triggered reload completed successfully"),
            Err(e) => error!("Reload failed: {:?}", e),
        }
    });

    (StatusCode::ACCEPTED, "Reload triggered")
}

/// Runs the full pipeline off the async workers and swaps the result in.
/// On failure the live context is left untouched.
pub async fn reload_context(state: &AppState) -> Result<()> {
    let pipeline = PipelineService::new(
        state.config.data.clone(),
        state.config.recommender.clone(),
    );
    let context = tokio::task::spawn_blocking(move || pipeline.build_context()).await??;

    state.replace_context(context);
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::reload_context;
    use crate::api::handlers::AppState;
    use crate::api::routes::create_router;
    use crate::catalog::types::record;
    use crate::catalog::CleanedCatalog;
    use crate::config::settings::AppConfig;
    use crate::recommend::{RecommenderContext, SelfTermPolicy};

    fn two_game_state(catalog_path: PathBuf) -> AppState {
        let catalog: CleanedCatalog = vec![
            record("A", "X", "Y", "Z", 80.0, 8.0),
            record("B", "X", "W", "Z", 40.0, 4.0),
        ]
        .into_iter()
        .collect();
        let context = RecommenderContext::from_catalog(catalog, SelfTermPolicy::TruncateTop);

        let mut config = AppConfig::default();
        config.data.catalog_path = catalog_path;
        AppState::new(context, config)
    }

    #[tokio::test]
    async fn test_reload_endpoint_is_accepted() {
        let state = Arc::new(two_game_state(PathBuf::from("does/not/exist.csv")));

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/admin/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_reload_swaps_in_rebuilt_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Name,Platform,Genre,Rating,Critic_Score,User_Score\n\
             Halo 3,X360,Shooter,M,94,7.8\n\
             Wii Sports,Wii,Sports,E,76,8.0\n\
             Gears of War,X360,Shooter,M,94,8.3\n"
        )
        .unwrap();
        let state = two_game_state(file.path().to_path_buf());
        let before = state.current_context();

        reload_context(&state).await.unwrap();

        let after = state.current_context();
        assert_eq!(before.game_count(), 2);
        assert_eq!(after.game_count(), 3);
        assert!(after.contains("Gears of War"));
        assert!(!after.contains("A"));
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_context() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state = two_game_state(temp_dir.path().join("absent.csv"));

        let result = reload_context(&state).await;

        assert!(result.is_err());
        let context = state.current_context();
        assert_eq!(context.game_count(), 2);
        assert!(context.contains("A"));
    }

    #[test]
    fn test_replace_context_swaps_snapshot() {
        let state = two_game_state(PathBuf::from("unused.csv"));
        let before = state.current_context();

        let single: CleanedCatalog =
            vec![record("C", "X", "Y", "Z", 60.0, 6.0)].into_iter().collect();
        state.replace_context(RecommenderContext::from_catalog(single, SelfTermPolicy::TruncateTop));

        assert_eq!(before.game_count(), 2);
        assert_eq!(state.current_context().game_count(), 1);
    }
}
