pub mod api;
pub mod artifacts;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod features;
pub mod recommend;
pub mod report;
pub mod services;
pub mod similarity;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::artifacts::ArtifactStore;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::recommend::RecommenderContext;
use crate::services::export::ExportService;
use crate::services::pipeline::PipelineService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let port = port.unwrap_or(config.server.port);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_prepare() -> Result<()> {
    let config = AppConfig::new();
    let context = build_context(&config)?;
    let store = ArtifactStore::new(&config.data.artifacts_dir)?;
    ExportService::new(store).run(&context)
}

pub fn handle_similar(name: &str, k: Option<usize>) -> Result<()> {
    let config = AppConfig::new();
    let context = build_context(&config)?;
    let k = config.recommender.resolve_k(k);

    if !context.contains(name) {
        println!("Game '{}' not found in dataset.", name);
        return Ok(());
    }

    let recommendations = context.recommend_by_name(name, k);
    report::print_recommendations(&format!("Similar to {}", name), &recommendations);
    Ok(())
}

pub fn handle_category(platform: &str, genre: &str, rating: &str, k: Option<usize>) -> Result<()> {
    let config = AppConfig::new();
    let context = build_context(&config)?;
    let k = config.recommender.resolve_k(k);

    if let Err(rejection) = context.validate_filter(platform, genre, rating) {
        println!("{}", rejection);
        return Ok(());
    }

    let recommendations = context.recommend_by_category(platform, genre, rating, k);
    report::print_recommendations(
        &format!("Top picks for {} / {} / {}", platform, genre, rating),
        &recommendations,
    );
    Ok(())
}

fn build_context(config: &AppConfig) -> Result<RecommenderContext> {
    PipelineService::new(config.data.clone(), config.recommender.clone()).build_context()
}
