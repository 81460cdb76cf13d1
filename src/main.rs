//! # chatlens server
//!
//! Binds the HTTP surface and serves requests until interrupted.

use std::error::Error;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatlens::cli::Args;
use chatlens::config::LlmConfig;
use chatlens::llm::GenerationOptions;
use chatlens::server::{AppState, router};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chatlens=info,tower_http=info")),
        )
        .init();

    let config = LlmConfig::new()
        .with_base_url(&args.ollama_url)
        .with_fast_model(&args.fast_model)
        .with_accurate_model(&args.accurate_model)
        .with_options(
            GenerationOptions::new()
                .with_num_predict(args.num_predict)
                .with_temperature(args.temperature),
        );

    tracing::info!("📦 chatlens v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("🦙 Generation service: {}", config.base_url);
    tracing::info!(
        "🧠 Models: fast={} accurate={}",
        config.fast_model,
        config.accurate_model
    );

    let state = AppState::new(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!("✅ Listening on http://{}", args.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
