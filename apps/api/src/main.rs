mod config;
mod db;
mod errors;
mod interview;
mod models;
mod rng;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::rng::SharedRng;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobBoard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Seed the question bank if asked to (idempotent, keyed by question text)
    if config.seed_questions {
        let created = interview::seed::seed_questions(&db).await?;
        info!("Question bank seeding done ({created} new)");
    }

    // Question-selection randomness: seeded for reproducible runs, OS entropy otherwise
    let rng = SharedRng::from_seed_or_entropy(config.rng_seed);
    if let Some(seed) = config.rng_seed {
        info!("Question selection seeded with {seed} (deterministic)");
    }

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        rng,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
