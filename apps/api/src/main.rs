use std::net::SocketAddr;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillup_api::config::Config;
use skillup_api::llm_client::{self, LlmClient};
use skillup_api::routes::build_router;
use skillup_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("skillup_api={},tower_http=info", config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillUp API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the LLM client only when a key is configured
    let llm = config.openai_api_key.clone().map(LlmClient::new);
    match &llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => info!("OPENAI_API_KEY not set, AI endpoints answer with local fallbacks"),
    }

    // The uploads directory is served statically; make sure it exists
    std::fs::create_dir_all(&config.uploads_dir)?;

    // Build app state (creates the data directory and seeds empty stores)
    let state = AppState::new(config.clone(), llm)?;

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
