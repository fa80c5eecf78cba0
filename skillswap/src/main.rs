use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skillswap::api::{create_router, AppState};
use skillswap::backend::{HttpBackend, SkillSwapBackend};
use skillswap::config::Config;

#[derive(Parser)]
#[command(name = "skillswap")]
#[command(about = "Candidate feed and swipe gateway for SkillSwap")]
struct Args {
    /// Address to bind (overrides SKILLSWAP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides SKILLSWAP_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// SkillSwap backend base URL (overrides BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillswap=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(backend_url) = args.backend_url {
        config.backend.base_url = backend_url;
    }

    if config.server.api_keys.is_empty() {
        tracing::warn!(
            "SKILLSWAP_API_KEYS is not set. Feed endpoints are open to anyone who can reach this server."
        );
    }

    tracing::info!("Connecting to SkillSwap backend at {}...", config.backend.base_url);
    let backend = HttpBackend::new(&config.backend)?;
    if let Err(e) = backend.ping().await {
        tracing::warn!("SkillSwap backend is not reachable yet: {}", e);
    }

    tracing::info!(
        "Feed settings: threshold={}px, default radius={}km, policy={}, avatars={}",
        config.feed.swipe_threshold,
        config.feed.default_max_distance_km,
        config.feed.advance_policy,
        config.feed.resolve_avatars
    );

    let state = AppState::new(config.clone(), Arc::new(backend));
    let app = create_router(state);

    let cancel_token = CancellationToken::new();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("SkillSwap feed starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token.clone()))
        .await?;

    tracing::info!("SkillSwap feed stopped");
    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = cancel_token.cancelled() => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
    cancel_token.cancel();
}
