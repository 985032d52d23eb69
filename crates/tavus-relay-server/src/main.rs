use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;

mod adapters;
mod application;
mod config;
mod routes;

use adapters::TavusClient;
use application::ConversationService;
use config::RelayConfig;
use tavus_relay::ConversationApi;

/// Conversation service wired to whichever client the process was built with
pub type AppConversationService = ConversationService<dyn ConversationApi>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub conversations: Arc<AppConversationService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real deployments use the process environment
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🎬 Tavus relay initializing...");

    let config = RelayConfig::from_env().context("Invalid relay configuration")?;
    let addr = config.socket_addr()?;

    if config.secrets.replica_id().is_some() {
        tracing::info!("🎭 Replica override enabled");
    }

    let client = TavusClient::new(
        config.tavus_api_url.clone(),
        config.secrets.api_key().clone(),
        config.timeout,
    )
    .context("Failed to build Tavus HTTP client")?;

    tracing::info!(
        endpoint = client.endpoint(),
        timeout_secs = config.timeout.as_secs(),
        "🔗 Tavus client initialized"
    );

    let api: Arc<dyn ConversationApi> = Arc::new(client);
    let state = AppState {
        conversations: Arc::new(ConversationService::new(
            api,
            Arc::new(config.secrets.clone()),
        )),
    };

    let router = routes::app(state, &config.relay_path);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        "✅ Serving Tavus conversation relay on {} (POST {})",
        addr,
        config.relay_path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Tavus relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
