//! Talent Scout server entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use tokio::sync::watch;

use talent_scout::adapters::{
    build_router, InMemorySessionStore, IntakeHandlers, LlmQuestionGenerator, MockAIProvider,
    OpenAIConfig, OpenAIProvider, SessionSweeper,
};
use talent_scout::config::{AiConfig, AiProviderKind, AppConfig};
use talent_scout::domain::intake::IntakeEngine;
use talent_scout::ports::{AIError, AIProvider, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    init_tracing(&config);

    config.validate()?;

    tracing::info!("Starting Talent Scout v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.server.environment,
        provider = ?config.ai.provider,
        concurrent_generation = config.intake.concurrent_generation,
        "Configuration loaded"
    );

    let provider = build_provider(&config.ai)?;
    let generator = LlmQuestionGenerator::new(provider)
        .with_temperature(config.ai.temperature)
        .with_max_tokens(config.ai.max_tokens);

    let engine = Arc::new(
        IntakeEngine::canonical(Arc::new(generator))
            .with_generation_settings(config.intake.generation_settings()),
    );
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SessionSweeper::new(
        store.clone(),
        config.intake.retention(),
        config.intake.sweep_interval(),
    );
    let sweeper_task = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    let app = build_router(
        IntakeHandlers::from_parts(engine, store),
        config.server.request_timeout(),
        &config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if shutdown_tx.send(true).is_ok() {
        if let Err(e) = sweeper_task.await {
            tracing::warn!(error = %e, "Session sweeper did not stop cleanly");
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    match config.provider {
        AiProviderKind::Mock => {
            tracing::warn!("Using mock AI provider; generated questions are canned");
            Ok(Arc::new(MockAIProvider::new()))
        }
        AiProviderKind::OpenAI => {
            let api_key = config.openai_api_key.clone().unwrap_or_default();
            let mut openai = OpenAIConfig::new(api_key)
                .with_model(config.model.clone())
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            if let Some(base_url) = &config.base_url {
                openai = openai.with_base_url(base_url.clone());
            }
            Ok(Arc::new(OpenAIProvider::new(openai)?))
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.server.log_level;
        format!("talent_scout={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.is_production() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
