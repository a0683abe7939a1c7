#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::sync::Arc;

use args::Args;
use clap::Parser;
use doublecheck_config::Config;
use doublecheck_llm::{AnthropicProvider, GoogleProvider};
use doublecheck_mcp::{DoubleCheckServer, ToolDispatcher};
use rmcp::ServiceExt;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    doublecheck_telemetry::init(&args.log_filter, args.log_format)?;

    // Configuration problems are fatal before anything is served
    let config = Config::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;

    tracing::info!(
        gemini_model = %config.gemini.model,
        sonnet_model = %config.sonnet.model,
        timeout_ms = u64::try_from(config.request_timeout.as_millis()).unwrap_or(u64::MAX),
        "starting doublecheck"
    );

    let plan_critic = Arc::new(GoogleProvider::new(&config.gemini, config.request_timeout)?);
    let code_reviewer = Arc::new(AnthropicProvider::new(
        &config.sonnet,
        config.request_timeout,
        config.sonnet_max_tokens,
    )?);

    let server = DoubleCheckServer::new(ToolDispatcher::new(plan_critic, code_reviewer));

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    let service = server.serve_with_ct(rmcp::transport::stdio(), shutdown).await?;
    let reason = service.waiting().await?;

    tracing::info!(?reason, "doublecheck stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
