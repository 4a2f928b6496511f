//! Serve command implementation.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

use shortcode_ui::build_router;

use crate::app::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address (overrides the config file)
    #[arg(long)]
    pub bind: Option<String>,
}

pub async fn run(args: ServeArgs, context: &Context) -> Result<()> {
    let config = context.config()?;
    let bind = args.bind.unwrap_or_else(|| config.bind().to_string());

    let gateway = context.gateway(&config)?;
    info!(
        post_fields = gateway.registry().post_fields().len(),
        store = %gateway.store().root().display(),
        "Starting post field server"
    );

    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    let addr = listener.local_addr()?;

    output::success(&format!("Listening on http://{}", addr));

    axum::serve(listener, build_router(Arc::new(gateway)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
