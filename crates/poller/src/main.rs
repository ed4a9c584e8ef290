use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use vtsim_poller::cli::PollerArgs;
use vtsim_poller::{HttpStatusSource, PollingCoordinator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = PollerArgs::parse();
    vtsim_observability::init_with(args.log_format);

    let source = Arc::new(HttpStatusSource::new(args.upstream_url.as_str()));
    let coordinator = PollingCoordinator::new(args.poller_config(), source)
        .context("invalid poller configuration")?;
    let app = vtsim_poller::app::build_app(Arc::new(coordinator));

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        upstream = %args.upstream_url,
        "poller gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("poller gateway failed")?;

    tracing::info!("poller gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
