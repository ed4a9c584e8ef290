use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use vtsim_simulator::cli::SimulatorArgs;
use vtsim_simulator::SimulatedJob;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = SimulatorArgs::parse();
    vtsim_observability::init_with(args.log_format);

    let job = Arc::new(SimulatedJob::new(args.simulator_config()));
    let delay_secs = job.config().delay.as_secs();
    let error_rate = job.config().error_rate;
    let app = vtsim_simulator::app::build_app(job);

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        delay_secs,
        error_rate,
        "simulator listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("simulator failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
