use clap::Parser as _;
use pod_reaper::Reconciler;
use pod_reaper_kubeapi::KubeApi;
use tracing_subscriber::EnvFilter;

use config::Config;
use timer::ZonedTime;

mod config;
mod signal;
mod timer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::parse();
    let timezone = config.timezone()?;

    tracing_subscriber::fmt()
        .with_timer(ZonedTime::new(timezone))
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = config.client().await?;
    let kubeapi = KubeApi::with_client(client);
    let version = kubeapi
        .server_version()
        .await
        .map_err(config::Error::Unreachable)?;
    tracing::info!(
        version = version.git_version,
        "Connected to Kubernetes API server"
    );

    let (trigger, shutdown) = pod_reaper::shutdown::channel();
    tokio::spawn(signal::shutdown_on_signal(trigger));

    Reconciler::new(kubeapi)
        .with_interval(config.interval())
        .run(shutdown)
        .await;

    Ok(())
}
