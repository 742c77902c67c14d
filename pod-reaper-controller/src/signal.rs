use std::future;

use pod_reaper::ShutdownTrigger;

/// Wait for SIGINT or SIGTERM, then request shutdown.
pub(crate) async fn shutdown_on_signal(trigger: ShutdownTrigger) {
    let signal = termination().await;
    tracing::info!(signal, "Received shutdown signal, shutting down gracefully");
    trigger.shutdown();
}

#[cfg(unix)]
async fn termination() -> &'static str {
    use tokio::signal::unix::SignalKind;

    match tokio::signal::unix::signal(SignalKind::terminate()) {
        Ok(mut sigterm) => tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            () = ctrl_c() => "SIGINT",
        },
        Err(err) => {
            tracing::warn!(?err, "Failed to install SIGTERM handler");
            ctrl_c().await;
            "SIGINT"
        }
    }
}

#[cfg(not(unix))]
async fn termination() -> &'static str {
    ctrl_c().await;
    "ctrl-c"
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(?err, "Failed to listen for ctrl-c");
        future::pending::<()>().await;
    }
}
