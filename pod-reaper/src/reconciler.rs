use std::time::Duration;

use kube::ResourceExt as _;
use tokio::time;

use super::*;

/// Pause between the end of one pass and the start of the next.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// What a single remediation pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub listed: usize,
    pub matched: usize,
    pub deleted: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct Reconciler<A> {
    api: A,
    interval: Duration,
}

impl<A: PodApi> Reconciler<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(self, interval: Duration) -> Self {
        Self { interval, ..self }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run remediation passes until `shutdown` fires.
    ///
    /// Shutdown is checked before every pass and raced against every
    /// interval wait. A pass already in progress always runs to completion.
    /// List failures are logged and retried on the next pass.
    pub async fn run(&self, mut shutdown: ShutdownToken) {
        tracing::info!(interval = ?self.interval, "Starting pod reaper");

        while !shutdown.is_shutdown() {
            match self.remediate_pods().await {
                Ok(summary) => tracing::debug!(?summary, "Remediation pass complete"),
                Err(err) => tracing::error!(?err, "Error during remediation"),
            }

            tokio::select! {
                () = time::sleep(self.interval) => {}
                () = shutdown.wait() => {}
            }
        }

        tracing::info!("Polling stopped after shutdown request");
    }

    /// One list, evaluate, delete pass.
    ///
    /// Fails only when the pod list cannot be fetched, in which case nothing
    /// is deleted. Delete failures are logged per pod and counted in the
    /// returned summary.
    pub async fn remediate_pods(&self) -> Result<PassSummary, A::Error> {
        let pods = self.api.list_pods().await?;
        let mut summary = PassSummary {
            listed: pods.len(),
            ..k8s::default()
        };

        for pod in pods.iter().filter(|pod| should_remediate(pod)) {
            summary.matched += 1;
            let name = pod.name_any();
            let namespace = pod.namespace().unwrap_or_default();
            tracing::info!(name, namespace, "Remediating pod");
            match self.api.delete_pod(&namespace, &name).await {
                Ok(()) => {
                    summary.deleted += 1;
                    tracing::info!(name, namespace, "Pod deleted successfully");
                }
                Err(err) => {
                    summary.failed += 1;
                    tracing::error!(name, namespace, ?err, "Failed to delete pod");
                }
            }
        }

        Ok(summary)
    }
}
