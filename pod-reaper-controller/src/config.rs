use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;
use clap::ArgAction;
use clap::Parser;
use kube::config::InClusterError;
use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;
use kube::config::KubeconfigError;
use pod_reaper::DEFAULT_INTERVAL;

/// Startup failures. Any of these aborts the process before the first pass.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("invalid timezone {name:?}")]
    Timezone { name: String },

    #[error("failed to load in-cluster config: {0}")]
    InCluster(#[from] InClusterError),

    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] KubeconfigError),

    #[error("failed to create Kubernetes client: {0}")]
    Client(#[source] kube::Error),

    #[error("Kubernetes API server is unreachable: {0}")]
    Unreachable(#[source] kube::Error),
}

/// Deletes pods stuck in CrashLoopBackOff or CreateContainerError so their
/// controllers recreate them.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Config {
    /// Authenticate with the pod's service account instead of a kubeconfig
    #[arg(
        long,
        env = "inCluster",
        action = ArgAction::SetTrue,
        value_parser = parse_in_cluster
    )]
    pub(crate) in_cluster: bool,

    /// Kubeconfig file to use outside the cluster.
    /// Defaults to $KUBECONFIG, then ~/.kube/config
    #[arg(long, value_name = "PATH")]
    pub(crate) kubeconfig: Option<PathBuf>,

    /// IANA timezone for log timestamps, e.g. Europe/Berlin
    #[arg(long, env = "TIMEZONE", default_value = "UTC")]
    pub(crate) timezone: String,

    /// Seconds to wait after a remediation pass before starting the next
    #[arg(
        long,
        value_name = "SECONDS",
        env = "REAPER_INTERVAL",
        default_value_t = DEFAULT_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) interval: u64,
}

/// Only the exact value `true` enables in-cluster mode. Anything else,
/// `1` and `TRUE` included, falls back to a kubeconfig.
fn parse_in_cluster(value: &str) -> Result<bool, Infallible> {
    Ok(value == "true")
}

impl Config {
    pub(crate) fn timezone(&self) -> Result<Tz, Error> {
        self.timezone.parse().map_err(|_| Error::Timezone {
            name: self.timezone.clone(),
        })
    }

    pub(crate) fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    pub(crate) async fn client(&self) -> Result<kube::Client, Error> {
        let config = self.kube_config().await?;
        kube::Client::try_from(config).map_err(Error::Client)
    }

    async fn kube_config(&self) -> Result<kube::Config, Error> {
        if self.in_cluster {
            tracing::info!("Using in-cluster configuration");
            return Ok(kube::Config::incluster()?);
        }

        tracing::info!(kubeconfig = ?self.kubeconfig, "Using out-of-cluster configuration");
        let options = KubeConfigOptions::default();
        let config = match &self.kubeconfig {
            Some(path) => {
                let kubeconfig = Kubeconfig::read_from(path)?;
                kube::Config::from_custom_kubeconfig(kubeconfig, &options).await?
            }
            None => kube::Config::from_kubeconfig(&options).await?,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn command_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn flags() {
        let config = Config::try_parse_from([
            "pod-reaper-controller",
            "--in-cluster",
            "--kubeconfig",
            "/etc/reaper/kubeconfig",
            "--timezone",
            "Europe/Berlin",
            "--interval",
            "30",
        ])
        .unwrap();

        assert!(config.in_cluster);
        assert_eq!(
            config.kubeconfig.as_deref(),
            Some(std::path::Path::new("/etc/reaper/kubeconfig"))
        );
        assert_eq!(config.timezone().unwrap(), Tz::Europe__Berlin);
        assert_eq!(config.interval(), Duration::from_secs(30));
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["pod-reaper-controller"]).unwrap();

        assert!(config.kubeconfig.is_none());
        assert_eq!(config.interval(), DEFAULT_INTERVAL);
    }

    #[test]
    fn in_cluster_requires_exact_true() {
        assert!(parse_in_cluster("true").unwrap());
        for value in ["false", "TRUE", "True", "1", "yes", ""] {
            assert!(
                !parse_in_cluster(value).unwrap(),
                "{value:?} should select kubeconfig"
            );
        }
    }

    #[test]
    fn in_cluster_flag_without_value() {
        let config = Config::try_parse_from(["pod-reaper-controller", "--in-cluster"]).unwrap();

        assert!(config.in_cluster);
    }

    #[test]
    fn invalid_timezone() {
        let config =
            Config::try_parse_from(["pod-reaper-controller", "--timezone", "Mars/Olympus"])
                .unwrap();

        let err = config.timezone().unwrap_err();

        assert!(matches!(err, Error::Timezone { ref name } if name == "Mars/Olympus"));
        assert_eq!(err.to_string(), r#"invalid timezone "Mars/Olympus""#);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = Config::try_parse_from(["pod-reaper-controller", "--interval", "0"]);

        assert!(result.is_err());
    }
}
