use std::fmt;

use k8s_openapi::apimachinery::pkg::version;
use kube::api;
use pod_reaper::PodApi;
use pod_reaper_ext as k8s;

use k8s::corev1;

pub struct KubeApi {
    list_params: api::ListParams,
    delete_params: api::DeleteParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// The client decides which credentials are used, so the caller picks
    /// between in-cluster and kubeconfig authentication before getting here.
    /// Pods are listed with default `ListParams` (a fresh, unfiltered list
    /// across all namespaces) and deleted with default `DeleteParams`, so the
    /// pod's own termination grace period applies.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = kube::Config::incluster()?;
    /// let client = kube::Client::try_from(config)?;
    /// let api = pod_reaper_kubeapi::KubeApi::with_client(client);
    /// // hand `api` to a `pod_reaper::Reconciler`
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            delete_params: api::DeleteParams::default(),
            client,
        }
    }

    /// Ask the API server for its version.
    ///
    /// Used at startup to fail fast when the cluster is unreachable or the
    /// credentials are rejected.
    ///
    /// # Returns
    ///
    /// The server's `version::Info`; the call fails with a `kube::Error` when
    /// the request cannot be sent or the server refuses it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &pod_reaper_kubeapi::KubeApi) -> kube::Result<()> {
    /// let info = api.server_version().await?;
    /// println!("connected to {}", info.git_version);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn server_version(&self) -> kube::Result<version::Info> {
        self.client.apiserver_version().await
    }

    /// Api handle scoped to Pods in all namespaces.
    fn pods(&self) -> api::Api<corev1::Pod> {
        api::Api::all(self.client.clone())
    }

    /// Api handle scoped to Pods in `namespace`, used for deletes.
    fn namespaced_pods(&self, namespace: &str) -> api::Api<corev1::Pod> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }

    fn delete_params(&self) -> &api::DeleteParams {
        &self.delete_params
    }
}

impl PodApi for KubeApi {
    type Error = kube::Error;

    /// List every Pod in every namespace.
    ///
    /// # Returns
    ///
    /// The full `Pod` objects, status included, in the order the API server
    /// returned them.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pod_reaper::PodApi as _;
    /// # async fn example(api: &pod_reaper_kubeapi::KubeApi) -> kube::Result<()> {
    /// let pods = api.list_pods().await?;
    /// println!("listed {} pods", pods.len());
    /// # Ok(())
    /// # }
    /// ```
    async fn list_pods(&self) -> kube::Result<Vec<corev1::Pod>> {
        let lp = self.list_params();
        let pods = self.pods().list(lp).await?;
        tracing::trace!(count = pods.items.len(), "Listed pods");
        Ok(pods.items)
    }

    /// Issue the delete and return without waiting for the pod to go away.
    ///
    /// Deleting a pod that is already gone fails with a `NotFound` API error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pod_reaper::PodApi as _;
    /// # async fn example(api: &pod_reaper_kubeapi::KubeApi) -> kube::Result<()> {
    /// api.delete_pod("default", "web-0").await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn delete_pod(&self, namespace: &str, name: &str) -> kube::Result<()> {
        let dp = self.delete_params();
        self.namespaced_pods(namespace)
            .delete(name, dp)
            .await
            .map(drop)
    }
}

impl fmt::Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, showing the list and delete
    /// parameters while redacting the `client`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("delete_params", &self.delete_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> kube::Client {
        let config = kube::Config::new("http://127.0.0.1:6443".parse().unwrap());
        kube::Client::try_from(config).unwrap()
    }

    #[tokio::test]
    async fn with_client_uses_default_params() {
        let api = KubeApi::with_client(client());

        assert!(api.list_params().label_selector.is_none());
        assert!(api.list_params().field_selector.is_none());
        assert!(api.delete_params().grace_period_seconds.is_none());
        assert!(!api.delete_params().dry_run);
    }

    #[tokio::test]
    async fn debug_redacts_client() {
        let api = KubeApi::with_client(client());

        let debug = format!("{api:?}");

        assert!(debug.starts_with("KubeApi"));
        assert!(debug.contains("list_params"));
        assert!(debug.contains("delete_params"));
        assert!(debug.contains("<kube::Client>"));
    }
}
