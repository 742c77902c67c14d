use std::error::Error;

use super::*;

/// The two cluster capabilities the reconciler needs.
///
/// Implementations own transport concerns (timeouts, authentication);
/// the reconciler never retries a failed call.
pub trait PodApi {
    type Error: Error + Send + Sync + 'static;

    /// List every pod in every namespace as a single snapshot.
    fn list_pods(&self) -> impl Future<Output = Result<Vec<corev1::Pod>, Self::Error>> + Send;

    /// Delete the pod `name` in `namespace`.
    fn delete_pod(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
