use k8s::PodExt as _;

use super::*;

/// Container waiting reasons that mark a pod for deletion.
pub const REMEDIABLE_WAITING_REASONS: [&str; 2] = ["CreateContainerError", "CrashLoopBackOff"];

/// Decide whether `pod` should be deleted so its controller recreates it.
///
/// True as soon as any container is waiting with one of
/// [`REMEDIABLE_WAITING_REASONS`]. Init containers are not considered.
pub fn should_remediate(pod: &corev1::Pod) -> bool {
    pod.waiting_reasons().any(|reason| {
        REMEDIABLE_WAITING_REASONS
            .iter()
            .any(|remediable| *remediable == reason)
    })
}
