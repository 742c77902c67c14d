use pod_reaper_ext as k8s;

use k8s::corev1;

pub use api::PodApi;
pub use inspector::REMEDIABLE_WAITING_REASONS;
pub use inspector::should_remediate;
pub use reconciler::DEFAULT_INTERVAL;
pub use reconciler::PassSummary;
pub use reconciler::Reconciler;
pub use shutdown::ShutdownToken;
pub use shutdown::ShutdownTrigger;

pub mod shutdown;

mod api;
mod inspector;
mod reconciler;
