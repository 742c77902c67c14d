pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

pub use container::ContainerStatusExt;

mod container;

pub trait PodExt {
    fn new(name: impl ToString, namespace: impl ToString) -> Self;
    fn with_container_statuses(
        self,
        statuses: impl IntoIterator<Item = corev1::ContainerStatus>,
    ) -> Self;
    fn container_statuses(&self) -> &[corev1::ContainerStatus];
    fn waiting_reasons(&self) -> impl Iterator<Item = &str>;
}

impl PodExt for corev1::Pod {
    fn new(name: impl ToString, namespace: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::with_namespace(name, namespace);
        Self {
            metadata,
            ..default()
        }
    }

    fn with_container_statuses(
        self,
        statuses: impl IntoIterator<Item = corev1::ContainerStatus>,
    ) -> Self {
        let container_statuses = Some(statuses.into_iter().collect());
        let status = corev1::PodStatus {
            container_statuses,
            ..self.status.unwrap_or_default()
        };
        Self {
            status: Some(status),
            ..self
        }
    }

    /// Container statuses as reported by the kubelet, in reported order.
    ///
    /// A pod that has not been scheduled yet has no status at all, which is
    /// indistinguishable here from a pod without containers.
    fn container_statuses(&self) -> &[corev1::ContainerStatus] {
        self.status
            .as_ref()
            .and_then(|status| status.container_statuses.as_deref())
            .unwrap_or_default()
    }

    fn waiting_reasons(&self) -> impl Iterator<Item = &str> {
        self.container_statuses()
            .iter()
            .filter_map(|status| status.waiting_reason())
    }
}

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
