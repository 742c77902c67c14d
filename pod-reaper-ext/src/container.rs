use super::*;

pub trait ContainerStatusExt {
    fn waiting(name: impl ToString, reason: impl ToString) -> Self;
    fn running(name: impl ToString) -> Self;
    fn waiting_reason(&self) -> Option<&str>;
}

impl ContainerStatusExt for corev1::ContainerStatus {
    fn waiting(name: impl ToString, reason: impl ToString) -> Self {
        let waiting = corev1::ContainerStateWaiting {
            reason: Some(reason.to_string()),
            ..default()
        };
        let state = corev1::ContainerState {
            waiting: Some(waiting),
            ..default()
        };
        Self {
            name: name.to_string(),
            state: Some(state),
            ..default()
        }
    }

    fn running(name: impl ToString) -> Self {
        let state = corev1::ContainerState {
            running: Some(default()),
            ..default()
        };
        Self {
            name: name.to_string(),
            ready: true,
            state: Some(state),
            ..default()
        }
    }

    /// The reason a container is waiting, if it is waiting and the kubelet gave one.
    fn waiting_reason(&self) -> Option<&str> {
        self.state.as_ref()?.waiting.as_ref()?.reason.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waiting_reason_of_waiting_container() {
        let status = corev1::ContainerStatus::waiting("app", "CreateContainerError");

        assert_eq!(status.name, "app");
        assert_eq!(status.waiting_reason(), Some("CreateContainerError"));
    }

    #[test]
    fn waiting_reason_of_running_container() {
        let status = corev1::ContainerStatus::running("app");

        assert!(status.ready);
        assert!(status.waiting_reason().is_none());
    }

    #[test]
    fn waiting_reason_without_reason() {
        let status = corev1::ContainerStatus {
            name: "app".to_string(),
            state: Some(corev1::ContainerState {
                waiting: Some(default()),
                ..default()
            }),
            ..default()
        };

        assert!(status.waiting_reason().is_none());
    }

    #[test]
    fn waiting_reason_without_state() {
        let status = corev1::ContainerStatus {
            name: "app".to_string(),
            ..default()
        };

        assert!(status.waiting_reason().is_none());
    }
}
