//! Backend reachability probe.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::transport::ApiClient;

const HEALTH_ENDPOINT: &str = "/health";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Connected,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionStatus {
    pub status: ConnectionState,
    pub message: String,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionState::Connected
    }
}

/// `true` only on a 2xx answer; any failure is logged and reads as `false`.
pub async fn health_check(api: &ApiClient) -> bool {
    match api.probe(HEALTH_ENDPOINT).await {
        Ok(healthy) => healthy,
        Err(error) => {
            tracing::error!("Health check failed: {error}");
            false
        }
    }
}

/// Classifies reachability; a failure during the probe carries its own text.
pub async fn test_connection(api: &ApiClient) -> ConnectionStatus {
    match api.probe(HEALTH_ENDPOINT).await {
        Ok(true) => ConnectionStatus {
            status: ConnectionState::Connected,
            message: "API is healthy".to_string(),
        },
        Ok(false) => ConnectionStatus {
            status: ConnectionState::Error,
            message: "API health check failed".to_string(),
        },
        Err(error) => {
            tracing::error!("Health check failed: {error}");
            ConnectionStatus {
                status: ConnectionState::Error,
                message: error.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorState {
    pub connected: bool,
    pub error: Option<String>,
}

/// Dashboard connection indicator; probes once when activated.
#[derive(Debug, Clone)]
pub struct ConnectionMonitor {
    api: ApiClient,
    state: Arc<Mutex<MonitorState>>,
    activated: Arc<AtomicBool>,
}

impl ConnectionMonitor {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::default(),
            activated: Arc::default(),
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs the probe on first activation only; later calls return the cached state.
    pub async fn activate(&self) -> MonitorState {
        if self.activated.swap(true, Ordering::SeqCst) {
            return self.state();
        }

        let result = test_connection(&self.api).await;
        let next = MonitorState {
            connected: result.is_connected(),
            error: (!result.is_connected()).then_some(result.message),
        };
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next.clone();
        next
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{spawn_backend, unreachable_client};

    #[tokio::test]
    async fn healthy_backend_reports_connected() {
        let api = spawn_backend(Router::new().route("/health", get(|| async { "ok" }))).await;
        assert!(health_check(&api).await);
        assert_eq!(
            test_connection(&api).await,
            ConnectionStatus {
                status: ConnectionState::Connected,
                message: "API is healthy".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unhealthy_backend_reports_generic_failure() {
        let api = spawn_backend(Router::new().route(
            "/health",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        ))
        .await;
        assert!(!health_check(&api).await);
        let status = test_connection(&api).await;
        assert_eq!(status.status, ConnectionState::Error);
        assert_eq!(status.message, "API health check failed");
    }

    #[tokio::test]
    async fn unreachable_backend_carries_failure_text() {
        let api = unreachable_client().await;
        assert!(!health_check(&api).await);
        let status = test_connection(&api).await;
        assert_eq!(status.status, ConnectionState::Error);
        assert_ne!(status.message, "API health check failed");
    }

    #[tokio::test]
    async fn monitor_probes_once() {
        let api = spawn_backend(Router::new().route("/health", get(|| async { "ok" }))).await;
        let monitor = ConnectionMonitor::new(api);
        assert_eq!(monitor.state(), MonitorState::default());

        let first = monitor.activate().await;
        assert!(first.connected);
        assert_eq!(first.error, None);
        assert_eq!(monitor.activate().await, first);
    }

    #[test]
    fn status_serializes_lowercase() {
        let status = ConnectionStatus {
            status: ConnectionState::Connected,
            message: "API is healthy".to_string(),
        };
        assert_eq!(
            serde_json::to_value(status).unwrap(),
            serde_json::json!({ "status": "connected", "message": "API is healthy" })
        );
    }
}
