//! In-process backend for exercising clients against real HTTP.

use std::sync::{Arc, Mutex};

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::ApiConfig;
use crate::notify::{Notification, Notifier};
use crate::transport::ApiClient;

pub async fn spawn_backend(router: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("serve test backend");
    });
    client_for(&format!("http://{addr}"))
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    drop(listener);
    client_for(&format!("http://{addr}"))
}

fn client_for(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        bearer_token: "test-token".to_string(),
        ..ApiConfig::default()
    };
    ApiClient::new(&config).expect("test client")
}

/// Holds a handler until the test releases it.
#[derive(Default)]
pub struct Gate {
    pub arrived: Notify,
    pub release: Notify,
}

impl Gate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn pass(&self) {
        self.arrived.notify_one();
        self.release.notified().await;
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().expect("notifier lock").push(notification);
    }
}
