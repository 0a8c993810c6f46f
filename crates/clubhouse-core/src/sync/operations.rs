use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use reqwest::Method;
use tokio::sync::watch;

use crate::error::Result;
use crate::notify::{Notification, Notifier};
use crate::transport::{ApiClient, ApiResponse, RequestOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOptions {
    /// Raise notifications for the outcome.
    pub show_toast: bool,
    /// Track the call in the `loading` flag.
    pub loading_state: bool,
    /// Announced on success; nothing is announced when absent.
    pub success_message: Option<String>,
}

impl Default for OperationOptions {
    fn default() -> Self {
        Self {
            show_toast: true,
            loading_state: true,
            success_message: None,
        }
    }
}

impl OperationOptions {
    pub fn with_success(message: impl Into<String>) -> Self {
        Self {
            success_message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn quiet() -> Self {
        Self {
            show_toast: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Runs ad-hoc backend calls with the same loading/error/notification
/// lifecycle the resource controllers use.
pub struct ApiOperations {
    api: ApiClient,
    state: watch::Sender<OperationState>,
    in_flight: AtomicUsize,
    notifier: Arc<dyn Notifier>,
}

impl ApiOperations {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(OperationState::default());
        Self {
            api,
            state,
            in_flight: AtomicUsize::new(0),
            notifier,
        }
    }

    pub fn state(&self) -> OperationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<OperationState> {
        self.state.subscribe()
    }

    pub async fn execute<R, F>(&self, call: F, options: &OperationOptions) -> Result<R>
    where
        F: Future<Output = Result<R>>,
    {
        self.state.send_modify(|state| state.error = None);
        let _loading = options.loading_state.then(|| self.begin());

        let result = call.await;
        match &result {
            Ok(_) => {
                if let Some(message) = options.success_message.as_deref().filter(|_| options.show_toast) {
                    self.notifier.notify(Notification::success(message));
                }
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!("API operation failed: {message}");
                self.state
                    .send_modify(|state| state.error = Some(message.clone()));
                if options.show_toast {
                    self.notifier.notify(Notification::error(message));
                }
            }
        }
        result
    }

    /// Issues `method endpoint` through [`Self::execute`].
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        request: RequestOptions,
        options: &OperationOptions,
    ) -> Result<ApiResponse> {
        self.execute(self.api.request(method, endpoint, request), options)
            .await
    }

    fn begin(&self) -> BusyGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| state.loading = true);
        BusyGuard { operations: self }
    }
}

struct BusyGuard<'a> {
    operations: &'a ApiOperations,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.operations.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.operations
                .state
                .send_modify(|state| state.loading = false);
        }
    }
}
