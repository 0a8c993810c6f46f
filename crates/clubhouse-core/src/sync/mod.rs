//! State controllers that keep a local view of a remote collection in step
//! with the backend.
//!
//! Every controller owns a [`ListState`] published through a
//! [`tokio::sync::watch`] channel. Operations share one lifecycle: loading is
//! raised for the whole span of the call, success reconciles the local list,
//! failure records the message and raises an error notification. Errors are
//! always handed back to the caller as well.

mod evidence;
mod golf_courses;
mod operations;
mod tags;

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

pub use evidence::EvidenceController;
pub use golf_courses::{CourseBrowser, CourseListState, GolfCoursesController};
pub use operations::{ApiOperations, OperationOptions, OperationState};
pub use tags::TagsController;

use crate::error::Result;
use crate::notify::{Notification, Notifier};

/// Snapshot of a synchronized collection.
///
/// `meta` carries per-resource extras, such as pagination for golf courses.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T, M = ()> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub meta: M,
}

impl<T, M: Default> Default for ListState<T, M> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            meta: M::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperationKind {
    /// Fetches a single record; leaves the list alone.
    Read,
    /// Replaces the list; only the most recent reload may apply.
    Reload,
    /// Changes the remote collection and announces success.
    Mutation(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    name: &'static str,
    kind: OperationKind,
}

impl Operation {
    pub(crate) const fn read(name: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Read,
        }
    }

    pub(crate) const fn reload(name: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Reload,
        }
    }

    pub(crate) const fn mutation(name: &'static str, success_message: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Mutation(success_message),
        }
    }
}

/// Shared lifecycle behind every controller.
pub(crate) struct SyncedList<T, M = ()> {
    state: watch::Sender<ListState<T, M>>,
    in_flight: AtomicUsize,
    latest_reload: AtomicU64,
    activated: AtomicBool,
    notifier: Arc<dyn Notifier>,
}

impl<T, M> SyncedList<T, M>
where
    T: Clone + Send + Sync,
    M: Clone + Default + Send + Sync,
{
    pub(crate) fn new(notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            state,
            in_flight: AtomicUsize::new(0),
            latest_reload: AtomicU64::new(0),
            activated: AtomicBool::new(false),
            notifier,
        }
    }

    pub(crate) fn snapshot(&self) -> ListState<T, M> {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ListState<T, M>> {
        self.state.subscribe()
    }

    /// `true` exactly once, on the first activation.
    pub(crate) fn first_activation(&self) -> bool {
        !self.activated.swap(true, Ordering::SeqCst)
    }

    /// Drives `call` through the shared lifecycle and applies `reconcile` to
    /// the state when it succeeds.
    ///
    /// A reload that settles after a newer reload was started is discarded:
    /// its outcome is returned but the state and notifier are left untouched.
    pub(crate) async fn run<R, F>(
        &self,
        operation: Operation,
        call: F,
        reconcile: impl FnOnce(&mut ListState<T, M>, &R),
    ) -> Result<R>
    where
        F: Future<Output = Result<R>>,
    {
        let ticket = (operation.kind == OperationKind::Reload)
            .then(|| self.latest_reload.fetch_add(1, Ordering::SeqCst) + 1);
        let _loading = self.begin();

        let result = call.await;

        if let Some(ticket) = ticket {
            if self.latest_reload.load(Ordering::SeqCst) != ticket {
                tracing::debug!("Discarding superseded {} result", operation.name);
                return result;
            }
        }

        match &result {
            Ok(value) => {
                self.state.send_modify(|state| reconcile(state, value));
                if let OperationKind::Mutation(message) = operation.kind {
                    self.notifier.notify(Notification::success(message));
                }
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!("Failed to {}: {message}", operation.name);
                self.state
                    .send_modify(|state| state.error = Some(message.clone()));
                self.notifier.notify(Notification::error(message));
            }
        }
        result
    }

    fn begin(&self) -> LoadingGuard<'_, T, M> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
        LoadingGuard { list: self }
    }
}

/// Lowers the loading flag once the last in-flight operation settles, even
/// when the operation future is dropped before completion.
struct LoadingGuard<'a, T, M> {
    list: &'a SyncedList<T, M>,
}

impl<T, M> Drop for LoadingGuard<'_, T, M> {
    fn drop(&mut self) {
        if self.list.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.list.state.send_modify(|state| state.loading = false);
        }
    }
}

/// Replaces every entry keyed `id` with `record`.
pub(crate) fn replace_keyed<T: crate::models::Keyed + Clone>(items: &mut [T], id: &str, record: &T) {
    for entry in items.iter_mut().filter(|entry| entry.key() == id) {
        *entry = record.clone();
    }
}
