use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiescence window before a search term is forwarded.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Forwards only the last search term typed within a quiet window.
///
/// Each new term restarts the window. Dropping the debouncer aborts the
/// pending timer, so no term is forwarded after teardown.
pub struct SearchDebouncer {
    input: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl SearchDebouncer {
    /// Must be called inside a tokio runtime.
    pub fn spawn(window: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output, output_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_debounce(input_rx, output, window));
        (Self { input, task }, output_rx)
    }

    pub fn push(&self, term: impl Into<String>) {
        // The task only stops once the debouncer is dropped.
        let _ = self.input.send(term.into());
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_debounce(
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<String>,
    window: Duration,
) {
    while let Some(mut latest) = input.recv().await {
        loop {
            match tokio::time::timeout(window, input.recv()).await {
                Ok(Some(term)) => latest = term,
                Ok(None) => return,
                Err(_) => break,
            }
        }
        if output.send(latest).is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn burst_of_terms_forwards_last_once() {
        let (debouncer, mut terms) = SearchDebouncer::spawn(SEARCH_DEBOUNCE);
        let started = Instant::now();

        for term in ["p", "pe", "peb", "pebble"] {
            debouncer.push(term);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(terms.recv().await.as_deref(), Some("pebble"));
        assert!(started.elapsed() >= Duration::from_millis(600));
        assert!(tokio::time::timeout(Duration::from_secs(5), terms.recv())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn separated_terms_are_forwarded_separately() {
        let (debouncer, mut terms) = SearchDebouncer::spawn(SEARCH_DEBOUNCE);

        debouncer.push("old");
        assert_eq!(terms.recv().await.as_deref(), Some("old"));
        debouncer.push("");
        assert_eq!(terms.recv().await.as_deref(), Some(""));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_term() {
        let (debouncer, mut terms) = SearchDebouncer::spawn(SEARCH_DEBOUNCE);
        debouncer.push("links");
        drop(debouncer);

        assert_eq!(terms.recv().await, None);
    }
}
