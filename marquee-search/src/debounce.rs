//! Debouncing of rapid input updates.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Coalesces bursts of updates into the last value of each burst.
///
/// A value is forwarded to the output channel once `delay` has passed
/// without another update. Every update restarts the timer. Shutting down
/// (or dropping) the debouncer discards whatever is pending.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the debouncing task, emitting settled values into `output`.
    pub fn spawn(delay: Duration, output: mpsc::UnboundedSender<T>) -> Self {
        let (input, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_debounce_loop(delay, receiver, output));
        Self { input, task }
    }

    /// Feeds an update, superseding any value still waiting.
    ///
    /// Returns `false` once the debouncer has stopped.
    pub fn push(&self, value: T) -> bool {
        self.input.send(value).is_ok()
    }

    /// Stops the task; a pending value is never emitted.
    pub fn shutdown(self) {
        // Drop aborts the task
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_debounce_loop<T>(
    delay: Duration,
    mut receiver: mpsc::UnboundedReceiver<T>,
    output: mpsc::UnboundedSender<T>,
) {
    while let Some(mut pending) = receiver.recv().await {
        loop {
            tokio::select! {
                next = receiver.recv() => match next {
                    Some(value) => pending = value,
                    None => return,
                },
                () = tokio::time::sleep(delay) => {
                    if output.send(pending).is_err() {
                        return;
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(800);

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_only_last_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::spawn(DELAY, tx);

        for partial in ["b", "ba", "bat", "batm", "batman"] {
            debouncer.push(partial.to_string());
            tokio::time::sleep(Duration::from_millis(200)).await;
        }

        tokio::time::sleep(DELAY).await;
        assert_eq!(rx.recv().await.as_deref(), Some("batman"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_update_restarts_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::spawn(DELAY, tx);

        debouncer.push(1);
        tokio::time::sleep(Duration::from_millis(700)).await;
        debouncer.push(2);
        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(rx.try_recv().ok(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_emit_separately() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::spawn(DELAY, tx);

        debouncer.push("first");
        tokio::time::sleep(DELAY * 2).await;
        debouncer.push("second");
        tokio::time::sleep(DELAY * 2).await;

        assert_eq!(rx.recv().await, Some("first"));
        assert_eq!(rx.recv().await, Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_discards_pending_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::spawn(DELAY, tx);

        debouncer.push("pending");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.shutdown();
        tokio::time::sleep(DELAY * 2).await;

        // Sender side is gone with the aborted task
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_updates_no_emission() {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let _debouncer = Debouncer::spawn(DELAY, tx);

        tokio::time::sleep(DELAY * 3).await;
        assert!(rx.try_recv().is_err());
    }
}
