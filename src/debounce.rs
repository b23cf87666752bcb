//! Debouncing as a cancellable delayed task.
//!
//! Each [`Debouncer::schedule`] cancels the task spawned by the previous call and
//! spawns a new one that delivers its value after the delay. Delivered values
//! carry a generation number, so a value whose timer fired just before being
//! superseded is discarded by [`Debouncer::recv`] instead of surfacing late.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Default quiet period before a query is evaluated.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug)]
struct Debounced<T> {
    generation: u64,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    /// Cancels the task behind the most recent `schedule`, if still pending.
    pending: Option<CancellationToken>,
    tx: mpsc::UnboundedSender<Debounced<T>>,
    rx: mpsc::UnboundedReceiver<Debounced<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            generation: 0,
            pending: None,
            tx,
            rx,
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a scheduled value has not been received yet.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace any pending value with `value`, restarting the delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let token = CancellationToken::new();
        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        let cancelled = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                () = cancelled.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    // Receiver lives as long as the debouncer; a closed channel means it was dropped.
                    let _ = tx.send(Debounced { generation, value });
                }
            }
        });

        self.pending = Some(token);
    }

    /// Drop the pending value, if any, without delivering it.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Wait for the current scheduled value to settle.
    ///
    /// Superseded values are skipped. Waits indefinitely when nothing is
    /// scheduled, which makes it suitable as a `select!` branch.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            let item = self.rx.recv().await?;
            if item.generation == self.generation && self.pending.is_some() {
                self.pending = None;
                return Some(item.value);
            }
            tracing::trace!(generation = item.generation, "Dropping superseded value");
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
