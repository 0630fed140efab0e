//! Cancellable deferred board reset.
//!
//! After a round ends the board stays visible for a short delay before it
//! is cleared. The delay runs as a one-shot tokio task that posts a
//! [`ResetDue`] message back to the caller's event loop; the engine itself
//! is never touched from the task. Scheduling again or cancelling bumps a
//! generation counter so a message that was already queued is recognised
//! as stale.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Message posted when a scheduled reset fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetDue {
    generation: u64,
}

/// One-shot, cancellable reset scheduler.
#[derive(Debug)]
pub struct ResetTimer {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<ResetDue>,
}

impl ResetTimer {
    /// Creates a timer and the receiver its messages arrive on.
    #[instrument]
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ResetDue>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = Self {
            delay,
            generation: 0,
            pending: None,
            tx,
        };
        (timer, rx)
    }

    /// Delay between scheduling and firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules a reset, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self) {
        self.cancel();
        let due = ResetDue {
            generation: self.generation,
        };
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone only when the event loop has shut down.
            let _ = tx.send(due);
        }));
        debug!(generation = due.generation, "Board reset scheduled");
    }

    /// Invalidates the pending reset, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!(generation = self.generation, "Pending board reset cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns true while a scheduled reset has not been accepted or cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes a fired message. Returns true if it belongs to the current
    /// schedule and the reset should be applied.
    #[instrument(skip(self))]
    pub fn accept(&mut self, due: ResetDue) -> bool {
        if self.pending.is_none() || due.generation != self.generation {
            debug!(
                current = self.generation,
                received = due.generation,
                "Ignoring stale board reset"
            );
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_reset_fires_after_delay() {
        let (mut timer, mut rx) = ResetTimer::new(DELAY);
        timer.schedule();
        assert!(timer.is_pending());

        tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());

        let due = rx.recv().await.expect("Reset never fired");
        assert!(timer.accept(due));
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reset_never_fires() {
        let (mut timer, mut rx) = ResetTimer::new(DELAY);
        timer.schedule();
        timer.cancel();
        assert!(!timer.is_pending());

        tokio::time::sleep(DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_invalidates_previous() {
        let (mut timer, mut rx) = ResetTimer::new(DELAY);
        timer.schedule();
        let first = ResetDue {
            generation: timer.generation,
        };
        timer.schedule();

        assert!(!timer.accept(first));
        assert!(timer.is_pending());

        let due = rx.recv().await.expect("Reset never fired");
        assert!(timer.accept(due));
        // A duplicate of an accepted message is ignored.
        assert!(!timer.accept(due));
    }
}
