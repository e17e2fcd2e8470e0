//! Cancellable one-shot delay scheduling.
//!
//! # Responsibility
//! - Define the scheduling seam used by the hover controller.
//! - Provide the thread-backed production scheduler.
//!
//! # Invariants
//! - A cancelled guard never fires its callback.
//! - Dropping a guard cancels it; cancellation is idempotent.
//! - Scheduling is not tied to any particular event-loop API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// One-shot callback accepted by a scheduler.
pub type DelayCallback = Box<dyn FnOnce() + Send + 'static>;

/// Seam for scheduling a single delayed, cancellable callback.
pub trait DelayScheduler {
    /// Schedules `fire` to run once after `delay` unless cancelled first.
    fn schedule(&self, delay: Duration, fire: DelayCallback) -> TimerGuard;
}

/// Cancellation handle for one scheduled callback.
///
/// The guard owns the pending fire: dropping it cancels, so holders must
/// keep the guard alive until the callback is allowed to run.
#[derive(Debug)]
pub struct TimerGuard {
    cancelled: Arc<AtomicBool>,
    wake_tx: Option<Sender<()>>,
}

impl TimerGuard {
    /// Creates a guard around a shared cancellation flag.
    ///
    /// Scheduler implementations must check the flag immediately before
    /// invoking the callback.
    pub fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self {
            cancelled,
            wake_tx: None,
        }
    }

    fn with_waker(cancelled: Arc<AtomicBool>, wake_tx: Sender<()>) -> Self {
        Self {
            cancelled,
            wake_tx: Some(wake_tx),
        }
    }

    /// Cancels the pending fire. Safe to call repeatedly or after expiry.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(tx) = &self.wake_tx {
            // Waking early is best-effort; the timer thread may be gone.
            let _ = tx.send(());
        }
    }

    /// Returns whether this guard has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Thread-backed scheduler: one short-lived timer thread per reveal.
///
/// Cancellation wakes the thread early instead of letting it sleep out the
/// full delay. At most one timer is alive in practice because the hover
/// controller cancels the previous guard on every enter/leave.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelayScheduler;

impl ThreadDelayScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl DelayScheduler for ThreadDelayScheduler {
    fn schedule(&self, delay: Duration, fire: DelayCallback) -> TimerGuard {
        let (wake_tx, wake_rx) = mpsc::channel::<()>();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::spawn(move || {
            // Timeout means the delay elapsed without a cancel wake-up.
            // Any message or disconnect is a cancellation.
            if let Err(RecvTimeoutError::Timeout) = wake_rx.recv_timeout(delay) {
                if !flag.load(Ordering::SeqCst) {
                    fire();
                }
            }
        });

        TimerGuard::with_waker(cancelled, wake_tx)
    }
}
