//! Hover tooltip reveal state machine.
//!
//! # Responsibility
//! - Manage the single delayed, cancellable reveal timer.
//! - Publish the currently visible tooltip, if any.
//!
//! # Invariants
//! - At most one reveal timer is outstanding; a new enter supersedes.
//! - The published position is captured at enter time, not at expiry.
//! - A fire racing a cancel can never publish a superseded tooltip.

use crate::tooltip::timer::{DelayScheduler, TimerGuard};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Delay between pointer enter and tooltip reveal.
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Offset applied to both pointer axes for the reveal position.
pub const POINTER_OFFSET: f64 = 10.0;

/// Currently displayed tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    /// Full task text shown by the tooltip.
    pub text: String,
    /// Horizontal reveal position (pointer x at enter time + offset).
    pub x: f64,
    /// Vertical reveal position (pointer y at enter time + offset).
    pub y: f64,
}

#[derive(Debug, Default)]
struct RevealSlot {
    /// Bumped on every enter/leave; stale fires compare against it.
    generation: u64,
    visible: Option<TooltipState>,
}

/// Debounced hover-reveal controller.
///
/// Two states: idle, and pending-then-visible for the most recent enter.
/// Exactly one instance should serve a UI session.
pub struct HoverTooltipController<S: DelayScheduler> {
    scheduler: S,
    slot: Arc<Mutex<RevealSlot>>,
    pending: Option<TimerGuard>,
}

impl<S: DelayScheduler> HoverTooltipController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            slot: Arc::new(Mutex::new(RevealSlot::default())),
            pending: None,
        }
    }

    /// Handles pointer enter over a hover region.
    ///
    /// Cancels any outstanding reveal, hides a visible tooltip, and
    /// schedules a new reveal at the enter-time position plus the offset.
    pub fn on_enter(&mut self, text: &str, x: f64, y: f64) {
        self.supersede();

        let generation = {
            let slot = lock_slot(&self.slot);
            slot.generation
        };

        let state = TooltipState {
            text: text.to_string(),
            x: x + POINTER_OFFSET,
            y: y + POINTER_OFFSET,
        };
        let slot = Arc::clone(&self.slot);
        let guard = self.scheduler.schedule(
            REVEAL_DELAY,
            Box::new(move || {
                let mut slot = lock_slot(&slot);
                if slot.generation == generation {
                    slot.visible = Some(state);
                }
            }),
        );
        self.pending = Some(guard);
    }

    /// Handles pointer leave: cancels any pending reveal and hides the
    /// tooltip unconditionally.
    pub fn on_leave(&mut self) {
        self.supersede();
    }

    /// Returns a snapshot of the currently visible tooltip.
    pub fn visible(&self) -> Option<TooltipState> {
        lock_slot(&self.slot).visible.clone()
    }

    fn supersede(&mut self) {
        if let Some(guard) = self.pending.take() {
            guard.cancel();
        }
        let mut slot = lock_slot(&self.slot);
        slot.generation += 1;
        slot.visible = None;
    }
}

fn lock_slot(slot: &Mutex<RevealSlot>) -> MutexGuard<'_, RevealSlot> {
    // A poisoned slot only means a panicked timer thread; the state itself
    // stays usable.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
