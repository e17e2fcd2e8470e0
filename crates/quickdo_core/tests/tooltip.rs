use quickdo_core::{
    DelayCallback, DelayScheduler, HoverTooltipController, ThreadDelayScheduler, TimerGuard,
    POINTER_OFFSET, REVEAL_DELAY,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Deterministic scheduler double: callbacks fire when the virtual clock
/// passes their deadline, unless their guard was cancelled first.
#[derive(Clone, Default)]
struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    pending: Vec<ScheduledFire>,
}

struct ScheduledFire {
    due_at: Duration,
    cancelled: Arc<AtomicBool>,
    fire: Option<DelayCallback>,
}

impl ManualScheduler {
    fn advance(&self, by: Duration) {
        let mut due = Vec::new();
        {
            let mut inner = self.inner.lock().unwrap();
            inner.now += by;
            let now = inner.now;
            inner.pending.retain_mut(|entry| {
                if entry.due_at > now {
                    return true;
                }
                if !entry.cancelled.load(Ordering::SeqCst) {
                    if let Some(fire) = entry.fire.take() {
                        due.push(fire);
                    }
                }
                false
            });
        }
        for fire in due {
            fire();
        }
    }
}

impl DelayScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, fire: DelayCallback) -> TimerGuard {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut inner = self.inner.lock().unwrap();
        let due_at = inner.now + delay;
        inner.pending.push(ScheduledFire {
            due_at,
            cancelled: Arc::clone(&cancelled),
            fire: Some(fire),
        });
        TimerGuard::new(cancelled)
    }
}

fn controller() -> (HoverTooltipController<ManualScheduler>, ManualScheduler) {
    let scheduler = ManualScheduler::default();
    (HoverTooltipController::new(scheduler.clone()), scheduler)
}

#[test]
fn enter_then_leave_before_delay_never_shows() {
    let (mut tooltip, clock) = controller();

    tooltip.on_enter("buy milk", 40.0, 60.0);
    tooltip.on_leave();
    clock.advance(REVEAL_DELAY * 2);

    assert_eq!(tooltip.visible(), None);
}

#[test]
fn enter_plus_full_delay_shows_at_enter_time_offset_position() {
    let (mut tooltip, clock) = controller();

    tooltip.on_enter("buy milk", 100.0, 200.0);
    assert_eq!(tooltip.visible(), None);

    clock.advance(REVEAL_DELAY);

    let state = tooltip.visible().expect("tooltip should be visible");
    assert_eq!(state.text, "buy milk");
    assert_eq!(state.x, 100.0 + POINTER_OFFSET);
    assert_eq!(state.y, 200.0 + POINTER_OFFSET);
}

#[test]
fn reveal_waits_for_the_full_delay() {
    let (mut tooltip, clock) = controller();

    tooltip.on_enter("almost", 0.0, 0.0);
    clock.advance(REVEAL_DELAY - Duration::from_millis(1));
    assert_eq!(tooltip.visible(), None);

    clock.advance(Duration::from_millis(1));
    assert!(tooltip.visible().is_some());
}

#[test]
fn new_enter_supersedes_a_pending_reveal() {
    let (mut tooltip, clock) = controller();

    tooltip.on_enter("first", 10.0, 10.0);
    clock.advance(Duration::from_millis(300));
    tooltip.on_enter("second", 50.0, 70.0);

    // The first timer would have expired by now; it must not fire.
    clock.advance(Duration::from_millis(300));
    assert_eq!(tooltip.visible(), None);

    clock.advance(REVEAL_DELAY);
    let state = tooltip.visible().expect("second reveal should fire");
    assert_eq!(state.text, "second");
    assert_eq!(state.x, 50.0 + POINTER_OFFSET);
    assert_eq!(state.y, 70.0 + POINTER_OFFSET);
}

#[test]
fn new_enter_hides_a_visible_tooltip_until_its_own_reveal() {
    let (mut tooltip, clock) = controller();

    tooltip.on_enter("first", 0.0, 0.0);
    clock.advance(REVEAL_DELAY);
    assert!(tooltip.visible().is_some());

    tooltip.on_enter("second", 5.0, 5.0);
    assert_eq!(tooltip.visible(), None);

    clock.advance(REVEAL_DELAY);
    assert_eq!(tooltip.visible().unwrap().text, "second");
}

#[test]
fn leave_hides_a_visible_tooltip() {
    let (mut tooltip, clock) = controller();

    tooltip.on_enter("shown", 0.0, 0.0);
    clock.advance(REVEAL_DELAY);
    assert!(tooltip.visible().is_some());

    tooltip.on_leave();
    assert_eq!(tooltip.visible(), None);
}

#[test]
fn leave_when_idle_is_a_noop() {
    let (mut tooltip, clock) = controller();

    tooltip.on_leave();
    clock.advance(REVEAL_DELAY);
    assert_eq!(tooltip.visible(), None);
}

#[test]
fn thread_scheduler_fires_after_the_delay() {
    let scheduler = ThreadDelayScheduler::new();
    let (tx, rx) = mpsc::channel();

    let _guard = scheduler.schedule(
        Duration::from_millis(20),
        Box::new(move || {
            let _ = tx.send(());
        }),
    );

    assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
}

#[test]
fn thread_scheduler_cancel_before_fire_suppresses_the_callback() {
    let scheduler = ThreadDelayScheduler::new();
    let (tx, rx) = mpsc::channel();

    let guard = scheduler.schedule(
        Duration::from_millis(50),
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    guard.cancel();
    assert!(guard.is_cancelled());

    assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
}

#[test]
fn dropping_the_guard_cancels_the_fire() {
    let scheduler = ThreadDelayScheduler::new();
    let (tx, rx) = mpsc::channel();

    let guard = scheduler.schedule(
        Duration::from_millis(50),
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    drop(guard);

    assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
}

#[test]
fn controller_with_thread_scheduler_reveals_end_to_end() {
    let mut tooltip = HoverTooltipController::new(ThreadDelayScheduler::new());

    tooltip.on_enter("real timer", 1.0, 2.0);
    assert_eq!(tooltip.visible(), None);

    let deadline = Instant::now() + Duration::from_secs(3);
    let state = loop {
        if let Some(state) = tooltip.visible() {
            break state;
        }
        assert!(Instant::now() < deadline, "tooltip never became visible");
        std::thread::sleep(Duration::from_millis(20));
    };
    assert_eq!(state.text, "real timer");
    assert_eq!(state.x, 1.0 + POINTER_OFFSET);
    assert_eq!(state.y, 2.0 + POINTER_OFFSET);
}

#[test]
fn controller_with_thread_scheduler_enter_then_leave_stays_hidden() {
    let mut tooltip = HoverTooltipController::new(ThreadDelayScheduler::new());

    tooltip.on_enter("never shown", 0.0, 0.0);
    tooltip.on_leave();

    std::thread::sleep(REVEAL_DELAY + Duration::from_millis(200));
    assert_eq!(tooltip.visible(), None);
}
