use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use super::state::{NavAction, ScrollSource};
use super::throttle::{Throttle, ThrottleDecision};
use crate::config;

/// Schedules a trailing run after the given delay. Dropping the returned
/// guard cancels the run.
pub type ScheduleTrailing = Box<dyn Fn(u32, Box<dyn FnOnce()>) -> Box<dyn Any>>;

struct TrackerInner {
    source: Box<dyn ScrollSource>,
    clock: Box<dyn Fn() -> f64>,
    schedule: ScheduleTrailing,
    on_action: Callback<NavAction>,
    throttle: RefCell<Throttle>,
    trailing: RefCell<Option<Box<dyn Any>>>,
    released: Cell<bool>,
    detach: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl TrackerInner {
    fn sample(&self) {
        if self.released.get() {
            return;
        }
        if let Some(action) = NavAction::sample(self.source.as_ref()) {
            self.on_action.emit(action);
        }
    }
}

/// Throttled scroll tracking for the navbar. Owns the throttle, the pending
/// trailing run and the listener teardown; all of it is released on drop.
pub struct ScrollTracker {
    inner: Rc<TrackerInner>,
}

impl ScrollTracker {
    pub fn new<S, C>(source: S, clock: C, schedule: ScheduleTrailing, on_action: Callback<NavAction>) -> Self
    where
        S: ScrollSource + 'static,
        C: Fn() -> f64 + 'static,
    {
        Self {
            inner: Rc::new(TrackerInner {
                source: Box::new(source),
                clock: Box::new(clock),
                schedule,
                on_action,
                throttle: RefCell::new(Throttle::new(config::SCROLL_THROTTLE_MS)),
                trailing: RefCell::new(None),
                released: Cell::new(false),
                detach: RefCell::new(None),
            }),
        }
    }

    /// Dispatches the current offset right away, bypassing the throttle.
    pub fn sample(&self) {
        self.inner.sample();
    }

    pub fn on_scroll(&self) {
        on_scroll(&self.inner);
    }

    /// Event handler that stops doing anything once the tracker is gone.
    pub fn scroll_handler(&self) -> impl Fn() + 'static {
        let inner = Rc::downgrade(&self.inner);
        move || {
            if let Some(inner) = inner.upgrade() {
                on_scroll(&inner);
            }
        }
    }

    /// Registers the listener teardown, run once on release.
    pub fn on_release(&self, detach: impl FnOnce() + 'static) {
        *self.inner.detach.borrow_mut() = Some(Box::new(detach));
    }

    pub fn is_released(&self) -> bool {
        self.inner.released.get()
    }

    pub fn release(&self) {
        if self.inner.released.replace(true) {
            return;
        }
        debug!("Releasing navbar scroll subscription");
        self.inner.trailing.borrow_mut().take();
        let detach = self.inner.detach.borrow_mut().take();
        if let Some(detach) = detach {
            detach();
        }
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.release();
    }
}

fn on_scroll(inner: &Rc<TrackerInner>) {
    if inner.released.get() {
        return;
    }
    let decision = inner.throttle.borrow_mut().on_event((inner.clock)());
    match decision {
        ThrottleDecision::Fire => inner.sample(),
        ThrottleDecision::Defer(delay) => {
            let weak: Weak<TrackerInner> = Rc::downgrade(inner);
            let guard = (inner.schedule)(
                delay,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.throttle.borrow_mut().on_trailing((inner.clock)());
                        // Reads the offset at fire time, not at event time
                        inner.sample();
                    }
                }),
            );
            *inner.trailing.borrow_mut() = Some(guard);
        }
        ThrottleDecision::Drop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SharedScroll(Rc<Cell<f64>>);

    impl ScrollSource for SharedScroll {
        fn scroll_offset(&self) -> Option<f64> {
            Some(self.0.get())
        }
    }

    struct CancelFlag(Rc<Cell<bool>>);

    impl Drop for CancelFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    struct Harness {
        offset: Rc<Cell<f64>>,
        now: Rc<Cell<f64>>,
        pending: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
        cancelled: Rc<Cell<bool>>,
        actions: Rc<RefCell<Vec<NavAction>>>,
        tracker: ScrollTracker,
    }

    impl Harness {
        fn new() -> Self {
            let offset = Rc::new(Cell::new(0.0));
            let now = Rc::new(Cell::new(0.0));
            let pending: Rc<RefCell<Vec<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Vec::new()));
            let cancelled = Rc::new(Cell::new(false));
            let actions: Rc<RefCell<Vec<NavAction>>> = Rc::new(RefCell::new(Vec::new()));

            let schedule: ScheduleTrailing = {
                let pending = pending.clone();
                let cancelled = cancelled.clone();
                Box::new(move |_delay: u32, run: Box<dyn FnOnce()>| {
                    pending.borrow_mut().push(run);
                    Box::new(CancelFlag(cancelled.clone())) as Box<dyn Any>
                })
            };
            let clock = {
                let now = now.clone();
                move || now.get()
            };
            let on_action = {
                let actions = actions.clone();
                Callback::from(move |action| actions.borrow_mut().push(action))
            };

            let tracker = ScrollTracker::new(SharedScroll(offset.clone()), clock, schedule, on_action);
            Self { offset, now, pending, cancelled, actions, tracker }
        }

        fn scroll_to(&self, at: f64, offset: f64) {
            self.now.set(at);
            self.offset.set(offset);
            self.tracker.on_scroll();
        }

        fn run_pending(&self) {
            let runs: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for run in runs {
                run();
            }
        }

        fn dispatched(&self) -> Vec<NavAction> {
            self.actions.borrow().clone()
        }
    }

    #[test]
    fn trailing_run_reads_offset_at_fire_time() {
        let h = Harness::new();
        h.scroll_to(0.0, 10.0);
        h.scroll_to(30.0, 60.0);
        assert_eq!(h.dispatched(), vec![NavAction::Scrolled(10.0)]);

        h.offset.set(120.0);
        h.now.set(100.0);
        h.run_pending();
        assert_eq!(h.dispatched(), vec![NavAction::Scrolled(10.0), NavAction::Scrolled(120.0)]);
    }

    #[test]
    fn dropped_tracker_never_dispatches_pending_run() {
        let h = Harness::new();
        h.scroll_to(0.0, 10.0);
        h.scroll_to(30.0, 80.0);
        assert_eq!(h.pending.borrow().len(), 1);

        let Harness { tracker, pending, cancelled, actions, .. } = h;
        drop(tracker);
        assert!(cancelled.get());

        let runs: Vec<_> = pending.borrow_mut().drain(..).collect();
        for run in runs {
            run();
        }
        assert_eq!(*actions.borrow(), vec![NavAction::Scrolled(10.0)]);
    }

    #[test]
    fn release_is_idempotent() {
        let h = Harness::new();
        let detached = Rc::new(Cell::new(0));
        {
            let detached = detached.clone();
            h.tracker.on_release(move || detached.set(detached.get() + 1));
        }

        h.tracker.release();
        h.tracker.release();
        assert!(h.tracker.is_released());
        assert_eq!(detached.get(), 1);

        h.scroll_to(500.0, 300.0);
        h.tracker.sample();
        assert!(h.dispatched().is_empty());
    }

    #[test]
    fn handler_outliving_tracker_is_inert() {
        let h = Harness::new();
        let handler = h.tracker.scroll_handler();
        handler();
        assert_eq!(h.dispatched(), vec![NavAction::Scrolled(0.0)]);

        let Harness { tracker, actions, .. } = h;
        drop(tracker);
        handler();
        assert_eq!(actions.borrow().len(), 1);
    }

    #[test]
    fn pending_run_releases_throttle_for_next_event() {
        let h = Harness::new();
        h.scroll_to(0.0, 0.0);
        h.scroll_to(20.0, 40.0);
        h.scroll_to(40.0, 70.0);
        assert_eq!(h.pending.borrow().len(), 1);

        h.now.set(100.0);
        h.run_pending();
        h.scroll_to(250.0, 90.0);
        assert_eq!(
            h.dispatched(),
            vec![NavAction::Scrolled(0.0), NavAction::Scrolled(70.0), NavAction::Scrolled(90.0)]
        );
    }
}
