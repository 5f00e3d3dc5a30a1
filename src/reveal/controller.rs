use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use yew::{Callback, Classes, classes};

use super::observer::{IntersectionEntry, ObservationHandle, ObserverOptions, ViewportObserver};

/// Transition start offset for staggered siblings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDelay {
    #[default]
    None,
    Ms100,
    Ms200,
    Ms300,
}

impl RevealDelay {
    /// Rounds down to the nearest tag; anything past 300ms uses the last one.
    pub fn from_millis(ms: u32) -> Self {
        match ms {
            0..=99 => RevealDelay::None,
            100..=199 => RevealDelay::Ms100,
            200..=299 => RevealDelay::Ms200,
            _ => RevealDelay::Ms300,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            RevealDelay::None => None,
            RevealDelay::Ms100 => Some("delay-100"),
            RevealDelay::Ms200 => Some("delay-200"),
            RevealDelay::Ms300 => Some("delay-300"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    Triggered,
    Pending,
    AlreadyTriggered,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    has_triggered: bool,
}

impl RevealState {
    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    pub fn apply(&mut self, entry: &IntersectionEntry) -> RevealTransition {
        if self.has_triggered {
            RevealTransition::AlreadyTriggered
        } else if entry.is_intersecting {
            self.has_triggered = true;
            RevealTransition::Triggered
        } else {
            RevealTransition::Pending
        }
    }
}

pub fn reveal_classes(extra: &Classes, visible: bool, delay: RevealDelay) -> Classes {
    classes!(
        extra.clone(),
        "reveal-hidden",
        visible.then_some("reveal-visible"),
        delay.class()
    )
}

/// One-shot reveal bound to a single observed target.
pub struct RevealController {
    state: Rc<Cell<RevealState>>,
    handle: Rc<RefCell<Option<ObservationHandle>>>,
}

impl RevealController {
    /// Starts observing `target`. If the observer refuses the target the
    /// block is revealed right away.
    pub fn mount<O: ViewportObserver>(
        observer: &O,
        target: &O::Target,
        options: ObserverOptions,
        on_reveal: Callback<()>,
    ) -> Self {
        let state = Rc::new(Cell::new(RevealState::default()));
        let handle: Rc<RefCell<Option<ObservationHandle>>> = Rc::new(RefCell::new(None));

        let on_intersect = {
            let state = state.clone();
            let handle = handle.clone();
            let on_reveal = on_reveal.clone();
            Box::new(move |entry: IntersectionEntry| {
                let mut current = state.get();
                let transition = current.apply(&entry);
                state.set(current);
                if transition == RevealTransition::Triggered {
                    debug!("Block revealed at ratio {:.2}", entry.intersection_ratio);
                    if let Some(handle) = handle.borrow().as_ref() {
                        handle.release();
                    }
                    on_reveal.emit(());
                }
            })
        };

        match observer.observe(target, options, on_intersect) {
            Ok(observation) => {
                // Synchronous observers may have fired before we got the handle.
                if state.get().has_triggered() {
                    observation.release();
                }
                *handle.borrow_mut() = Some(observation);
            }
            Err(e) => {
                warn!("Reveal falling back to visible: {}", e);
                state.set(RevealState { has_triggered: true });
                on_reveal.emit(());
            }
        }

        Self { state, handle }
    }

    /// Controller for a block that is visible from the start, used when the
    /// browser cannot observe intersections at all.
    pub fn revealed(on_reveal: Callback<()>) -> Self {
        on_reveal.emit(());
        Self {
            state: Rc::new(Cell::new(RevealState { has_triggered: true })),
            handle: Rc::new(RefCell::new(None)),
        }
    }

    pub fn has_triggered(&self) -> bool {
        self.state.get().has_triggered()
    }

    pub fn is_observing(&self) -> bool {
        self.handle
            .borrow()
            .as_ref()
            .map(|handle| handle.is_active())
            .unwrap_or(false)
    }

    /// Stops observing. Safe to call any number of times.
    pub fn unmount(&self) {
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.release();
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.unmount();
    }
}
