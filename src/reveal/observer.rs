use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

/// Margins applied to the viewport before intersection is computed, in px.
/// Negative values shrink the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl RootMargin {
    pub fn to_css(&self) -> String {
        format!("{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: RootMargin {
                bottom: config::REVEAL_BOTTOM_MARGIN_PX,
                ..RootMargin::default()
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

pub type IntersectCallback = Box<dyn FnMut(IntersectionEntry)>;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("IntersectionObserver is not available in this browser")]
    Unsupported,
    #[error("failed to create IntersectionObserver: {0}")]
    Construct(String),
}

/// A live subscription to viewport intersection changes for one target.
///
/// Releasing is idempotent and also happens on drop. Anything passed to
/// [`ObservationHandle::retain`] lives until the handle itself is dropped,
/// so a callback may release its own handle while it is running.
pub struct ObservationHandle {
    active: Rc<Cell<bool>>,
    release: RefCell<Option<Box<dyn FnOnce()>>>,
    retained: Vec<Box<dyn Any>>,
}

impl ObservationHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
            release: RefCell::new(Some(Box::new(release))),
            retained: Vec::new(),
        }
    }

    pub fn retain(mut self, value: impl Any) -> Self {
        self.retained.push(Box::new(value));
        self
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn release(&self) {
        let release = self.release.borrow_mut().take();
        if let Some(release) = release {
            self.active.set(false);
            release();
        }
    }
}

impl Drop for ObservationHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Source of viewport intersection notifications.
pub trait ViewportObserver {
    type Target;

    fn observe(
        &self,
        target: &Self::Target,
        options: ObserverOptions,
        on_intersect: IntersectCallback,
    ) -> Result<ObservationHandle, ObserveError>;
}

/// [`ViewportObserver`] backed by the browser's `IntersectionObserver`.
pub struct DomViewportObserver;

impl DomViewportObserver {
    /// Returns `None` when the browser has no `IntersectionObserver`.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        match Reflect::has(&window, &JsValue::from_str("IntersectionObserver")) {
            Ok(true) => Some(Self),
            _ => None,
        }
    }
}

impl ViewportObserver for DomViewportObserver {
    type Target = Element;

    fn observe(
        &self,
        target: &Element,
        options: ObserverOptions,
        mut on_intersect: IntersectCallback,
    ) -> Result<ObservationHandle, ObserveError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_intersect(IntersectionEntry {
                            is_intersecting: entry.is_intersecting(),
                            intersection_ratio: entry.intersection_ratio(),
                        });
                    }
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.root_margin(&options.root_margin.to_css());
        init.threshold(&JsValue::from_f64(options.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| ObserveError::Construct(format!("{:?}", e)))?;
        observer.observe(target);

        let handle_observer = observer.clone();
        let handle_target = target.clone();
        Ok(ObservationHandle::new(move || {
            debug!("Releasing intersection observer");
            handle_observer.unobserve(&handle_target);
            handle_observer.disconnect();
        })
        .retain(callback))
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;

    struct Registration {
        callback: Rc<RefCell<IntersectCallback>>,
        active: Rc<Cell<bool>>,
        options: ObserverOptions,
    }

    /// In-memory observer that delivers entries on demand.
    #[derive(Default)]
    pub struct FakeObserver {
        registrations: RefCell<Vec<Registration>>,
        unsupported: bool,
    }

    impl FakeObserver {
        pub fn unsupported() -> Self {
            Self { unsupported: true, ..Self::default() }
        }

        pub fn len(&self) -> usize {
            self.registrations.borrow().len()
        }

        pub fn is_active(&self, index: usize) -> bool {
            self.registrations.borrow()[index].active.get()
        }

        pub fn options(&self, index: usize) -> ObserverOptions {
            self.registrations.borrow()[index].options
        }

        /// Delivers `entry` if the registration is still active and
        /// reports whether the callback ran.
        pub fn deliver(&self, index: usize, entry: IntersectionEntry) -> bool {
            let (callback, active) = {
                let registrations = self.registrations.borrow();
                let registration = &registrations[index];
                (registration.callback.clone(), registration.active.clone())
            };
            if !active.get() {
                return false;
            }
            (callback.borrow_mut())(entry);
            true
        }
    }

    impl ViewportObserver for FakeObserver {
        type Target = ();

        fn observe(
            &self,
            _target: &(),
            options: ObserverOptions,
            on_intersect: IntersectCallback,
        ) -> Result<ObservationHandle, ObserveError> {
            if self.unsupported {
                return Err(ObserveError::Unsupported);
            }
            let active = Rc::new(Cell::new(true));
            self.registrations.borrow_mut().push(Registration {
                callback: Rc::new(RefCell::new(on_intersect)),
                active: active.clone(),
                options,
            });
            Ok(ObservationHandle::new(move || active.set(false)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_shrink_bottom_edge() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin.to_css(), "0px 0px -50px 0px");
    }

    #[test]
    fn release_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let handle = {
            let calls = calls.clone();
            ObservationHandle::new(move || calls.set(calls.get() + 1))
        };
        assert!(handle.is_active());
        handle.release();
        handle.release();
        assert!(!handle.is_active());
        drop(handle);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_releases_active_handle() {
        let released = Rc::new(Cell::new(false));
        {
            let released = released.clone();
            let _handle = ObservationHandle::new(move || released.set(true));
        }
        assert!(released.get());
    }
}
