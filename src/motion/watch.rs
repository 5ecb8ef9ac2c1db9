use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that has to be inside the detection region.
pub const VISIBLE_THRESHOLD: f64 = 0.1;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("visibility observer could not be created: {0}")]
    Unavailable(String),
}

impl From<JsValue> for WatchError {
    fn from(value: JsValue) -> Self {
        WatchError::Unavailable(format!("{:?}", value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserveOptions {
    /// CSS margin around the viewport, e.g. `"-100px"`.
    pub margin: String,
    pub threshold: f64,
}

impl ObserveOptions {
    pub fn with_margin(margin: impl Into<String>) -> Self {
        Self {
            margin: margin.into(),
            threshold: VISIBLE_THRESHOLD,
        }
    }
}

/// What a visibility callback wants done with its subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Keep,
    Disconnect,
}

/// Called with `true` when the target is sufficiently visible.
pub type VisibilityCallback = Box<dyn FnMut(bool) -> Disposition>;

/// Handle to a live visibility subscription. Released exactly once: by the
/// source when a callback returns `Disconnect`, or else by `cancel` or drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
    detached: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
            detached: Rc::new(Cell::new(false)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            // Already disconnected by the source; only the captures are dropped.
            if !self.detached.get() {
                release();
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some() && !self.detached.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub trait VisibilitySource {
    type Target: ?Sized;

    fn subscribe(
        &self,
        target: &Self::Target,
        options: &ObserveOptions,
        on_change: VisibilityCallback,
    ) -> Result<Subscription, WatchError>;

    /// Like `subscribe`, but the returned handle also notices when the
    /// callback asked the source to disconnect.
    fn watch(
        &self,
        target: &Self::Target,
        options: &ObserveOptions,
        mut on_change: VisibilityCallback,
    ) -> Result<Subscription, WatchError> {
        let detached = Rc::new(Cell::new(false));
        let flag = detached.clone();
        let tracked = Box::new(move |visible: bool| {
            let disposition = on_change(visible);
            if disposition == Disposition::Disconnect {
                flag.set(true);
            }
            disposition
        });

        let mut subscription = self.subscribe(target, options, tracked)?;
        subscription.detached = detached;
        Ok(subscription)
    }
}

/// Browser visibility source backed by `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionSource;

impl VisibilitySource for IntersectionSource {
    type Target = Element;

    fn subscribe(
        &self,
        target: &Element,
        options: &ObserveOptions,
        mut on_change: VisibilityCallback,
    ) -> Result<Subscription, WatchError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if on_change(entry.is_intersecting()) == Disposition::Disconnect {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.root_margin(&options.margin);
        init.threshold(&JsValue::from_f64(options.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Slot {
        callback: Option<VisibilityCallback>,
        active: bool,
    }

    /// In-memory viewport that counts live subscriptions and lets tests push
    /// visibility changes.
    #[derive(Clone, Default)]
    pub struct FakeViewport {
        slots: Rc<RefCell<Vec<Slot>>>,
        pub last_options: Rc<RefCell<Option<ObserveOptions>>>,
        pub releases: Rc<RefCell<usize>>,
        pub fail: bool,
    }

    impl FakeViewport {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn active(&self) -> usize {
            self.slots.borrow().iter().filter(|slot| slot.active).count()
        }

        pub fn subscriptions(&self) -> usize {
            self.slots.borrow().len()
        }

        /// Delivers one visibility change to every active subscriber.
        pub fn emit(&self, visible: bool) {
            let count = self.slots.borrow().len();
            for index in 0..count {
                let callback = {
                    let mut slots = self.slots.borrow_mut();
                    let slot = &mut slots[index];
                    if !slot.active {
                        continue;
                    }
                    slot.callback.take()
                };
                let Some(mut callback) = callback else { continue };
                let disposition = callback(visible);

                let mut slots = self.slots.borrow_mut();
                let slot = &mut slots[index];
                if disposition == Disposition::Disconnect {
                    slot.active = false;
                } else if slot.active {
                    slot.callback = Some(callback);
                }
            }
        }
    }

    impl VisibilitySource for FakeViewport {
        type Target = ();

        fn subscribe(
            &self,
            _target: &(),
            options: &ObserveOptions,
            on_change: VisibilityCallback,
        ) -> Result<Subscription, WatchError> {
            if self.fail {
                return Err(WatchError::Unavailable("no observer".to_string()));
            }
            *self.last_options.borrow_mut() = Some(options.clone());

            let index = {
                let mut slots = self.slots.borrow_mut();
                slots.push(Slot {
                    callback: Some(on_change),
                    active: true,
                });
                slots.len() - 1
            };
            let slots = self.slots.clone();
            let releases = self.releases.clone();
            Ok(Subscription::new(move || {
                *releases.borrow_mut() += 1;
                let mut slots = slots.borrow_mut();
                slots[index].active = false;
                slots[index].callback = None;
            }))
        }
    }

    #[test]
    fn subscription_releases_once() {
        let released = Rc::new(RefCell::new(0));
        let counter = released.clone();
        let mut subscription = Subscription::new(move || *counter.borrow_mut() += 1);

        assert!(subscription.is_active());
        subscription.cancel();
        subscription.cancel();
        drop(subscription);

        assert_eq!(*released.borrow(), 1);
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let released = Rc::new(RefCell::new(false));
        let flag = released.clone();
        drop(Subscription::new(move || *flag.borrow_mut() = true));
        assert!(*released.borrow());
    }

    #[test]
    fn watched_subscription_goes_inert_after_source_disconnects() {
        let viewport = FakeViewport::default();
        let mut subscription = viewport
            .watch(
                &(),
                &ObserveOptions::with_margin("0px"),
                Box::new(|visible: bool| {
                    if visible {
                        Disposition::Disconnect
                    } else {
                        Disposition::Keep
                    }
                }),
            )
            .unwrap();

        viewport.emit(false);
        assert!(subscription.is_active());

        viewport.emit(true);
        assert!(!subscription.is_active());

        subscription.cancel();
        drop(subscription);
        assert_eq!(*viewport.releases.borrow(), 0);
    }

    #[test]
    fn watched_subscription_releases_on_cancel_when_still_live() {
        let viewport = FakeViewport::default();
        let mut subscription = viewport
            .watch(
                &(),
                &ObserveOptions::with_margin("0px"),
                Box::new(|_: bool| Disposition::Keep),
            )
            .unwrap();

        subscription.cancel();
        drop(subscription);

        assert_eq!(*viewport.releases.borrow(), 1);
        assert_eq!(viewport.active(), 0);
    }

    #[test]
    fn options_use_fixed_threshold() {
        let options = ObserveOptions::with_margin("-100px");
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.margin, "-100px");
    }

    #[test]
    fn fake_viewport_stops_delivering_after_disconnect() {
        let viewport = FakeViewport::default();
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        let _subscription = viewport
            .subscribe(
                &(),
                &ObserveOptions::with_margin("0px"),
                Box::new(move |_: bool| {
                    *seen.borrow_mut() += 1;
                    Disposition::Disconnect
                }),
            )
            .unwrap();

        viewport.emit(true);
        viewport.emit(true);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(viewport.active(), 0);
    }
}
