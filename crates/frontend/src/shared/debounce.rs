//! Trailing-edge debounce
//!
//! Every [`Debounced::call`] cancels the pending invocation and schedules a
//! new one `delay` later with the latest arguments. Nothing fires on the
//! leading edge, and nothing fires at all while calls keep arriving faster
//! than `delay`. Each instance owns its single timer slot.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use native::Debounced;
#[cfg(target_arch = "wasm32")]
pub use browser::Debounced;

/// Wrap `callback` so bursts of calls collapse into one trailing call
///
/// Several arguments can be passed as a tuple. On native targets `call` must
/// run inside a tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn debounce<A, F>(callback: F, delay: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::new(callback, delay)
}

#[cfg(target_arch = "wasm32")]
pub fn debounce<A, F>(callback: F, delay: Duration) -> Debounced<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced::new(callback, delay)
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
    use std::time::Duration;
    use tokio::task::JoinHandle;

    pub struct Debounced<A> {
        callback: Arc<dyn Fn(A) + Send + Sync>,
        delay: Duration,
        pending: Mutex<Option<JoinHandle<()>>>,
    }

    impl<A: Send + 'static> Debounced<A> {
        pub(super) fn new<F>(callback: F, delay: Duration) -> Self
        where
            F: Fn(A) + Send + Sync + 'static,
        {
            Self {
                callback: Arc::new(callback),
                delay,
                pending: Mutex::new(None),
            }
        }

        pub fn call(&self, args: A) {
            let mut pending = self.slot();
            if let Some(previous) = pending.take() {
                previous.abort();
            }

            let callback = Arc::clone(&self.callback);
            let delay = self.delay;
            *pending = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                callback(args);
            }));
        }

        /// Drop the scheduled invocation, if any
        pub fn cancel(&self) {
            if let Some(previous) = self.slot().take() {
                previous.abort();
            }
        }

        pub fn is_pending(&self) -> bool {
            self.slot()
                .as_ref()
                .map_or(false, |task| !task.is_finished())
        }

        pub fn delay(&self) -> Duration {
            self.delay
        }

        fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
            self.pending.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_timers::callback::Timeout;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    pub struct Debounced<A> {
        callback: Rc<dyn Fn(A)>,
        delay: Duration,
        pending: RefCell<Option<Timeout>>,
        fired: Rc<Cell<bool>>,
    }

    impl<A: 'static> Debounced<A> {
        pub(super) fn new<F>(callback: F, delay: Duration) -> Self
        where
            F: Fn(A) + 'static,
        {
            Self {
                callback: Rc::new(callback),
                delay,
                pending: RefCell::new(None),
                fired: Rc::new(Cell::new(true)),
            }
        }

        pub fn call(&self, args: A) {
            if let Some(previous) = self.pending.borrow_mut().take() {
                previous.cancel();
            }

            let callback = Rc::clone(&self.callback);
            let fired = Rc::clone(&self.fired);
            fired.set(false);
            let millis = u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = Timeout::new(millis, move || {
                fired.set(true);
                callback(args);
            });
            *self.pending.borrow_mut() = Some(timeout);
        }

        pub fn cancel(&self) {
            if let Some(previous) = self.pending.borrow_mut().take() {
                previous.cancel();
            }
            self.fired.set(true);
        }

        pub fn is_pending(&self) -> bool {
            !self.fired.get()
        }

        pub fn delay(&self) -> Duration {
            self.delay
        }
    }
}
