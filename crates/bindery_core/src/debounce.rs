//! Trailing-edge debouncing
//!
//! Each call replaces the pending value and restarts the quiet window; only
//! the last value of a burst is committed, once the window passes without a
//! new call. A zero window commits synchronously.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::scheduler::{SharedScheduler, TimerHandle};

struct DebounceState<T> {
    value: Option<T>,
    timer: Option<TimerHandle>,
    generation: u64,
}

type CommitFn<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Coalesces bursts of values into one delayed commit
pub struct Debouncer<T> {
    state: Arc<Mutex<DebounceState<T>>>,
    window: Duration,
    scheduler: Option<SharedScheduler>,
    commit: CommitFn<T>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            window: self.window,
            scheduler: self.scheduler.clone(),
            commit: Arc::clone(&self.commit),
        }
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Without a scheduler every call commits immediately
    pub fn new<F>(window: Duration, scheduler: Option<SharedScheduler>, commit: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(DebounceState {
                value: None,
                timer: None,
                generation: 0,
            })),
            window,
            scheduler,
            commit: Arc::new(commit),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether calls are coalesced at all
    pub fn is_delayed(&self) -> bool {
        !self.window.is_zero() && self.scheduler.is_some()
    }

    /// Submit a value, restarting the quiet window
    pub fn call(&self, value: T) {
        let Some(scheduler) = self.scheduler.as_ref().filter(|_| !self.window.is_zero()) else {
            (self.commit)(value);
            return;
        };

        let mut state = self.lock();
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
        state.generation += 1;
        state.value = Some(value);

        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let commit = Arc::clone(&self.commit);
        state.timer = Some(scheduler.schedule(
            self.window,
            Box::new(move || {
                let value = {
                    let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
                    if state.generation != generation {
                        return;
                    }
                    state.timer = None;
                    state.value.take()
                };
                if let Some(value) = value {
                    commit(value);
                }
            }),
        ));
    }

    /// Whether a value is waiting for its window to pass
    pub fn is_pending(&self) -> bool {
        self.lock().value.is_some()
    }

    /// Commit the pending value now
    pub fn flush(&self) {
        if let Some(value) = self.take_pending() {
            (self.commit)(value);
        }
    }

    /// Drop the pending value without committing it
    pub fn cancel(&self) {
        self.take_pending();
    }

    fn take_pending(&self) -> Option<T> {
        let mut state = self.lock();
        state.generation += 1;
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
        state.value.take()
    }

    fn lock(&self) -> MutexGuard<'_, DebounceState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("window", &self.window)
            .field("scheduled", &self.scheduler.is_some())
            .finish()
    }
}
