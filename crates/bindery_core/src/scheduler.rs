//! Delayed task scheduling
//!
//! Debounced commits need "run this later, unless cancelled". Two schedulers
//! are provided:
//!
//! - [`ManualScheduler`]: a virtual clock advanced explicitly, for frame-driven
//!   loops and deterministic tests
//! - [`TokioScheduler`]: spawns a sleeping task on a tokio runtime

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of a timer in a [`ManualScheduler`]
    pub struct TimerId;
}

/// Work to run when a timer fires
pub type Task = Box<dyn FnOnce() + Send>;

pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

pub type SharedScheduler = Arc<dyn Scheduler>;

/// Cancellation handle for a scheduled task
///
/// Dropping the handle leaves the task scheduled.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle for a task that cannot be cancelled
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

struct PendingTimer {
    deadline: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    seq: u64,
    timers: SlotMap<TimerId, PendingTimer>,
}

/// Scheduler driven by an explicit virtual clock
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shareable handle for options that take a [`SharedScheduler`]
    pub fn shared(&self) -> SharedScheduler {
        Arc::new(self.clone())
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers waiting to fire
    pub fn pending(&self) -> usize {
        self.lock().timers.len()
    }

    /// Move the clock forward, firing due timers in deadline order
    ///
    /// Tasks run without the clock locked, so they may schedule new timers;
    /// those fire in the same call when they fall inside the window. Returns
    /// the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut clock = self.lock();
                let due = clock
                    .timers
                    .iter()
                    .filter(|(_, t)| t.deadline <= target)
                    .min_by_key(|(_, t)| (t.deadline, t.seq))
                    .map(|(id, _)| id);
                due.and_then(|id| clock.timers.remove(id)).map(|timer| {
                    clock.now = clock.now.max(timer.deadline);
                    timer.task
                })
            };

            match next {
                Some(task) => {
                    task();
                    fired += 1;
                }
                None => break,
            }
        }

        self.lock().now = target;
        tracing::trace!(fired, now = ?target, "manual clock advanced");
        fired
    }

    fn lock(&self) -> MutexGuard<'_, ManualClock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let id = {
            let mut clock = self.lock();
            clock.seq += 1;
            let timer = PendingTimer {
                deadline: clock.now + delay,
                seq: clock.seq,
                task,
            };
            clock.timers.insert(timer)
        };

        let clock: Weak<Mutex<ManualClock>> = Arc::downgrade(&self.clock);
        TimerHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .timers
                    .remove(id);
            }
        })
    }
}

/// Scheduler backed by a tokio runtime
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

impl TokioScheduler {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Scheduler on the runtime the caller is running in, if any
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        TimerHandle::new(move || join.abort())
    }
}
