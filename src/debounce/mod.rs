//! Trailing-edge debouncing of a synchronous target function.
//!
//! A [`Debouncer`] is either idle or holds exactly one pending call: the
//! arguments of the most recent [`Debouncer::invoke`] plus a tokio timer
//! task. Every invoke cancels the outstanding timer and starts a new one,
//! so only the last call of an unbroken burst ever reaches the target,
//! `delay` after that call.
//!
//! Errors returned by the target are not retried or swallowed here; they
//! are handed to the controller's error hook.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Errors constructing a debouncer.
#[derive(Error, Debug)]
pub enum DebounceError {
    #[error("debouncing requires a running tokio runtime")]
    NoRuntime,
}

/// Receives errors returned by the debounced target.
pub type ErrorHook<E> = Arc<dyn Fn(E) + Send + Sync>;

type Target<A, E> = Box<dyn Fn(A) -> Result<(), E> + Send + Sync>;

struct DebounceState<A> {
    pending: Option<A>,
    timer: Option<JoinHandle<()>>,
    /// Bumped on every invoke; a timer only fires if it still matches.
    generation: u64,
}

struct Shared<A, E> {
    state: Mutex<DebounceState<A>>,
    target: Target<A, E>,
    on_error: ErrorHook<E>,
}

impl<A, E> Shared<A, E> {
    fn lock_state(&self) -> MutexGuard<'_, DebounceState<A>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Timer expiry: take the pending args if this timer is still current
    /// and run the target outside the lock.
    fn fire(&self, generation: u64) {
        let args = {
            let mut state = self.lock_state();
            if state.generation != generation {
                return;
            }
            state.timer = None;
            state.pending.take()
        };

        if let Some(args) = args {
            tracing::debug!(generation, "debounce window elapsed, running target");
            if let Err(err) = (self.target)(args) {
                (self.on_error)(err);
            }
        }
    }
}

/// Coalesces bursts of calls into one delayed call with the latest args.
pub struct Debouncer<A, E> {
    delay: Duration,
    runtime: Handle,
    shared: Arc<Shared<A, E>>,
}

impl<A, E> Debouncer<A, E>
where
    A: Send + 'static,
    E: 'static,
{
    /// Wrap `target`; errors it returns are logged at `error` level.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new<F>(delay: Duration, target: F) -> Result<Self, DebounceError>
    where
        F: Fn(A) -> Result<(), E> + Send + Sync + 'static,
        E: std::fmt::Display,
    {
        Self::with_error_hook(
            delay,
            target,
            Arc::new(|err: E| tracing::error!(error = %err, "debounced call failed")),
        )
    }

    /// Wrap `target`, routing its errors to `on_error`.
    pub fn with_error_hook<F>(
        delay: Duration,
        target: F,
        on_error: ErrorHook<E>,
    ) -> Result<Self, DebounceError>
    where
        F: Fn(A) -> Result<(), E> + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;
        Ok(Self {
            delay,
            runtime,
            shared: Arc::new(Shared {
                state: Mutex::new(DebounceState {
                    pending: None,
                    timer: None,
                    generation: 0,
                }),
                target: Box::new(target),
                on_error,
            }),
        })
    }

    /// Schedule `args` for execution after the quiet window.
    ///
    /// Never blocks and never runs the target inline. Replaces any
    /// pending call, cancelling its timer.
    pub fn invoke(&self, args: A) {
        let mut state = self.shared.lock_state();

        if let Some(previous) = state.timer.take() {
            previous.abort();
            tracing::debug!(generation = state.generation, "superseded pending call");
        }

        state.generation = state.generation.wrapping_add(1);
        state.pending = Some(args);

        let generation = state.generation;
        let delay = self.delay;
        let shared = Arc::clone(&self.shared);
        state.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            shared.fire(generation);
        }));
    }

    /// Whether a call is waiting for its window to elapse.
    pub fn is_pending(&self) -> bool {
        self.shared.lock_state().pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A, E> Drop for Debouncer<A, E> {
    fn drop(&mut self) {
        let mut state = self.shared.lock_state();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.pending = None;
    }
}
