//! One-shot deferred computations with a memoized result.
//!
//! A [`Suspension`] owns its producer until the first [`force`](Suspension::force),
//! then owns the produced value for the rest of its life. The producer runs at
//! most once no matter how many times the value is requested.

use std::cell::RefCell;
use std::fmt;
use std::mem;

use crate::error::{StreamError, StreamResult};

type Producer<T> = Box<dyn FnOnce() -> T>;

enum State<T> {
    Pending(Producer<T>),
    Evaluating,
    Evaluated(T),
    Poisoned,
}

/// Marks the suspension poisoned if the producer unwinds.
struct PoisonOnUnwind<'a, T> {
    state: &'a RefCell<State<T>>,
    armed: bool,
}

impl<T> Drop for PoisonOnUnwind<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            if let Ok(mut state) = self.state.try_borrow_mut() {
                *state = State::Poisoned;
            }
        }
    }
}

/// A deferred computation, evaluated on first demand and cached afterwards.
///
/// Forcing is single-threaded and synchronous, and the type is
/// `!Sync`.
pub struct Suspension<T> {
    state: RefCell<State<T>>,
}

impl<T> Suspension<T> {
    /// Wrap `producer` without running it.
    pub fn new<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            state: RefCell::new(State::Pending(Box::new(producer))),
        }
    }

    /// A suspension whose value is already known.
    pub fn evaluated(value: T) -> Self {
        Self {
            state: RefCell::new(State::Evaluated(value)),
        }
    }

    /// Whether the producer has already run to completion.
    pub fn is_evaluated(&self) -> bool {
        matches!(*self.state.borrow(), State::Evaluated(_))
    }

    /// Move the cached value out, leaving the suspension in the
    /// `Evaluating` state. Used to unlink realized chains on drop.
    pub(crate) fn take_evaluated(&mut self) -> Option<T> {
        let state = self.state.get_mut();
        match mem::replace(state, State::Evaluating) {
            State::Evaluated(value) => Some(value),
            other => {
                *state = other;
                None
            }
        }
    }
}

impl<T: Clone> Suspension<T> {
    /// Run the producer if needed and return the cached value.
    ///
    /// Returns [`StreamError::ReentrantForce`] when the producer itself asks
    /// for this suspension's value, and [`StreamError::Poisoned`] once a
    /// previous producer run has panicked.
    pub fn try_force(&self) -> StreamResult<T> {
        let producer = {
            let mut state = self.state.borrow_mut();
            match mem::replace(&mut *state, State::Evaluating) {
                State::Pending(producer) => producer,
                State::Evaluated(value) => {
                    let cached = value.clone();
                    *state = State::Evaluated(value);
                    return Ok(cached);
                }
                State::Evaluating => {
                    log::warn!("suspension re-entered during its own evaluation");
                    return Err(StreamError::ReentrantForce);
                }
                State::Poisoned => {
                    *state = State::Poisoned;
                    return Err(StreamError::Poisoned);
                }
            }
        };

        log::trace!("forcing suspension");
        let mut guard = PoisonOnUnwind {
            state: &self.state,
            armed: true,
        };
        let value = producer();
        guard.armed = false;
        *self.state.borrow_mut() = State::Evaluated(value.clone());
        Ok(value)
    }

    /// Like [`try_force`](Self::try_force).
    ///
    /// # Panics
    ///
    /// Panics if the suspension is re-entered while its producer runs, or if
    /// an earlier producer run panicked.
    pub fn force(&self) -> T {
        self.try_force().unwrap_or_else(|err| panic!("{}", err))
    }

    /// The cached value, if any, without running the producer.
    pub fn peek(&self) -> Option<T> {
        match &*self.state.borrow() {
            State::Evaluated(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Suspension<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            State::Pending(_) => f.write_str("Suspension(<pending>)"),
            State::Evaluating => f.write_str("Suspension(<evaluating>)"),
            State::Poisoned => f.write_str("Suspension(<poisoned>)"),
            State::Evaluated(value) => f.debug_tuple("Suspension").field(value).finish(),
        }
    }
}

/// Create a suspension from a zero-argument producer.
pub fn delay<T, F>(producer: F) -> Suspension<T>
where
    F: FnOnce() -> T + 'static,
{
    Suspension::new(producer)
}

/// Force `suspension`, running its producer on first use.
///
/// # Panics
///
/// See [`Suspension::force`].
pub fn force<T: Clone>(suspension: &Suspension<T>) -> T {
    suspension.force()
}
