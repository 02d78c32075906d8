//! The trampoline wrapper
//!
//! [`wrap`] turns a directly self-recursive routine into a value whose calls
//! run in constant stack space. The routine receives a handle to its own
//! wrapper and performs its recursive call through [`Trampoline::call`]; the
//! wrapper intercepts that call before the routine body can run again, parks
//! the arguments, and lets the drive loop re-invoke the routine instead of
//! the routine re-invoking itself.
//!
//! The routine must be directly self-recursive in tail position: the value of
//! `call` is returned unmodified. Trailing statements that merely forward the
//! value are fine; combining it first is reported as
//! [`NotTailRecursive`](TailCallError::NotTailRecursive).
//!
//! # Examples
//!
//! ```
//! use rebound_runtime::{wrap, Bounce};
//!
//! let fact = wrap(|f, (n, acc): (u64, u64)| {
//!     if n == 0 {
//!         Ok(Bounce::Land(acc))
//!     } else {
//!         f.call((n - 1, n * acc))
//!     }
//! });
//!
//! assert_eq!(fact.invoke((4, 1)).unwrap(), 24);
//! ```

use std::fmt;

use crate::bounce::Bounce;
use crate::diagnostic::{self, TailCallError};
use crate::state::InvocationState;
use crate::stats::{CallStats, TrampolineStats};

/// What one routine invocation produces: a [`Bounce`] or a failure
pub type Outcome<R> = Result<Bounce<R>, TailCallError>;

type Routine<A, R> = Box<dyn Fn(&Trampoline<A, R>, A) -> Outcome<R>>;

/// One wrapped routine bound to its private re-entry state and counters
///
/// The state is shared across all iterations of one logical top-level call:
/// per wrapper, not per call. Interior mutability makes the type `!Sync`, so
/// the single-threaded contract is enforced by the compiler; use
/// [`SyncTrampoline`](crate::sync::SyncTrampoline) when driving from several
/// threads. Reentrant driving calls (calling [`invoke`](Self::invoke) from
/// inside the routine) are not supported.
pub struct Trampoline<A, R> {
    /// The routine being protected against stack growth; owned for the
    /// lifetime of the wrapper
    routine: Routine<A, R>,
    state: InvocationState<A>,
    stats: CallStats,
}

/// Wrap a directly self-recursive tail routine
///
/// Calls on the returned wrapper behave exactly like unbounded direct
/// recursion on the routine, but the host stack stays at O(1) depth no matter
/// how deep the recursion goes.
pub fn wrap<A, R, F>(routine: F) -> Trampoline<A, R>
where
    F: Fn(&Trampoline<A, R>, A) -> Outcome<R> + 'static,
{
    Trampoline::new(routine)
}

impl<A, R> Trampoline<A, R> {
    /// See [`wrap`]
    pub fn new<F>(routine: F) -> Self
    where
        F: Fn(&Trampoline<A, R>, A) -> Outcome<R> + 'static,
    {
        Self {
            routine: Box::new(routine),
            state: InvocationState::new(),
            stats: CallStats::new(),
        }
    }

    /// The invocation protocol; every call site goes through here
    ///
    /// Inside a routine this is the recursive call: the wrapper is mid-drive,
    /// so the arguments are parked and a placeholder comes back immediately,
    /// without running the routine body. The placeholder must be returned
    /// unmodified (forwarding through a local is fine).
    ///
    /// Called while no drive is live, it is a driving call and runs the loop
    /// to completion.
    pub fn call(&self, args: A) -> Outcome<R> {
        if self.state.is_reentry() {
            self.stats.record_reentry();
            self.state.record_reentry(args);
            return Ok(Bounce::pending());
        }
        self.drive(args)
    }

    /// Drive a top-level call to completion and unwrap the landed value
    pub fn invoke(&self, args: A) -> Result<R, TailCallError> {
        match self.call(args)? {
            Bounce::Land(value) => Ok(value),
            // `call` only classifies as a re-entry while a drive is live, so
            // a top-level placeholder means invoke was called from inside a
            // routine.
            Bounce::Pending(_) => Err(TailCallError::ReentrantCall),
        }
    }

    /// The loop that replaces the conceptual recursive call stack
    fn drive(&self, args: A) -> Outcome<R> {
        self.stats.record_driving_call();
        let _guard = self.state.begin_drive();
        let mut args = args;
        loop {
            self.stats.record_iteration();
            let bounce = match (self.routine)(self, args) {
                Ok(bounce) => bounce,
                Err(err) => return Err(diagnostic::translate(err)),
            };
            match self.state.consume_reentry() {
                // A re-entry parked new arguments; the returned bounce is a
                // placeholder (possibly forwarded through locals), so drop
                // it and go around again.
                Some(next) => args = next,
                None => return Ok(bounce),
            }
        }
    }

    /// Counter snapshot for this wrapper
    pub fn stats(&self) -> TrampolineStats {
        self.stats.snapshot()
    }

    /// Zero the counters (the re-entry state is untouched)
    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Trampoline<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trampoline")
            .field("state", &self.state)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_recursive_routine_is_one_iteration() {
        let double = wrap(|_f, n: u64| Ok(Bounce::Land(n * 2)));
        assert_eq!(double.invoke(21).unwrap(), 42);
        let stats = double.stats();
        assert_eq!(stats.driving_calls, 1);
        assert_eq!(stats.reentries, 0);
        assert_eq!(stats.iterations, 1);
    }

    #[test]
    fn test_countdown_counts_one_reentry_per_frame() {
        let countdown = wrap(|f, n: u32| {
            if n == 0 {
                Ok(Bounce::Land(0u32))
            } else {
                f.call(n - 1)
            }
        });
        assert_eq!(countdown.invoke(5).unwrap(), 0);
        let stats = countdown.stats();
        assert_eq!(stats.driving_calls, 1);
        assert_eq!(stats.reentries, 5);
        assert_eq!(stats.iterations, 6);
    }

    #[test]
    fn test_reset_stats() {
        let id = wrap(|_f, n: i32| Ok(Bounce::Land(n)));
        id.invoke(1).unwrap();
        id.reset_stats();
        assert_eq!(id.stats(), TrampolineStats::default());
    }

    #[test]
    fn test_debug_does_not_require_routine_debug() {
        let id = wrap(|_f, n: i32| Ok(Bounce::Land(n)));
        let rendered = format!("{:?}", id);
        assert!(rendered.contains("Trampoline"));
    }
}
