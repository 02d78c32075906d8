//! Rebound Rewrite - tail calls as data
//!
//! The statically-checked sibling of `rebound-runtime`. Instead of detecting
//! a routine's recursive call at run time, the call is reified: the routine
//! returns [`Step::Jump`] with the next argument set, and [`Rewritten`] loops
//! back to the routine's entry in its place. Same external behavior as
//! unbounded direct recursion, O(1) stack growth.
//!
//! The strict tail-call shape (the recursive call immediately followed by
//! nothing but the return) is checked at construction time by the compiler:
//! a `Step::Jump` carries no result to combine, so a non-tail routine cannot
//! be expressed at all. Where the dynamic strategy diagnoses a bad shape on
//! the first drive, this one refuses to compile it.
//!
//! Fallible routines make the result type a `Result` and finish with
//! `Step::Return(Err(..))`; the loop itself introduces no failure modes.
//!
//! # Examples
//!
//! ```
//! use rebound_rewrite::{rewrite, Step};
//!
//! let fact = rewrite(|(n, acc): (u64, u64)| {
//!     if n == 0 {
//!         Step::Return(acc)
//!     } else {
//!         Step::Jump((n - 1, n * acc))
//!     }
//! });
//!
//! assert_eq!(fact.call((4, 1)), 24);
//! ```

/// Rebound rewrite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One step of a rewritten routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A, R> {
    /// Loop back to the routine's entry with new arguments: the reified
    /// tail call
    Jump(A),
    /// A final value; the loop stops here
    Return(R),
}

type Routine<A, R> = Box<dyn Fn(A) -> Step<A, R>>;

/// A routine whose tail self-call has been replaced by a jump to its entry
///
/// Owns the routine for its lifetime. Carries no cross-invocation state at
/// all: each [`call`](Self::call) is independent, so the wrapper is freely
/// reusable and reentrant.
pub struct Rewritten<A, R> {
    routine: Routine<A, R>,
}

/// Rewrite a routine expressed in [`Step`] form into an iterative callable
pub fn rewrite<A, R, F>(routine: F) -> Rewritten<A, R>
where
    F: Fn(A) -> Step<A, R> + 'static,
{
    Rewritten::new(routine)
}

impl<A, R> Rewritten<A, R> {
    /// See [`rewrite`]
    pub fn new<F>(routine: F) -> Self
    where
        F: Fn(A) -> Step<A, R> + 'static,
    {
        Self {
            routine: Box::new(routine),
        }
    }

    /// Run the routine to completion
    ///
    /// Behaves exactly like unbounded direct recursion on the same
    /// definition; every `Jump` is one trip around the loop instead of one
    /// stack frame.
    pub fn call(&self, args: A) -> R {
        let mut args = args;
        loop {
            match (self.routine)(args) {
                Step::Jump(next) => args = next,
                Step::Return(value) => return value,
            }
        }
    }
}
