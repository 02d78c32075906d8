//! Shared test routines and helpers
//!
//! Canonical routine definitions used across the integration suites, so the
//! tail-recursive, forwarding, and combining shapes are written down exactly
//! once.

#![allow(dead_code)]

use rebound_runtime::{wrap, Bounce, Trampoline};

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Accumulator factorial in strict tail form
pub fn fact_acc() -> Trampoline<(u64, u64), u64> {
    wrap(|f, (n, acc)| {
        if n == 0 {
            Ok(Bounce::Land(acc))
        } else {
            f.call((n - 1, n * acc))
        }
    })
}

/// Accumulator factorial with a trailing statement that forwards the
/// recursive call's value unchanged
pub fn fact_acc_forward() -> Trampoline<(u64, u64), u64> {
    wrap(|f, (n, acc)| {
        if n == 0 {
            return Ok(Bounce::Land(acc));
        }
        let result = f.call((n - 1, n * acc));
        result
    })
}

/// Plain factorial that multiplies the recursive call's result. Not a tail
/// call, and must be diagnosed as such.
pub fn fact_non_tail() -> Trampoline<u64, u64> {
    wrap(|f, n| {
        if n == 0 {
            Ok(Bounce::Land(1))
        } else {
            let result = f.call(n - 1)?.into_value()?;
            Ok(Bounce::Land(n * result))
        }
    })
}

/// Iterative reference for exact factorials (valid through 20!)
pub fn fact_iter(n: u64) -> u64 {
    (1..=n).product()
}

/// Unwrapped direct-recursive reference (small depths only)
pub fn fact_rec(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        n * fact_rec(n - 1)
    }
}

/// Iterative reference for the wrapping-product routine used at depths where
/// exact factorials do not fit any primitive integer
pub fn wrapping_fact_iter(n: u64) -> u64 {
    (1..=n).fold(1u64, |acc, k| acc.wrapping_mul(k))
}
