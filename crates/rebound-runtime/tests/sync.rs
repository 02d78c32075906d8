//! Concurrent driving through the lock-serialized wrapper

mod common;

use common::*;
use pretty_assertions::assert_eq;
use rebound_runtime::{Bounce, SyncTrampoline, TailCallError};
use std::thread;

fn sync_fact() -> SyncTrampoline<(u64, u64), u64> {
    SyncTrampoline::new(|f, (n, acc)| {
        if n == 0 {
            Ok(Bounce::Land(acc))
        } else {
            f.call((n - 1, n * acc))
        }
    })
}

#[test]
fn test_concurrent_drivers_each_get_correct_results() {
    let fact = sync_fact();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for n in 0..=15u64 {
                    assert_eq!(fact.invoke((n, 1)).unwrap(), fact_iter(n));
                }
            });
        }
    });
}

#[test]
fn test_concurrent_deep_drives_share_one_buffer_safely() {
    let countdown = SyncTrampoline::new(|f, n: u64| {
        if n == 0 {
            Ok(Bounce::Land(0u64))
        } else {
            f.call(n - 1)
        }
    });
    thread::scope(|scope| {
        for i in 0..4u64 {
            let countdown = &countdown;
            scope.spawn(move || {
                assert_eq!(countdown.invoke(50_000 + i).unwrap(), 0);
            });
        }
    });
}

#[test]
fn test_non_tail_diagnosis_under_lock() {
    let fact = SyncTrampoline::new(|f, n: u64| {
        if n == 0 {
            Ok(Bounce::Land(1u64))
        } else {
            let result = f.call(n - 1)?.into_value()?;
            Ok(Bounce::Land(n * result))
        }
    });
    let err = fact.invoke(4).unwrap_err();
    assert!(err.is_not_tail_recursive());
    // State was reset; the base case still drives cleanly.
    assert_eq!(fact.invoke(0).unwrap(), 1);
}

#[test]
fn test_reentrant_invoke_is_reported() {
    let broken = SyncTrampoline::new(|f, n: u32| {
        if n == 0 {
            return Ok(Bounce::Land(0u32));
        }
        let value = f.invoke(n - 1)?;
        Ok(Bounce::Land(value))
    });
    assert!(matches!(
        broken.invoke(3).unwrap_err(),
        TailCallError::ReentrantCall
    ));
}
