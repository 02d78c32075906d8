//! Lock-serialized wrapper for concurrent use
//!
//! [`Trampoline`](crate::Trampoline) keeps its re-entry state in
//! `Cell`/`RefCell` and is `!Sync` on purpose: signal and buffer are shared
//! per wrapper, and a second driving call mid-flight would corrupt them.
//! [`SyncTrampoline`] is the hardened variant: driving calls are serialized
//! by an exclusive per-wrapper gate, and re-entry classification is keyed on
//! the driving thread's id, so a nested recursive call never waits on the
//! gate its own driver is holding.

use std::sync::Mutex;
use std::thread::{self, ThreadId};

use crate::bounce::Bounce;
use crate::diagnostic::{self, TailCallError};
use crate::trampoline::Outcome;

type SyncRoutine<A, R> = Box<dyn Fn(&SyncTrampoline<A, R>, A) -> Outcome<R> + Send + Sync>;

/// Signal and argument buffer, guarded as one unit
#[derive(Debug)]
struct Reentry<A> {
    signal: bool,
    pending: Option<A>,
}

/// A wrapped routine that may be driven from several threads
///
/// One drive runs at a time; a driving call arriving while another thread is
/// mid-drive blocks until that drive completes. Within the driving thread the
/// protocol is identical to [`Trampoline`](crate::Trampoline).
pub struct SyncTrampoline<A, R> {
    routine: SyncRoutine<A, R>,
    /// Which thread currently owns the drive loop, if any
    driver: Mutex<Option<ThreadId>>,
    /// Serializes driving calls; held for the whole drive
    gate: Mutex<()>,
    reentry: Mutex<Reentry<A>>,
}

impl<A, R> SyncTrampoline<A, R> {
    /// Wrap a directly self-recursive tail routine for multi-threaded driving
    pub fn new<F>(routine: F) -> Self
    where
        F: Fn(&SyncTrampoline<A, R>, A) -> Outcome<R> + Send + Sync + 'static,
    {
        Self {
            routine: Box::new(routine),
            driver: Mutex::new(None),
            gate: Mutex::new(()),
            reentry: Mutex::new(Reentry {
                signal: false,
                pending: None,
            }),
        }
    }

    /// The invocation protocol; see [`Trampoline::call`](crate::Trampoline::call)
    pub fn call(&self, args: A) -> Outcome<R> {
        let caller = thread::current().id();
        if *self.driver.lock().unwrap() == Some(caller) {
            let mut reentry = self.reentry.lock().unwrap();
            reentry.pending = Some(args);
            reentry.signal = true;
            return Ok(Bounce::pending());
        }

        // Fresh driving call: wait for any other driver to finish. A routine
        // that panicked mid-drive poisons the gate, but the reset guard has
        // already cleared the shared state, so the wrapper is still sound.
        let _gate = self.gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let _reset = DriveReset {
            driver: &self.driver,
            reentry: &self.reentry,
        };
        *self.driver.lock().unwrap() = Some(caller);
        self.drive(args)
    }

    /// Drive a top-level call to completion and unwrap the landed value
    pub fn invoke(&self, args: A) -> Result<R, TailCallError> {
        match self.call(args)? {
            Bounce::Land(value) => Ok(value),
            Bounce::Pending(_) => Err(TailCallError::ReentrantCall),
        }
    }

    fn drive(&self, mut args: A) -> Outcome<R> {
        loop {
            let bounce = match (self.routine)(self, args) {
                Ok(bounce) => bounce,
                Err(err) => return Err(diagnostic::translate(err)),
            };
            let next = {
                let mut reentry = self.reentry.lock().unwrap();
                if reentry.signal {
                    reentry.signal = false;
                    reentry.pending.take()
                } else {
                    None
                }
            };
            match next {
                Some(next_args) => args = next_args,
                None => return Ok(bounce),
            }
        }
    }
}

/// Clears the driver id and any leftover signal/buffer when a drive exits,
/// whether it returned, failed, or panicked.
struct DriveReset<'a, A> {
    driver: &'a Mutex<Option<ThreadId>>,
    reentry: &'a Mutex<Reentry<A>>,
}

impl<A> Drop for DriveReset<'_, A> {
    fn drop(&mut self) {
        if let Ok(mut driver) = self.driver.lock() {
            *driver = None;
        }
        if let Ok(mut reentry) = self.reentry.lock() {
            reentry.signal = false;
            reentry.pending = None;
        }
    }
}
