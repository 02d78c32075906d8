//! Rebound Runtime - stack-safe self-recursion
//!
//! This library converts directly self-recursive tail calls into iteration,
//! so recursion depth is bounded by time, not by the host call stack:
//! - Wrapping and the drive loop: [`wrap`] / [`Trampoline`]
//! - The routine return channel (final value or placeholder): [`Bounce`]
//! - Diagnostics, including `NotTailRecursive`: [`TailCallError`]
//! - Per-wrapper call counters: [`TrampolineStats`]
//! - Lock-serialized variant for concurrent driving: [`SyncTrampoline`]
//!
//! Only direct self-recursion in tail position is supported. Mutual recursion
//! between distinct routines and recursion through stored function references
//! are out of scope, and a routine that never reaches a base case loops
//! forever on bounded stack; termination stays the routine's responsibility.

/// Rebound runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod bounce;
pub mod diagnostic;
pub mod stats;
pub mod sync;
pub mod trampoline;

mod state;

// Re-export commonly used types
pub use bounce::{Bounce, PendingMark};
pub use diagnostic::TailCallError;
pub use stats::TrampolineStats;
pub use sync::SyncTrampoline;
pub use trampoline::{wrap, Outcome, Trampoline};
