//! Error taxonomy and diagnostic translation
//!
//! All failures surface as [`TailCallError`]. The drive loop is the single
//! translation boundary: a placeholder-consumption failure escaping a routine
//! is reclassified as `NotTailRecursive` there, and every other failure passes
//! through unchanged.

use thiserror::Error;

/// Errors produced while driving a wrapped routine
#[derive(Debug, Error)]
pub enum TailCallError {
    /// A recursive call's placeholder result was consumed as a value.
    ///
    /// Raised by [`Bounce::into_value`](crate::Bounce::into_value) when a
    /// routine tries to compute with a result that does not exist yet. Never
    /// reaches the caller directly: the drive loop translates it into
    /// [`NotTailRecursive`](TailCallError::NotTailRecursive).
    #[error("recursive-call placeholder consumed as a value")]
    PendingConsumed,

    /// The routine does not have the required tail-call shape
    #[error("routine is not tail recursive: {reason}")]
    NotTailRecursive {
        /// What the routine did with the recursive call's result
        reason: String,
    },

    /// A driving call re-entered a wrapper that was already mid-drive
    ///
    /// Calling `invoke` from inside a routine is not supported; the recursive
    /// call must go through `call` so the wrapper can intercept it.
    #[error("reentrant driving call on a wrapper that is already mid-drive")]
    ReentrantCall,

    /// Failure from the routine's own logic, propagated unchanged
    #[error("{0}")]
    Routine(Box<dyn std::error::Error + Send + Sync>),
}

impl TailCallError {
    /// Box a routine-level failure for propagation through the drive loop
    pub fn routine(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        TailCallError::Routine(Box::new(err))
    }

    /// True for the `NotTailRecursive` diagnostic
    pub fn is_not_tail_recursive(&self) -> bool {
        matches!(self, TailCallError::NotTailRecursive { .. })
    }
}

/// Reclassify a failure crossing the drive-loop boundary
///
/// `PendingConsumed` can only escape a routine that combined a recursive
/// call's result instead of returning it, so it becomes the user-facing
/// `NotTailRecursive` diagnostic. Everything else is the routine's own
/// failure and is handed on untouched.
pub(crate) fn translate(err: TailCallError) -> TailCallError {
    match err {
        TailCallError::PendingConsumed => TailCallError::NotTailRecursive {
            reason: "the recursive call's result was used in further computation \
                     instead of being returned directly"
                .to_string(),
        },
        other => other,
    }
}
