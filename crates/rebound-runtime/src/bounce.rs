//! Routine return channel
//!
//! A wrapped routine never hands back a bare value: it returns a [`Bounce`],
//! which is either a landed final value or a placeholder standing in for the
//! result of a recursive call that was intercepted before it could execute.
//! The placeholder is a distinct type rather than a null-like value, so a
//! routine that tries to compute with a missing result fails deterministically
//! instead of sometimes producing a silently wrong answer.

use crate::diagnostic::TailCallError;

/// Marker carried by a pending bounce.
///
/// No public constructor: the only way a `Bounce::Pending` comes into
/// existence is the wrapper intercepting a recursive call. The closest a
/// routine can get to arithmetic on a missing result is
/// [`Bounce::into_value`], which fails on a placeholder every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMark(());

/// What a wrapped routine hands back to the drive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce<R> {
    /// A genuine final value
    Land(R),
    /// Stand-in for a recursive call intercepted before executing
    Pending(PendingMark),
}

impl<R> Bounce<R> {
    /// Placeholder constructor, reserved for the wrapper's re-entry path
    pub(crate) fn pending() -> Self {
        Bounce::Pending(PendingMark(()))
    }

    /// True if this bounce carries a final value
    pub fn is_land(&self) -> bool {
        matches!(self, Bounce::Land(_))
    }

    /// Extract the landed value
    ///
    /// Fails with [`TailCallError::PendingConsumed`] on a placeholder; a
    /// drive loop observing that failure reports the routine as not tail
    /// recursive.
    pub fn into_value(self) -> Result<R, TailCallError> {
        match self {
            Bounce::Land(value) => Ok(value),
            Bounce::Pending(_) => Err(TailCallError::PendingConsumed),
        }
    }
}

impl<R> From<R> for Bounce<R> {
    fn from(value: R) -> Self {
        Bounce::Land(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_land_into_value() {
        let b: Bounce<u64> = Bounce::Land(7);
        assert!(b.is_land());
        assert_eq!(b.into_value().unwrap(), 7);
    }

    #[test]
    fn test_pending_into_value_fails() {
        let b: Bounce<u64> = Bounce::pending();
        assert!(!b.is_land());
        let err = b.into_value().unwrap_err();
        assert!(matches!(err, TailCallError::PendingConsumed));
    }

    #[test]
    fn test_from_value_lands() {
        let b: Bounce<&str> = "done".into();
        assert_eq!(b, Bounce::Land("done"));
    }
}
