//! Lock engine contract
//!
//! The native locker exposes exactly two operations: lock (optionally
//! switching to a previously locked language first) and unlock. Failures are
//! signalled by return value, never raised.

use std::fmt;
use std::num::NonZeroI64;

/// Opaque identifier of a locked input language.
///
/// Returned by the native engine and only meaningful to it; this layer never
/// looks inside. On Windows it is the `HKL` of the locked keyboard layout.
/// The raw wire/persistence representation is an `i64` where `0` means
/// "none" — that sentinel is mapped to `Option<LanguageHandle>` here and
/// nowhere deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageHandle(NonZeroI64);

impl LanguageHandle {
    /// Wrap a raw handle; `0` is the "none/failure" sentinel.
    pub fn from_raw(raw: i64) -> Option<Self> {
        NonZeroI64::new(raw).map(Self)
    }

    /// The raw value passed back across the native ABI and into persistence.
    pub fn raw(self) -> i64 {
        self.0.get()
    }
}

impl fmt::Display for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // HKLs read naturally in hex
        write!(f, "{:#x}", self.0.get())
    }
}

/// Boundary to the system-dependent implementation of lock/unlock actions.
///
/// Implemented by [`crate::NativeLockEngine`] for the real library and by
/// scripted fakes in tests. The engine holds a global, OS-wide lock with
/// single-owner semantics: callers must not issue `lock` while a lock is
/// already held, and must serialize all calls on one thread.
pub trait LockEngine {
    /// Lock the input language.
    ///
    /// With `None`, blocks input language switches and returns the handle of
    /// the currently active language. With `Some(language)`, tries to switch
    /// the system to that language first and locks it if the switch
    /// succeeded. Returns `None` if locking (or the requested switch)
    /// failed.
    fn lock(&mut self, language: Option<LanguageHandle>) -> Option<LanguageHandle>;

    /// Release any active lock. No-op if nothing is locked; never fails
    /// observably.
    fn unlock(&mut self);
}
