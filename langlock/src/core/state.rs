//! Lock state machine states.

use langlock_engine::LanguageHandle;

/// The current lock state.
///
/// A non-zero persisted language id corresponds to `Locked` and a zero one
/// to `Unlocked`; the pairing holds by construction since the handle only
/// exists inside the `Locked` variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockState {
    /// Input language switching works normally.
    #[default]
    Unlocked,

    /// The input language identified by the handle is locked.
    Locked(LanguageHandle),
}

impl LockState {
    /// Whether the input language is currently locked.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// The locked language, if any.
    pub fn language(&self) -> Option<LanguageHandle> {
        match self {
            Self::Unlocked => None,
            Self::Locked(handle) => Some(*handle),
        }
    }
}
