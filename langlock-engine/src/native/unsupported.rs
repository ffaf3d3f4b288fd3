//! Stub engine for platforms without a native locker.

use std::path::Path;

use crate::error::{EngineError, Result};
use crate::lock::{LanguageHandle, LockEngine};

/// Placeholder for platforms the locker library does not support.
///
/// [`NativeLockEngine::load`] always fails here, so no instance is ever
/// observable by callers; the trait impl only keeps the type usable in
/// cfg-independent signatures.
#[derive(Debug)]
pub struct NativeLockEngine {
    _private: (),
}

impl NativeLockEngine {
    /// Always fails: the locker library only exists for Windows.
    pub fn load(_path: Option<&Path>) -> Result<Self> {
        Err(EngineError::UnsupportedPlatform {
            os: std::env::consts::OS,
        })
    }
}

impl LockEngine for NativeLockEngine {
    fn lock(&mut self, _language: Option<LanguageHandle>) -> Option<LanguageHandle> {
        None
    }

    fn unlock(&mut self) {}
}
