//! langlock: input language lock controller for IDE plugins.
//!
//! Keeps the keyboard input language fixed while the user types, so system
//! hotkeys like Alt+Shift cannot switch layouts mid-identifier. The OS-level
//! interception lives in a native locker library; this crate drives it
//! through the narrow boundary in `langlock-engine`, persists the locked
//! language across restarts, and exposes a C ABI for host plugins to wire a
//! toggle button to.

pub mod config;
pub mod core;
pub mod ffi;

pub use crate::core::controller::LockController;
pub use crate::core::state::LockState;
pub use crate::core::store::{FileStore, MemoryStore, StateStore};

#[cfg(test)]
pub(crate) mod test_support;
