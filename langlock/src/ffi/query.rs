#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::c_int;

use super::{LangLocker, ffi_ref};

/// Whether the input language is currently locked (1 locked, 0 unlocked).
#[unsafe(no_mangle)]
pub extern "C" fn langlock_is_locked(locker: *const LangLocker) -> c_int {
    let locker = ffi_ref!(locker, 0);
    if locker.controller.is_locked() { 1 } else { 0 }
}

/// Raw handle of the locked language, 0 when unlocked.
///
/// Hosts that mirror the value into their own preference store read it here
/// after each toggle.
#[unsafe(no_mangle)]
pub extern "C" fn langlock_locked_language(locker: *const LangLocker) -> i64 {
    let locker = ffi_ref!(locker, 0);
    locker.controller.locked_language().map_or(0, |h| h.raw())
}
