#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::c_int;

use super::{LangLocker, ffi_mut};

/// Toggle the lock in response to the user's click.
///
/// Returns the new state (1 locked, 0 unlocked) for the host's toggle
/// button; when locking fails the return is 0 and the button simply does
/// not engage.
#[unsafe(no_mangle)]
pub extern "C" fn langlock_toggle(locker: *mut LangLocker) -> c_int {
    let locker = ffi_mut!(locker, 0);
    if locker.controller.toggle() { 1 } else { 0 }
}
