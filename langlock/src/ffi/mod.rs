//! C FFI interface for host plugin integration.
//!
//! IDE hosts (Eclipse and IntelliJ plugins in the observed deployments) wire
//! their toggle action to this surface: `langlock_new` at plugin activation
//! (which restores the persisted state), `langlock_toggle` on click,
//! `langlock_is_locked` for checkbox rendering, `langlock_free` at
//! deactivation.
//!
//! The native engine holds a global single-owner lock, so hosts must invoke
//! every function from one thread — in practice the UI/event-dispatch thread
//! that delivers the click.

use std::sync::Once;

mod control;
mod lifecycle;
mod query;


/// Null-check + deref for `*const` FFI pointers. Returns `$default` if null.
macro_rules! ffi_ref {
    ($ptr:expr, $default:expr) => {{
        if $ptr.is_null() {
            return $default;
        }
        unsafe { &*$ptr }
    }};
}

/// Null-check + deref for `*mut` FFI pointers. Returns `$default` if null.
/// Use without default for void functions.
macro_rules! ffi_mut {
    ($ptr:expr) => {{
        if $ptr.is_null() {
            return;
        }
        unsafe { &mut *$ptr }
    }};
    ($ptr:expr, $default:expr) => {{
        if $ptr.is_null() {
            return $default;
        }
        unsafe { &mut *$ptr }
    }};
}

// Make macros available to submodules
pub(crate) use ffi_mut;
pub(crate) use ffi_ref;

use crate::core::controller::LockController;

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Opaque handle to a locker instance.
pub struct LangLocker {
    controller: LockController,
}
