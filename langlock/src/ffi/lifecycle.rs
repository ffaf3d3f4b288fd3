#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{CStr, c_char};
use std::path::PathBuf;
use std::ptr;

use tracing::{error, info};

use langlock_engine::NativeLockEngine;

use crate::core::controller::LockController;
use crate::core::store::FileStore;

use super::{LangLocker, init_logging};

/// Create a locker bound to the native engine and restore the persisted
/// lock state.
///
/// `library_path` points at the locker library the host extracted from its
/// plugin package; pass null to resolve `lang-locker.dll` through the system
/// search path. Returns null when the native engine cannot be loaded
/// (unsupported platform, missing library, missing export) — the feature is
/// then unavailable for this session.
#[unsafe(no_mangle)]
pub extern "C" fn langlock_new(library_path: *const c_char) -> *mut LangLocker {
    init_logging();

    let path = if library_path.is_null() {
        None
    } else {
        // SAFETY: pointer is non-null (checked above) and the host passes a
        // valid C string
        let raw = unsafe { CStr::from_ptr(library_path) };
        match raw.to_str() {
            Ok(s) => Some(PathBuf::from(s)),
            Err(e) => {
                error!("locker library path is not valid UTF-8: {}", e);
                return ptr::null_mut();
            }
        }
    };

    let engine = match NativeLockEngine::load(path.as_deref()) {
        Ok(engine) => engine,
        Err(e) => {
            error!("native lock engine unavailable: {}", e);
            return ptr::null_mut();
        }
    };

    let mut controller = LockController::new(Box::new(engine), Box::new(FileStore::open()));
    controller.restore();
    info!("language locker ready, locked={}", controller.is_locked());

    Box::into_raw(Box::new(LangLocker { controller }))
}

/// Destroy a locker instance.
///
/// Dropping the engine releases any active lock; the persisted state is
/// kept so the next session can restore it.
#[unsafe(no_mangle)]
pub extern "C" fn langlock_free(locker: *mut LangLocker) {
    if !locker.is_null() {
        // SAFETY: pointer is non-null (checked above) and was created by
        // Box::into_raw in langlock_new
        unsafe {
            drop(Box::from_raw(locker));
        }
    }
}
