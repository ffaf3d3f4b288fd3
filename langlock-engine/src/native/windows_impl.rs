//! Windows binding to `lang-locker.dll`.

use std::ffi::OsStr;
use std::mem;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use tracing::debug;
use windows::Win32::Foundation::{FreeLibrary, HMODULE};
use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
use windows::core::{PCWSTR, s};

use super::LIBRARY_NAME;
use crate::error::{EngineError, Result};
use crate::lock::{LanguageHandle, LockEngine};

// Exported by the locker library with the C calling convention; a zero
// handle means none/failure.
type LockInputLanguageFn = unsafe extern "C" fn(i64) -> i64;
type UnlockInputLanguageFn = unsafe extern "C" fn();

/// Runtime binding to the locker library.
///
/// Owns the library handle. Dropping releases any active lock before
/// unloading, since the hook procedures servicing the lock live inside the
/// library.
pub struct NativeLockEngine {
    library: HMODULE,
    lock_input_language: LockInputLanguageFn,
    unlock_input_language: UnlockInputLanguageFn,
}

impl NativeLockEngine {
    /// Load the locker library and resolve its lock/unlock exports.
    ///
    /// `path` is the library location chosen by the host (typically extracted
    /// from the plugin package, see [`super::bundled_library_path`]); `None`
    /// resolves `lang-locker.dll` through the system search path.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let display = match path {
            Some(p) => p.display().to_string(),
            None => LIBRARY_NAME.to_string(),
        };
        let name = path.map(Path::as_os_str).unwrap_or(OsStr::new(LIBRARY_NAME));
        let wide: Vec<u16> = name.encode_wide().chain(Some(0)).collect();

        let library =
            unsafe { LoadLibraryW(PCWSTR(wide.as_ptr())) }.map_err(|e| EngineError::LibraryLoad {
                library: display.clone(),
                source: Box::new(e),
            })?;

        let Some(lock_proc) = (unsafe { GetProcAddress(library, s!("LockInputLanguage")) }) else {
            unsafe {
                let _ = FreeLibrary(library);
            }
            return Err(EngineError::MissingSymbol {
                library: display,
                symbol: "LockInputLanguage",
            });
        };
        let Some(unlock_proc) = (unsafe { GetProcAddress(library, s!("UnlockInputLanguage")) })
        else {
            unsafe {
                let _ = FreeLibrary(library);
            }
            return Err(EngineError::MissingSymbol {
                library: display,
                symbol: "UnlockInputLanguage",
            });
        };

        debug!("locker library loaded from {}", display);

        // SAFETY: signatures match the library's exported contract.
        Ok(Self {
            library,
            lock_input_language: unsafe { mem::transmute(lock_proc) },
            unlock_input_language: unsafe { mem::transmute(unlock_proc) },
        })
    }
}

impl LockEngine for NativeLockEngine {
    fn lock(&mut self, language: Option<LanguageHandle>) -> Option<LanguageHandle> {
        let requested = language.map_or(0, LanguageHandle::raw);
        // SAFETY: the library stays loaded for the lifetime of self.
        let locked = unsafe { (self.lock_input_language)(requested) };
        LanguageHandle::from_raw(locked)
    }

    fn unlock(&mut self) {
        // SAFETY: the library stays loaded for the lifetime of self.
        unsafe { (self.unlock_input_language)() }
    }
}

impl Drop for NativeLockEngine {
    fn drop(&mut self) {
        // Release the lock before its hook procedures are unloaded with the
        // library.
        unsafe {
            (self.unlock_input_language)();
            let _ = FreeLibrary(self.library);
        }
    }
}
