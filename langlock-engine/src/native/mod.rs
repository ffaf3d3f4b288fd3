//! Runtime binding to the native locker library.
//!
//! The library ships per architecture (`libs/x64` and `libs/win32` in the
//! plugin packages); hosts extract it and hand its path to
//! [`NativeLockEngine::load`]. On non-Windows platforms loading fails fast
//! with a diagnostic and the feature is unavailable for the session.

use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

#[cfg(target_os = "windows")]
mod windows_impl;
#[cfg(target_os = "windows")]
pub use windows_impl::NativeLockEngine;

#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(not(target_os = "windows"))]
pub use unsupported::NativeLockEngine;

/// File name of the native locker library.
pub const LIBRARY_NAME: &str = "lang-locker.dll";

/// Subdirectory of the bundled library layout for a target architecture.
fn arch_subdir(arch: &str) -> Option<&'static str> {
    match arch {
        "x86_64" => Some("x64"),
        "x86" => Some("win32"),
        _ => None,
    }
}

/// Resolve the locker library inside a plugin installation directory.
///
/// Plugin packages ship one library per architecture under
/// `libs/x64/lang-locker.dll` and `libs/win32/lang-locker.dll`. Returns
/// [`EngineError::UnsupportedArch`] when no library is shipped for the
/// running architecture.
pub fn bundled_library_path(plugin_root: &Path) -> Result<PathBuf> {
    let subdir = arch_subdir(std::env::consts::ARCH).ok_or(EngineError::UnsupportedArch {
        arch: std::env::consts::ARCH,
    })?;
    Ok(plugin_root.join("libs").join(subdir).join(LIBRARY_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arch_subdir_covers_shipped_binaries() {
        assert_eq!(arch_subdir("x86_64"), Some("x64"));
        assert_eq!(arch_subdir("x86"), Some("win32"));
        assert_eq!(arch_subdir("aarch64"), None);
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    #[test]
    fn bundled_path_points_into_the_plugin_root() {
        let path = bundled_library_path(Path::new("/plugins/langlock")).unwrap();
        assert!(path.starts_with("/plugins/langlock/libs"));
        assert!(path.ends_with(LIBRARY_NAME));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn load_fails_fast_off_windows() {
        let err = NativeLockEngine::load(None).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedPlatform { .. }));
    }
}
