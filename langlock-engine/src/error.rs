//! Error types for native engine initialization

/// Errors that can occur while binding to the native locker library.
///
/// All of these are fatal to the feature for the current session: the caller
/// should log the diagnostic and run without language locking.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("input language locking is not supported on this platform ({os})")]
    UnsupportedPlatform { os: &'static str },

    #[error("no locker library is shipped for this architecture ({arch})")]
    UnsupportedArch { arch: &'static str },

    #[error("failed to load locker library '{library}'")]
    LibraryLoad {
        library: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("locker library '{library}' does not export '{symbol}'")]
    MissingSymbol {
        library: String,
        symbol: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
