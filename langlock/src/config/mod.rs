//! Persisted lock state.

pub mod state_file;

pub use state_file::PersistedState;
