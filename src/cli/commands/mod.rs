//! Command implementations.

/// Export command handler.
pub mod export;
