//! Directory growth monitoring for dirpace
//!
//! This crate provides:
//! - Entry counting for a watched directory
//! - Progress state machine with rate/ETA estimation
//! - Human-readable duration formatting
//! - The fixed-interval polling loop

pub mod format;
pub mod poll;
pub mod state;

// Re-exports
pub use format::format_duration;
pub use poll::{count_entries, watch, POLL_INTERVAL};
pub use state::{Progress, Report, Tick};

/// Result type for monitor operations
pub type Result<T> = anyhow::Result<T>;
