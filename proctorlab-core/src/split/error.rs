//! Error types for split-pane operations
//!
//! The resizer itself degrades to no-ops rather than failing; these
//! errors exist for callers that want to surface misuse explicitly, for
//! example in diagnostics or test harnesses.

/// Errors that can occur during split-pane operations.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// The container extent was not positive at drag start or update.
    #[error("invalid container extent: {0} (must be positive)")]
    InvalidExtent(f64),

    /// A drag operation was attempted without an active session.
    #[error("no drag session is active")]
    NotDragging,
}
