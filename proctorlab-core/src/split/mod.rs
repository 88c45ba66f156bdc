//! Split-pane divider resizing
//!
//! This module owns the drag-to-resize logic for the dashboard dividers.
//! The resizer converts a continuous pointer drag into a clamped split
//! fraction, decoupled from any rendering toolkit: callers feed in the
//! container extent at drag start and cumulative pointer deltas, and get
//! back new fractions to apply and persist.
//!
//! # Module Structure
//!
//! - `resizer` - Drag state machine (`SplitPaneResizer`, `DragSession`, `SplitAxis`)
//! - `state` - Per-divider fraction holder (`SplitState`)
//! - `error` - Error types (`SplitError`)
//!
//! # Example
//!
//! ```
//! use proctorlab_core::split::SplitPaneResizer;
//!
//! let mut resizer = SplitPaneResizer::horizontal();
//! resizer.begin_drag(0.5, 1000.0);
//! let fraction = resizer.update_drag(100.0);
//! assert_eq!(fraction, Some(0.55));
//! resizer.end_drag();
//! ```

mod error;
mod resizer;
mod state;

pub use error::SplitError;
pub use resizer::{
    DEFAULT_DAMPING, DragSession, MAX_SPLIT_FRACTION, MIN_SPLIT_FRACTION, SplitAxis,
    SplitPaneResizer,
};
pub use state::SplitState;
