//! Divider drag state machine
//!
//! The resizer is a pure data model: it holds no widgets and performs no
//! I/O, allowing the drag math to be property-tested without GUI
//! dependencies. A drag is a two-state machine (Idle and Dragging). The
//! anchor fraction and container extent are captured once at drag start
//! and every update recomputes the fraction from that fixed anchor plus
//! the cumulative pointer displacement, so the result is a pure function
//! of (anchor, total delta) and long jittery gestures cannot accumulate
//! floating-point drift.

use tracing::debug;

use super::error::SplitError;

/// Minimum valid split fraction.
///
/// The first pane can never collapse below 10% of the container.
pub const MIN_SPLIT_FRACTION: f64 = 0.1;

/// Maximum valid split fraction.
///
/// The first pane can never grow beyond 90% of the container.
pub const MAX_SPLIT_FRACTION: f64 = 0.9;

/// Default damping factor applied to raw pointer displacement.
///
/// The divider tracks at half the pointer's speed, which gives finer
/// control over pane sizes during a drag.
pub const DEFAULT_DAMPING: f64 = 0.5;

/// Axis along which a divider moves.
///
/// The pointer source supplies a two-component displacement; the resizer
/// only consumes the scalar along its own axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// The divider moves horizontally, separating left and right panes.
    Horizontal,
    /// The divider moves vertically, separating top and bottom panes.
    Vertical,
}

impl SplitAxis {
    /// Selects the displacement component relevant to this axis.
    #[must_use]
    pub const fn drag_component(self, dx: f64, dy: f64) -> f64 {
        match self {
            Self::Horizontal => dx,
            Self::Vertical => dy,
        }
    }
}

impl std::fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Anchor values captured when a drag gesture begins.
///
/// Both fields are fixed for the lifetime of the gesture. Updating the
/// anchor mid-drag would compound rounding error across intermediate
/// pointer events, which is exactly what the fixed-anchor design avoids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    anchor_fraction: f64,
    anchor_extent: f64,
}

impl DragSession {
    fn new(anchor_fraction: f64, anchor_extent: f64) -> Self {
        Self {
            anchor_fraction: anchor_fraction.clamp(MIN_SPLIT_FRACTION, MAX_SPLIT_FRACTION),
            anchor_extent,
        }
    }

    /// The divider fraction at drag start.
    #[must_use]
    pub const fn anchor_fraction(&self) -> f64 {
        self.anchor_fraction
    }

    /// The container extent along the split axis at drag start.
    #[must_use]
    pub const fn anchor_extent(&self) -> f64 {
        self.anchor_extent
    }

    /// Computes the fraction for a cumulative drag displacement.
    ///
    /// `cumulative_delta` is the total displacement since drag start, not
    /// an incremental per-event delta. The fraction is recomputed from the
    /// anchor on every call, clamped into
    /// [`MIN_SPLIT_FRACTION`, `MAX_SPLIT_FRACTION`].
    ///
    /// Returns `None` when the session was opened with a non-positive
    /// extent; the divider simply does not move until a valid extent is
    /// observed on a later gesture.
    #[must_use]
    pub fn fraction_for(&self, cumulative_delta: f64, damping: f64) -> Option<f64> {
        if self.anchor_extent <= 0.0 {
            return None;
        }
        let scaled_delta = cumulative_delta * damping;
        let raw = self.anchor_fraction + scaled_delta / self.anchor_extent;
        Some(raw.clamp(MIN_SPLIT_FRACTION, MAX_SPLIT_FRACTION))
    }
}

/// Drag-to-resize state machine for a single divider.
///
/// Idle until [`begin_drag`](Self::begin_drag) opens a session; Dragging
/// until [`end_drag`](Self::end_drag) releases it. Calling
/// [`update_drag`](Self::update_drag) while Idle is a programming error:
/// it trips a debug assertion in development builds and is a no-op in
/// release builds.
///
/// The resizer never touches persistence. Callers apply each returned
/// fraction to their layout and forward it to a settings store.
#[derive(Debug)]
pub struct SplitPaneResizer {
    axis: SplitAxis,
    damping: f64,
    session: Option<DragSession>,
}

impl SplitPaneResizer {
    /// Creates a resizer for the given axis with the default damping.
    #[must_use]
    pub const fn new(axis: SplitAxis) -> Self {
        Self {
            axis,
            damping: DEFAULT_DAMPING,
            session: None,
        }
    }

    /// Creates a resizer for a horizontally moving divider.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(SplitAxis::Horizontal)
    }

    /// Creates a resizer for a vertically moving divider.
    #[must_use]
    pub const fn vertical() -> Self {
        Self::new(SplitAxis::Vertical)
    }

    /// Overrides the damping factor applied to pointer displacement.
    #[must_use]
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// The axis this resizer tracks.
    #[must_use]
    pub const fn axis(&self) -> SplitAxis {
        self.axis
    }

    /// The damping factor applied to pointer displacement.
    #[must_use]
    pub const fn damping(&self) -> f64 {
        self.damping
    }

    /// Returns true while a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Opens a drag session, capturing the anchor fraction and extent.
    ///
    /// The incoming fraction is clamped into the valid range. A
    /// non-positive `container_extent` still opens the session, but all
    /// updates are no-ops until it ends; the extent is never used as a
    /// divisor in that case.
    pub fn begin_drag(&mut self, current_fraction: f64, container_extent: f64) {
        debug_assert!(
            self.session.is_none(),
            "begin_drag called while a drag session is active"
        );
        let session = DragSession::new(current_fraction, container_extent);
        debug!(
            axis = %self.axis,
            anchor_fraction = session.anchor_fraction(),
            anchor_extent = session.anchor_extent(),
            "drag started"
        );
        self.session = Some(session);
    }

    /// Recomputes the fraction for the cumulative displacement since drag start.
    ///
    /// `cumulative_delta` must be relative to the drag start, not to the
    /// previous pointer event; passing incremental deltas would make the
    /// divider drift. Repeated calls with the same delta return the same
    /// fraction.
    ///
    /// Returns `None` when no session is active or the session's extent
    /// is non-positive, meaning the externally-held fraction is unchanged.
    #[must_use]
    pub fn update_drag(&self, cumulative_delta: f64) -> Option<f64> {
        debug_assert!(
            self.session.is_some(),
            "update_drag called without an active drag session"
        );
        self.session
            .as_ref()
            .and_then(|session| session.fraction_for(cumulative_delta, self.damping))
    }

    /// Checked form of [`update_drag`](Self::update_drag).
    ///
    /// Reports the no-op causes as typed errors instead of `None`:
    /// [`SplitError::NotDragging`] without an active session,
    /// [`SplitError::InvalidExtent`] when the session's extent is not
    /// positive. Useful for diagnostics and harnesses that must not
    /// conflate the two.
    ///
    /// # Errors
    ///
    /// See above; never panics and never divides by zero.
    pub fn try_update_drag(&self, cumulative_delta: f64) -> Result<f64, SplitError> {
        let session = self.session.as_ref().ok_or(SplitError::NotDragging)?;
        session
            .fraction_for(cumulative_delta, self.damping)
            .ok_or(SplitError::InvalidExtent(session.anchor_extent))
    }

    /// Releases the drag session.
    ///
    /// Further updates are invalid until a new session is opened. The
    /// final persistence write is the caller's responsibility.
    pub fn end_drag(&mut self) {
        debug_assert!(
            self.session.is_some(),
            "end_drag called without an active drag session"
        );
        if let Some(session) = self.session.take() {
            debug!(
                axis = %self.axis,
                anchor_fraction = session.anchor_fraction(),
                "drag ended"
            );
        }
    }
}
