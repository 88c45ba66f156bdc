//! Dashboard panel layout
//!
//! The dashboard is a fixed arrangement of four resizable splits: a main
//! divider separating the record list from the right-hand panels, a
//! vertical divider splitting the right side into top and bottom, and one
//! horizontal divider inside each of those halves. `PanelLayout` owns one
//! [`SplitState`] and one [`SplitPaneResizer`] per divider, seeds the
//! fractions from the injected settings store, and writes every accepted
//! drag update (and the final value on drag end) back to it.

use std::fmt;

use tracing::debug;

use crate::config::SettingsStore;
use crate::split::{SplitAxis, SplitPaneResizer, SplitState};

/// Callback invoked with each accepted fraction change.
pub type ChangeCallback = Box<dyn FnMut(DividerId, f64)>;

/// Identifies one of the dashboard's four dividers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerId {
    /// Record list vs. the right-hand panel group.
    Main,
    /// Top vs. bottom half of the right-hand panel group.
    RightVertical,
    /// Left vs. right panel inside the top half.
    TopHorizontal,
    /// Left vs. right panel inside the bottom half.
    BottomHorizontal,
}

impl DividerId {
    /// All dividers, in seeding order.
    pub const ALL: [Self; 4] = [
        Self::Main,
        Self::RightVertical,
        Self::TopHorizontal,
        Self::BottomHorizontal,
    ];

    /// Stable settings key for this divider's fraction.
    #[must_use]
    pub const fn settings_key(self) -> &'static str {
        match self {
            Self::Main => "main_split_position",
            Self::RightVertical => "right_vertical_split_position",
            Self::TopHorizontal => "top_horizontal_split_position",
            Self::BottomHorizontal => "bottom_horizontal_split_position",
        }
    }

    /// Axis along which this divider moves.
    #[must_use]
    pub const fn axis(self) -> SplitAxis {
        match self {
            Self::Main | Self::TopHorizontal | Self::BottomHorizontal => SplitAxis::Horizontal,
            Self::RightVertical => SplitAxis::Vertical,
        }
    }

    /// Fraction used when no value has been persisted yet.
    ///
    /// The record list starts at a quarter of the window width; the
    /// right-hand panels start evenly split.
    #[must_use]
    pub const fn default_fraction(self) -> f64 {
        match self {
            Self::Main => 0.25,
            Self::RightVertical | Self::TopHorizontal | Self::BottomHorizontal => 0.5,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::RightVertical => 1,
            Self::TopHorizontal => 2,
            Self::BottomHorizontal => 3,
        }
    }
}

impl fmt::Display for DividerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.settings_key())
    }
}

struct Divider {
    id: DividerId,
    state: SplitState,
    resizer: SplitPaneResizer,
}

/// Resizable four-divider layout backed by a settings store.
///
/// All operations are synchronous and run on the caller's event thread;
/// persistence is fire-and-forget from the layout's perspective. The
/// optional change callback carries each accepted fraction to whatever
/// observation mechanism the embedding UI uses.
pub struct PanelLayout {
    store: Box<dyn SettingsStore>,
    dividers: [Divider; 4],
    on_change: Option<ChangeCallback>,
}

impl PanelLayout {
    /// Creates a layout seeded from the given settings store.
    ///
    /// Missing or out-of-range persisted fractions fall back to the
    /// per-divider defaults (clamped by [`SplitState`]).
    #[must_use]
    pub fn new(store: Box<dyn SettingsStore>) -> Self {
        let dividers = DividerId::ALL.map(|id| {
            let fraction = store.get_float(id.settings_key(), id.default_fraction());
            Divider {
                id,
                state: SplitState::new(fraction),
                resizer: SplitPaneResizer::new(id.axis()),
            }
        });
        Self {
            store,
            dividers,
            on_change: None,
        }
    }

    /// Registers a callback fired on every accepted fraction change.
    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    /// Current fraction of the given divider.
    #[must_use]
    pub fn fraction(&self, id: DividerId) -> f64 {
        self.dividers[id.index()].state.fraction()
    }

    /// Returns true while the given divider is being dragged.
    #[must_use]
    pub fn is_dragging(&self, id: DividerId) -> bool {
        self.dividers[id.index()].resizer.is_dragging()
    }

    /// Starts a drag on the given divider.
    ///
    /// `container_extent` is the container size along the divider's axis
    /// at gesture start, in the same units as subsequent drag deltas.
    pub fn begin_drag(&mut self, id: DividerId, container_extent: f64) {
        let divider = &mut self.dividers[id.index()];
        divider
            .resizer
            .begin_drag(divider.state.fraction(), container_extent);
    }

    /// Applies a cumulative pointer displacement to an active drag.
    ///
    /// `dx`/`dy` are the displacement since drag start in container-local
    /// coordinates; the component along the divider's axis is selected
    /// here. An accepted update mutates the state, persists the new
    /// fraction, and fires the change callback. Returns the new fraction,
    /// or `None` when the update was a no-op.
    pub fn drag_to(&mut self, id: DividerId, dx: f64, dy: f64) -> Option<f64> {
        let divider = &mut self.dividers[id.index()];
        let delta = id.axis().drag_component(dx, dy);
        let fraction = divider.resizer.update_drag(delta)?;
        divider.state.set_fraction(fraction);
        self.store.set_float(id.settings_key(), fraction);
        if let Some(callback) = self.on_change.as_mut() {
            callback(id, fraction);
        }
        Some(fraction)
    }

    /// Ends a drag on the given divider and persists its final fraction.
    pub fn end_drag(&mut self, id: DividerId) {
        let divider = &mut self.dividers[id.index()];
        divider.resizer.end_drag();
        let fraction = divider.state.fraction();
        debug!(divider = %id, fraction, "divider drag finished");
        self.store.set_float(id.settings_key(), fraction);
    }

    /// Writes every divider fraction to the settings store.
    ///
    /// Called by the embedding application on teardown, matching the
    /// save-on-dispose behavior of the dashboard window.
    pub fn persist_all(&mut self) {
        for divider in &self.dividers {
            self.store
                .set_float(divider.id.settings_key(), divider.state.fraction());
        }
    }

    /// Read access to the backing settings store.
    #[must_use]
    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }
}
