//! Property-based tests for the split-pane resizer
//!
//! The resizer's contract is a pure function of (anchor fraction, anchor
//! extent, cumulative delta, damping), which makes it a natural fit for
//! property testing: identity at zero displacement, range clamping for
//! arbitrary displacement, the damping relationship, and idempotence of
//! repeated updates.

use proptest::prelude::*;

use proctorlab_core::split::{
    MAX_SPLIT_FRACTION, MIN_SPLIT_FRACTION, SplitAxis, SplitPaneResizer,
};

// ========== Strategies ==========

/// Strategy for valid anchor fractions
fn arb_fraction() -> impl Strategy<Value = f64> {
    MIN_SPLIT_FRACTION..=MAX_SPLIT_FRACTION
}

/// Strategy for valid container extents
fn arb_extent() -> impl Strategy<Value = f64> {
    1.0f64..=100_000.0
}

/// Strategy for cumulative drag displacements, large enough to exceed
/// the clamp bounds in both directions
fn arb_delta() -> impl Strategy<Value = f64> {
    -1_000_000.0f64..=1_000_000.0
}

/// Strategy for either axis
fn arb_axis() -> impl Strategy<Value = SplitAxis> {
    prop_oneof![Just(SplitAxis::Horizontal), Just(SplitAxis::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Zero displacement returns exactly the anchor fraction.
    #[test]
    fn identity_at_zero_delta(
        fraction in arb_fraction(),
        extent in arb_extent(),
        axis in arb_axis(),
    ) {
        let mut resizer = SplitPaneResizer::new(axis);
        resizer.begin_drag(fraction, extent);
        prop_assert_eq!(resizer.update_drag(0.0), Some(fraction));
    }

    /// Every accepted update lands inside the valid fraction range.
    #[test]
    fn result_is_always_clamped(
        fraction in arb_fraction(),
        extent in arb_extent(),
        delta in arb_delta(),
    ) {
        let mut resizer = SplitPaneResizer::horizontal();
        resizer.begin_drag(fraction, extent);
        let result = resizer.update_drag(delta).unwrap();
        prop_assert!(result >= MIN_SPLIT_FRACTION);
        prop_assert!(result <= MAX_SPLIT_FRACTION);
    }

    /// Away from the clamp bounds, the fraction moves by exactly the
    /// damped displacement over the extent.
    #[test]
    fn damping_halves_the_pointer_movement(
        fraction in arb_fraction(),
        extent in arb_extent(),
        delta in -1_000.0f64..=1_000.0,
    ) {
        let expected_shift = 0.5 * delta / extent;
        let raw = fraction + expected_shift;
        prop_assume!(raw > MIN_SPLIT_FRACTION + 1e-6);
        prop_assume!(raw < MAX_SPLIT_FRACTION - 1e-6);

        let mut resizer = SplitPaneResizer::horizontal();
        resizer.begin_drag(fraction, extent);
        let result = resizer.update_drag(delta).unwrap();
        prop_assert!(((result - fraction) - expected_shift).abs() < 1e-9);
    }

    /// Repeated updates with the same cumulative delta are idempotent;
    /// there is no hidden accumulation across calls.
    #[test]
    fn repeated_updates_are_idempotent(
        fraction in arb_fraction(),
        extent in arb_extent(),
        delta in arb_delta(),
        repeats in 2usize..=8,
    ) {
        let mut resizer = SplitPaneResizer::vertical();
        resizer.begin_drag(fraction, extent);
        let first = resizer.update_drag(delta);
        for _ in 1..repeats {
            prop_assert_eq!(resizer.update_drag(delta), first);
        }
    }

    /// Updates against a non-positive extent never move the divider and
    /// never divide by zero.
    #[test]
    fn non_positive_extent_is_a_noop(
        fraction in arb_fraction(),
        extent in -1_000.0f64..=0.0,
        delta in arb_delta(),
    ) {
        let mut resizer = SplitPaneResizer::horizontal();
        resizer.begin_drag(fraction, extent);
        prop_assert_eq!(resizer.update_drag(delta), None);
    }

    /// A drag session is a pure function of its anchor: interleaving
    /// other deltas does not disturb the result for a given delta.
    #[test]
    fn anchor_is_immutable_during_a_gesture(
        fraction in arb_fraction(),
        extent in arb_extent(),
        first_delta in arb_delta(),
        second_delta in arb_delta(),
    ) {
        let mut resizer = SplitPaneResizer::horizontal();
        resizer.begin_drag(fraction, extent);
        let expected = resizer.update_drag(first_delta);
        let _ = resizer.update_drag(second_delta);
        prop_assert_eq!(resizer.update_drag(first_delta), expected);
    }
}
