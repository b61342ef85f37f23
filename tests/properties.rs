//! Property-based tests for the truss generator.
//!
//! Inputs are drawn from the ranges the validation layer accepts.

use approx::relative_eq;
use howetruss::generate;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Span and spacing pairs that keep the panel count moderate.
fn arb_layout() -> impl Strategy<Value = (f64, f64)> {
    (0.5..60.0f64, 0.1..10.0f64)
}

/// Pitch strictly inside the accepted range.
fn arb_pitch() -> impl Strategy<Value = f64> {
    1.0..89.0f64
}

// =============================================================================
// Property Tests: Panel layout
// =============================================================================

proptest! {
    /// Panels never exceed the requested spacing and the count is the ceiling.
    #[test]
    fn spacing_never_exceeds_maximum((width, spacing) in arb_layout(), pitch in arb_pitch()) {
        let truss = generate(width, pitch, spacing);
        let n = truss.panel_count();
        prop_assert!(n >= 1);
        prop_assert_eq!(n as f64, (width / spacing).ceil());
        for chord in &truss.top_chords {
            let panel_width = chord.end.x - chord.start.x;
            prop_assert!(panel_width <= spacing * (1.0 + 1.0e-9));
        }
    }

    /// Member counts follow from the panel count.
    #[test]
    fn member_counts_follow_panel_count((width, spacing) in arb_layout(), pitch in arb_pitch()) {
        let truss = generate(width, pitch, spacing);
        let n = truss.panel_count();
        prop_assert_eq!(truss.top_chords.len(), n);
        prop_assert_eq!(truss.vertical_members.len(), n + 1);
        prop_assert_eq!(truss.diagonal_members.len(), 2 * (n / 2));
    }

    /// The layout mirrors about mid-span.
    #[test]
    fn layout_is_mirror_symmetric((width, spacing) in arb_layout(), pitch in arb_pitch()) {
        let truss = generate(width, pitch, spacing);
        let posts = &truss.vertical_members;
        let n = truss.panel_count();
        let tolerance = 1.0e-9 * width.max(1.0) * (1.0 + pitch.to_radians().tan());
        for i in 0..=n {
            let (left, right) = (posts[i], posts[n - i]);
            prop_assert!(relative_eq!(left.start.x, -right.start.x, epsilon = tolerance));
            prop_assert!(relative_eq!(left.end.y, right.end.y, epsilon = tolerance));
        }
        prop_assert!(relative_eq!(truss.bottom_chord.start.x, -width / 2.0, epsilon = tolerance));
        prop_assert!(relative_eq!(truss.bottom_chord.end.x, width / 2.0, epsilon = tolerance));
    }

    /// Identical inputs give bit-identical output.
    #[test]
    fn generation_is_deterministic((width, spacing) in arb_layout(), pitch in arb_pitch()) {
        let first = generate(width, pitch, spacing);
        let second = generate(width, pitch, spacing);
        prop_assert_eq!(first, second);
    }

    /// The apex never exceeds half the span times the slope.
    #[test]
    fn apex_bounded_by_ridge_height((width, spacing) in arb_layout(), pitch in arb_pitch()) {
        let truss = generate(width, pitch, spacing);
        let ridge = width / 2.0 * pitch.to_radians().tan();
        prop_assert!(truss.apex_height() <= ridge * (1.0 + 1.0e-9));
        if truss.panel_count() % 2 == 0 {
            prop_assert!(relative_eq!(truss.apex_height(), ridge, max_relative = 1.0e-9));
        }
    }
}
