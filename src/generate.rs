//! Double-Howe truss layout generation.
//!
//! The span is divided into the fewest equal panels whose width does not exceed
//! the requested vertical spacing. Posts stand at every panel boundary, the roof
//! line rises at the pitch angle towards mid-span, and diagonals in each half
//! lean towards the centre.

// Panel counts are small positive integers derived from clamped ratios.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use tracing::debug;

use crate::geometry::{Member, Point};
use crate::truss::TrussGeometry;

/// Smallest width and vertical spacing the generator will work with, in metres.
///
/// Inputs below this are raised to it so the panel count stays finite.
pub const EPSILON: f64 = 0.01;

/// Division of the span into equal panels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PanelLayout {
    /// Clamped overall width.
    width: f64,
    /// Number of panels, always at least one.
    count: usize,
    /// Width of each panel.
    panel_width: f64,
}

impl PanelLayout {
    /// Choose the panel count for a span and a maximum post spacing.
    fn new(width: f64, max_vertical_spacing: f64) -> Self {
        let width = width.max(EPSILON);
        let max_spacing = max_vertical_spacing.max(EPSILON);
        let count = ((width / max_spacing).ceil() as usize).max(1);
        Self {
            width,
            count,
            panel_width: width / count as f64,
        }
    }

    /// Half the panel count, kept fractional for odd counts.
    fn half(&self) -> f64 {
        self.count as f64 / 2.0
    }

    /// Horizontal position of boundary `i`, centred on mid-span.
    fn x(&self, i: usize) -> f64 {
        i as f64 * self.panel_width - self.width / 2.0
    }

    /// Roof height above boundary `i` for a given slope.
    fn roof_height(&self, i: usize, slope: f64) -> f64 {
        if i as f64 <= self.half() {
            i as f64 * self.panel_width * slope
        } else {
            (self.width - i as f64 * self.panel_width) * slope
        }
    }
}

/// Generate the member layout of a Double-Howe truss.
///
/// * `width` - overall span in metres
/// * `pitch_degrees` - roof slope measured from horizontal
/// * `max_vertical_spacing` - largest allowed distance between posts in metres
///
/// Width and spacing below [`EPSILON`] are clamped up to it. The pitch is used
/// as given; keeping it inside (0, 90) degrees is the caller's job, see
/// [`TrussParameters::validate`](crate::TrussParameters::validate).
///
/// # Examples
/// ```
/// use howetruss::generate;
///
/// let truss = generate(20.0, 17.0, 1.5);
/// assert_eq!(truss.panel_count(), 14);
/// assert_eq!(truss.vertical_members.len(), 15);
/// assert_eq!(truss.diagonal_members.len(), 14);
/// assert!((truss.apex_height() - 3.0573).abs() < 1.0e-4);
/// ```
#[must_use]
pub fn generate(width: f64, pitch_degrees: f64, max_vertical_spacing: f64) -> TrussGeometry {
    let layout = PanelLayout::new(width, max_vertical_spacing);
    let n = layout.count;
    let slope = pitch_degrees.to_radians().tan();

    debug!(
        num_panels = n,
        panel_width = layout.panel_width,
        pitch_degrees,
        "Laying out truss panels"
    );

    let bottom: Vec<Point> = (0..=n).map(|i| Point::new(layout.x(i), 0.0)).collect();
    let top: Vec<Point> = (0..=n)
        .map(|i| Point::new(layout.x(i), layout.roof_height(i, slope)))
        .collect();

    let top_chords = top
        .windows(2)
        .map(|pair| Member::new(pair[0], pair[1]))
        .collect();
    let vertical_members = bottom
        .iter()
        .zip(&top)
        .map(|(&foot, &head)| Member::new(foot, head))
        .collect();

    // The centre panel is left unbraced when the count is odd.
    let pairs = n / 2;
    let mut diagonal_members = Vec::with_capacity(2 * pairs);
    for i in 0..pairs {
        diagonal_members.push(Member::new(bottom[i], top[i + 1]));
        diagonal_members.push(Member::new(bottom[n - i], top[n - i - 1]));
    }

    debug!(
        diagonals = diagonal_members.len(),
        "Assembled truss members"
    );

    TrussGeometry {
        bottom_chord: Member::new(bottom[0], bottom[n]),
        top_chords,
        vertical_members,
        diagonal_members,
    }
}
