//! Point-in-region tests for path data.
//!
//! A path is treated as a closed region under the even-odd rule: a horizontal ray is
//! cast from the query point towards +x, and the point is inside if the ray crosses
//! the path's segments an odd number of times.  Subpaths are not special; a square
//! drawn inside another square makes a hole.
//!
//! For points outside the region, the result also carries the distance to the nearest
//! segment, which callers use to accept taps that land slightly outside a region.

use serde::Serialize;

use crate::geometry::{Point, Segment};
use crate::path_builder::{CurveHandling, Path};

/// Options for parsing path data before hit testing it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct HitTestOptions {
    /// What to do with curve commands, which are not traced.
    pub curves: CurveHandling,
}

/// The outcome of testing a point against a path.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct HitTestResult {
    /// Whether the point is inside the region under the even-odd rule.
    pub inside: bool,

    /// Zero if `inside`.  Otherwise, the distance from the point to the nearest segment
    /// of the path, or infinity if the path has no usable segments.  Never NaN.
    pub distance: f64,
}

impl HitTestResult {
    /// The result for a path that draws nothing.
    pub const MISS: HitTestResult = HitTestResult {
        inside: false,
        distance: f64::INFINITY,
    };
}

/// Tests a point against a sequence of segments.
///
/// The running minimum distance is only updated when the new candidate distance is a
/// finite, comparable number; a segment with NaN coordinates neither flips the parity
/// nor changes the distance.
pub fn hit_test_segments<I>(segments: I, point: Point) -> HitTestResult
where
    I: IntoIterator<Item = Segment>,
{
    let mut inside = false;
    let mut distance = f64::INFINITY;

    for segment in segments {
        if segment.crosses_ray_from(point) {
            inside = !inside;
        }

        let d = segment.distance_to(point);
        if d.is_finite() && d < distance {
            distance = d;
        }
    }

    if inside {
        HitTestResult {
            inside: true,
            distance: 0.0,
        }
    } else {
        HitTestResult { inside, distance }
    }
}

impl Path {
    /// Tests a point against this path.
    pub fn hit_test(&self, point: Point) -> HitTestResult {
        hit_test_segments(self.segments(), point)
    }

    /// Shorthand for `self.hit_test(point).inside`.
    pub fn contains(&self, point: Point) -> bool {
        self.hit_test(point).inside
    }
}

/// Tests whether `(x, y)` is inside the region drawn by `path_data`, and how far
/// from it the point is if not.
///
/// This never fails.  Empty or unrecognizable path data yields
/// [`HitTestResult::MISS`].
///
/// ```
/// let result = svghit::hit_test("M0,0 L10,0 L10,10 L0,10 Z", 15.0, 5.0);
/// assert!(!result.inside);
/// assert_eq!(result.distance, 5.0);
/// ```
pub fn hit_test(path_data: &str, x: f64, y: f64) -> HitTestResult {
    hit_test_with_options(path_data, x, y, &HitTestOptions::default())
}

/// Like [`hit_test`], with explicit parsing options.
pub fn hit_test_with_options(
    path_data: &str,
    x: f64,
    y: f64,
    options: &HitTestOptions,
) -> HitTestResult {
    Path::parse_with_curves(path_data, options.curves).hit_test(Point::new(x, y))
}

/// Tests whether `(x, y)` is inside the region drawn by `path_data`.
pub fn is_inside(path_data: &str, x: f64, y: f64) -> bool {
    hit_test(path_data, x, y).inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    const SQUARE: &str = "M0,0 L10,0 L10,10 L0,10 Z";
    const RELATIVE_SQUARE: &str = "m0,0 l10,0 l0,10 l-10,0 z";

    // 20x20 square with the top-right 10x10 quadrant cut out
    const L_SHAPE: &str = "M0,0 H10 V10 H20 V20 H0 Z";

    const DONUT: &str = "M0,0 L30,0 L30,30 L0,30 Z M10,10 L20,10 L20,20 L10,20 Z";

    #[test]
    fn point_inside_square() {
        let result = hit_test(SQUARE, 5.0, 5.0);
        assert!(result.inside);
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn point_outside_square_reports_distance() {
        let result = hit_test(SQUARE, 15.0, 5.0);
        assert!(!result.inside);
        assert!(approx_eq!(f64, result.distance, 5.0));
    }

    #[test]
    fn corner_distance_is_euclidean() {
        let result = hit_test(SQUARE, 13.0, 14.0);
        assert!(!result.inside);
        assert!(approx_eq!(f64, result.distance, 5.0));
    }

    #[test]
    fn vertex_results_are_deterministic() {
        let first = hit_test(SQUARE, 0.0, 0.0);
        for _ in 0..10 {
            assert_eq!(hit_test(SQUARE, 0.0, 0.0), first);
        }
    }

    #[test]
    fn concave_notch_is_outside() {
        assert!(!is_inside(L_SHAPE, 15.0, 5.0));
        assert!(is_inside(L_SHAPE, 5.0, 5.0));
        assert!(is_inside(L_SHAPE, 15.0, 15.0));
        assert!(is_inside(L_SHAPE, 5.0, 15.0));

        let notch = hit_test(L_SHAPE, 15.0, 3.0);
        assert!(approx_eq!(f64, notch.distance, 5.0));
    }

    #[test]
    fn relative_commands_match_absolute_ones() {
        for &(x, y) in &[(5.0, 5.0), (15.0, 5.0), (-2.0, 3.0), (0.0, 0.0), (10.0, 10.0)] {
            assert_eq!(hit_test(SQUARE, x, y), hit_test(RELATIVE_SQUARE, x, y));
        }
    }

    #[test]
    fn hole_in_donut_is_outside() {
        assert!(is_inside(DONUT, 5.0, 5.0));
        assert!(!is_inside(DONUT, 15.0, 15.0));
        assert!(!is_inside(DONUT, 35.0, 15.0));

        let hole = hit_test(DONUT, 15.0, 12.0);
        assert!(approx_eq!(f64, hole.distance, 2.0));
    }

    #[test]
    fn distance_grows_along_outward_normal() {
        let mut previous = 0.0;
        for step in 0..20 {
            let x = 10.0 + f64::from(step) * 0.5;
            let result = hit_test(SQUARE, x, 5.0);
            assert!(result.distance >= previous);
            previous = result.distance;
        }
    }

    #[test]
    fn malformed_numbers_do_not_poison_the_distance() {
        for data in &["M0,abc L10,10", "M0,0 L10e,0 L10,10 Z", "M0 0 L- 5 L10 10 L0 10 z"] {
            let result = hit_test(data, 20.0, 20.0);
            assert!(!result.distance.is_nan(), "NaN distance for {:?}", data);
        }
    }

    #[test]
    fn letters_in_place_of_numbers_give_infinite_distance() {
        let result = hit_test("M0,abc L10,10", 1.0, 1.0);
        assert_eq!(result, HitTestResult::MISS);
    }

    #[test]
    fn empty_and_garbage_data_miss() {
        assert_eq!(hit_test("", 0.0, 0.0), HitTestResult::MISS);
        assert_eq!(hit_test("   ", 0.0, 0.0), HitTestResult::MISS);
        assert_eq!(hit_test("#!?", 0.0, 0.0), HitTestResult::MISS);
        assert_eq!(hit_test("M5,5", 0.0, 0.0), HitTestResult::MISS);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = hit_test(L_SHAPE, 17.25, 3.5);
        let b = hit_test(L_SHAPE, 17.25, 3.5);
        assert_eq!(a.inside, b.inside);
        assert_eq!(a.distance.to_bits(), b.distance.to_bits());
    }

    #[test]
    fn unclosed_path_is_still_tested_by_parity() {
        // Without Z, the left edge is missing, so the ray from a point in the middle
        // only crosses the right edge.
        assert!(is_inside("M0,0 L10,0 L10,10 L0,10", 5.0, 5.0));
        // From left of the square, it crosses the right edge only; still odd.
        assert!(is_inside("M0,0 L10,0 L10,10 L0,10", -5.0, 5.0));
    }

    #[test]
    fn curve_handling_modes() {
        // A half-disc: flat bottom edge plus an arc over the top.
        let data = "M0,0 L20,0 A10,10 0 0 0 0,0 Z";

        let skip = HitTestOptions { curves: CurveHandling::SkipOperands };
        let chord = HitTestOptions { curves: CurveHandling::Chord };
        let legacy = HitTestOptions { curves: CurveHandling::Legacy };

        // Skipping the arc leaves only the bottom edge and a degenerate close.
        assert!(!hit_test_with_options(data, 10.0, 0.5, &skip).inside);

        // The chord closes the region along the bottom edge, so it has no area.
        assert!(!hit_test_with_options(data, 10.0, 0.5, &chord).inside);
        assert!(approx_eq!(
            f64,
            hit_test_with_options(data, 10.0, 0.5, &chord).distance,
            0.5
        ));

        // Legacy mode reads the arc operands as linetos.
        let legacy_result = hit_test_with_options(data, 10.0, 0.5, &legacy);
        assert!(!legacy_result.distance.is_nan());
    }

    #[test]
    fn compact_arc_flags_keep_the_path_closed() {
        // The arc replaces the left edge; Z then draws the left edge back to the start.
        let spaced = "M0,0 L10,0 L10,10 A5 5 0 0 1 0 10 Z";
        let compact = "M0,0 L10,0 L10,10 A5 5 0 01 0 10 Z";

        let result = hit_test(compact, -3.0, 5.0);
        assert!(!result.inside);
        assert!(approx_eq!(f64, result.distance, 3.0));
        assert_eq!(result, hit_test(spaced, -3.0, 5.0));

        assert!(is_inside(compact, 5.0, 5.0));
        assert_eq!(hit_test("M0,0 L10,0 L10,10 a5 5 0 01-10 0 z", -3.0, 5.0), result);
    }

    #[test]
    fn chords_close_curved_regions() {
        // Quarter disc, traced by its chord it becomes a right triangle.
        let data = "M0,0 L10,0 Q10,10 0,10 Z";
        let chord = HitTestOptions { curves: CurveHandling::Chord };

        assert!(hit_test_with_options(data, 2.0, 2.0, &chord).inside);
        assert!(!hit_test_with_options(data, 8.0, 8.0, &chord).inside);
    }

    #[test]
    fn parsed_path_can_be_reused() {
        let path = Path::parse(SQUARE);
        assert!(path.contains(Point::new(1.0, 1.0)));
        assert!(!path.contains(Point::new(11.0, 1.0)));
        assert_eq!(path.hit_test(Point::new(5.0, 5.0)), hit_test(SQUARE, 5.0, 5.0));
    }
}
