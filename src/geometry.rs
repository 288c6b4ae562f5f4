//! Circle maths for the diagram: areas, centre distance and the overlap lens.
//!
//! Everything here is pure and total. Degenerate inputs (zero radii,
//! coincident centres) resolve to finite numbers, never `NaN`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::PI;

use crate::model::{Circle, Point};

/// Result of comparing two circles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overlap {
    /// Euclidean distance between the two centres.
    pub distance: f64,
    /// Area shared by both discs.
    pub area: f64,
    /// `area / (area_a + area_b)`, or 0 when both discs are empty.
    pub ratio: f64,
}

/// Area of a disc with radius `r`.
#[must_use]
pub fn circle_area(r: f64) -> f64 {
    PI * r * r
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Compare two circles: centre distance, shared area and overlap ratio.
#[must_use]
pub fn overlap(a: &Circle, b: &Circle) -> Overlap {
    let d = distance(a.center, b.center);
    let area = lens_area(a.radius, b.radius, d);
    let total = circle_area(a.radius) + circle_area(b.radius);
    let ratio = if total > 0.0 { area / total } else { 0.0 };
    Overlap { distance: d, area, ratio }
}

/// Area of intersection of two discs with radii `r1`, `r2` whose centres are `d` apart.
fn lens_area(r1: f64, r2: f64, d: f64) -> f64 {
    if r1 <= 0.0 || r2 <= 0.0 {
        return 0.0;
    }
    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        return circle_area(r1.min(r2));
    }
    // Partial overlap: d > 0 here, so both divisions are safe.
    let angle1 = 2.0 * ((r1 * r1 + d * d - r2 * r2) / (2.0 * r1 * d)).clamp(-1.0, 1.0).acos();
    let angle2 = 2.0 * ((r2 * r2 + d * d - r1 * r1) / (2.0 * r2 * d)).clamp(-1.0, 1.0).acos();
    let segment1 = 0.5 * r1 * r1 * (angle1 - angle1.sin());
    let segment2 = 0.5 * r2 * r2 * (angle2 - angle2.sin());
    segment1 + segment2
}
