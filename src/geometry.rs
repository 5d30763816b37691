//! Stateless geometry helpers used by hit-testing and relaxation.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// Euclidean norm of `v`.
pub fn magnitude<F: Float>(v: Vec2<F>) -> F {
    v.length()
}

/// Euclidean distance between two points.
pub fn distance<F: Float>(p1: Vec2<F>, p2: Vec2<F>) -> F {
    p1.distance(p2)
}

/// Unit vector along `v`, or the zero vector when `v` has zero length.
pub fn normalize<F: Float>(v: Vec2<F>) -> Vec2<F> {
    v.normalize()
}

/// True when `point` lies strictly inside the disc of `radius` around `center`.
pub fn point_in_disc<F: Float>(center: Vec2<F>, point: Vec2<F>, radius: F) -> bool {
    distance(center, point) < radius
}

/// Approximate capsule test: true when `point` is within `epsilon` of the
/// segment `a`-`b`, measured as the slack in the triangle inequality
/// `|d(p, a) + d(p, b) - d(a, b)|`.
///
/// Cheaper than a perpendicular-distance test. The capsule it describes is
/// an ellipse with foci at the endpoints, so it is thinner at the ends and
/// can report hits slightly beyond them.
pub fn point_near_segment<F: Float>(a: Vec2<F>, b: Vec2<F>, point: Vec2<F>, epsilon: F) -> bool {
    let length = distance(a, b);
    let slack = distance(point, a) + distance(point, b) - length;
    slack.abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_of_3_4() {
        assert!((magnitude(Vec2::new(3.0f32, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_normalize_is_zero_not_nan() {
        let n = normalize(Vec2::new(0.0f32, 0.0));
        assert_eq!(n, Vec2::new(0.0, 0.0));
        assert!(n.is_finite());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = normalize(Vec2::new(-6.0f64, 8.0));
        assert!((magnitude(n) - 1.0).abs() < 1e-12);
        assert!((n.x + 0.6).abs() < 1e-12);
    }

    #[test]
    fn disc_boundary_is_exclusive() {
        let c = Vec2::new(0.0f32, 0.0);
        assert!(point_in_disc(c, Vec2::new(9.99, 0.0), 10.0));
        assert!(!point_in_disc(c, Vec2::new(10.0, 0.0), 10.0));
    }

    #[test]
    fn segment_midpoint_hits() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!(point_near_segment(a, b, Vec2::new(50.0, 0.0), 2.5));
    }

    #[test]
    fn segment_far_point_misses() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!(!point_near_segment(a, b, Vec2::new(50.0, 30.0), 2.5));
    }

    #[test]
    fn segment_test_accepts_slightly_past_endpoint() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(100.0, 0.0);
        // slack = 2 * 1.0, inside epsilon
        assert!(point_near_segment(a, b, Vec2::new(101.0, 0.0), 2.5));
        assert!(!point_near_segment(a, b, Vec2::new(102.0, 0.0), 2.5));
    }
}
