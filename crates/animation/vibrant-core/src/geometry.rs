//! Oriented-rectangle geometry: corner placement and point containment.

use crate::vector::{Radians, Vector2};

/// Default relative tolerance for [`contains_point`].
pub const DEFAULT_HIT_EPSILON: f64 = 1e-9;

/// Corners of a `size` rectangle centered on `position`, rotated about that
/// center. Order: A(-,-), B(+,-), C(+,+), D(-,+).
pub fn corners(position: Vector2, size: Vector2, rotation: Radians) -> [Vector2; 4] {
    let half = size / 2.0;
    [
        Vector2::new(-half.x, -half.y),
        Vector2::new(half.x, -half.y),
        Vector2::new(half.x, half.y),
        Vector2::new(-half.x, half.y),
    ]
    .map(|offset| position + offset.rotated(rotation))
}

fn triangle_area(a: Vector2, b: Vector2, c: Vector2) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
}

/// Whether `point` lies inside (or on the edge of) the rotated rectangle.
pub fn contains_point(point: Vector2, position: Vector2, size: Vector2, rotation: Radians) -> bool {
    contains_point_with_epsilon(point, position, size, rotation, DEFAULT_HIT_EPSILON)
}

/// Area-sum test: the four triangles formed by `point` and each edge add up
/// to the rectangle's area exactly when the point is inside.
///
/// A rectangle with zero area contains nothing.
pub fn contains_point_with_epsilon(
    point: Vector2,
    position: Vector2,
    size: Vector2,
    rotation: Radians,
    epsilon: f64,
) -> bool {
    let area = (size.x * size.y).abs();
    if area == 0.0 {
        return false;
    }
    let [a, b, c, d] = corners(position, size, rotation);
    let sum = triangle_area(point, a, b)
        + triangle_area(point, b, c)
        + triangle_area(point, c, d)
        + triangle_area(point, d, a);
    sum <= area + epsilon * area.max(1.0)
}
