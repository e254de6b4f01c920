use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use vibrant_core::geometry::{contains_point_with_epsilon, corners};
use vibrant_core::{contains_point, Vector2};

#[test]
fn center_is_inside() {
    let pos = Vector2::new(640.0, 360.0);
    let size = Vector2::new(100.0, 25.0);
    for rotation in [0.0, FRAC_PI_4, FRAC_PI_2, 2.5] {
        assert!(contains_point(pos, pos, size, rotation));
    }
}

#[test]
fn far_points_are_outside() {
    let pos = Vector2::new(10.0, -4.0);
    let size = Vector2::new(30.0, 8.0);
    let reach = size.max_element() + 1.0;
    for rotation in [0.0, 0.3, FRAC_PI_2] {
        for offset in [
            Vector2::new(reach, 0.0),
            Vector2::new(-reach, 0.0),
            Vector2::new(0.0, reach),
            Vector2::new(0.0, -reach),
        ] {
            assert!(!contains_point(pos + offset, pos, size, rotation));
        }
    }
}

#[test]
fn edges_and_corners_count_as_inside() {
    let pos = Vector2::ZERO;
    let size = Vector2::new(4.0, 2.0);
    for corner in corners(pos, size, 0.7) {
        assert!(contains_point(corner, pos, size, 0.7));
    }
    assert!(contains_point(Vector2::new(2.0, 0.0), pos, size, 0.0));
    assert!(!contains_point(Vector2::new(2.001, 0.0), pos, size, 0.0));
}

#[test]
fn quarter_turn_swaps_extent() {
    let pos = Vector2::ZERO;
    let size = Vector2::new(10.0, 2.0);
    let probe = Vector2::new(0.0, 4.0);
    assert!(!contains_point(probe, pos, size, 0.0));
    assert!(contains_point(probe, pos, size, FRAC_PI_2));
}

#[test]
fn epsilon_widens_the_edge() {
    let pos = Vector2::ZERO;
    let size = Vector2::new(2.0, 2.0);
    let just_out = Vector2::new(1.0 + 1e-6, 0.0);
    assert!(!contains_point_with_epsilon(just_out, pos, size, 0.0, 0.0));
    assert!(contains_point_with_epsilon(just_out, pos, size, 0.0, 1e-3));
}

#[test]
fn degenerate_bodies_contain_nothing() {
    let origin = Vector2::ZERO;
    assert!(!contains_point(Vector2::new(5000.0, -5000.0), origin, Vector2::ZERO, 0.0));
    assert!(!contains_point(origin, origin, Vector2::ZERO, 0.0));

    // A zero-height bar would otherwise match its whole axis line.
    let bar = Vector2::new(10.0, 0.0);
    assert!(!contains_point(Vector2::new(9000.0, 0.0), origin, bar, 0.0));
    assert!(!contains_point(Vector2::new(1.0, 0.0), origin, bar, FRAC_PI_4));
}
