#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use elbow_rs::internals::math::chord::Chord;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_chord_line_vector_and_length() {
    let chord = Chord::new((1.0, 2.0), (4.0, 6.0));
    assert_relative_eq!(chord.dx(), 3.0);
    assert_relative_eq!(chord.dy(), 4.0);
    assert_relative_eq!(chord.length(), 5.0);
    assert_eq!(chord.start(), (1.0, 2.0));
    assert!(!chord.is_degenerate());
}

#[test]
fn test_chord_from_endpoints() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 0.0, 0.0, 5.0, 5.0];
    let chord = Chord::from_endpoints(&x, &y).unwrap();
    assert_relative_eq!(chord.dx(), 4.0);
    assert_relative_eq!(chord.dy(), 5.0);
    assert_relative_eq!(chord.length(), 41.0f64.sqrt());
}

#[test]
fn test_chord_from_empty_endpoints() {
    let empty: [f64; 0] = [];
    assert!(Chord::from_endpoints(&empty, &empty).is_none());
}

// ============================================================================
// Distance Tests
// ============================================================================

#[test]
fn test_cross_magnitude() {
    // (0,0) -> (4,5); point (2,0): |4*0 - 5*2| = 10
    let chord = Chord::new((0.0, 0.0), (4.0, 5.0));
    assert_relative_eq!(chord.cross_magnitude(2.0, 0.0), 10.0);
    assert_relative_eq!(chord.cross_magnitude(1.0, 0.0), 5.0);
    assert_relative_eq!(chord.cross_magnitude(3.0, 5.0), 5.0);
}

#[test]
fn test_perpendicular_distance_horizontal_chord() {
    let chord = Chord::new((0.0, 0.0), (10.0, 0.0));
    assert_relative_eq!(chord.perpendicular_distance(3.0, 2.5), 2.5);
    assert_relative_eq!(chord.perpendicular_distance(7.0, -4.0), 4.0);
}

#[test]
fn test_perpendicular_distance_measures_infinite_line() {
    // Points beyond the segment are measured against the extended line.
    let chord = Chord::new((0.0, 0.0), (1.0, 1.0));
    assert_relative_eq!(chord.perpendicular_distance(5.0, 5.0), 0.0);
    assert_relative_eq!(chord.perpendicular_distance(-1.0, 1.0), 2.0f64.sqrt());
}

#[test]
fn test_endpoints_have_zero_distance() {
    let chord = Chord::new((1.0, 3.0), (-2.0, 7.0));
    assert_relative_eq!(chord.perpendicular_distance(1.0, 3.0), 0.0);
    assert_relative_eq!(chord.perpendicular_distance(-2.0, 7.0), 0.0);
}

#[test]
fn test_distance_is_direction_independent() {
    let forward = Chord::new((0.0, 0.0), (4.0, 5.0));
    let backward = Chord::new((4.0, 5.0), (0.0, 0.0));
    for &(px, py) in &[(1.0, 0.0), (2.0, 0.0), (3.0, 5.0), (-1.0, 8.0)] {
        assert_relative_eq!(
            forward.perpendicular_distance(px, py),
            backward.perpendicular_distance(px, py),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_degenerate_chord_distance_is_nan() {
    let chord = Chord::new((2.0f64, 2.0), (2.0, 2.0));
    assert!(chord.is_degenerate());
    assert_eq!(chord.length(), 0.0);
    assert_eq!(chord.cross_magnitude(5.0, -1.0), 0.0);
    assert!(chord.perpendicular_distance(5.0, -1.0).is_nan());
}

#[test]
fn test_distinct_endpoints_can_underflow_to_degenerate() {
    let chord = Chord::new((0.0f64, 0.0), (2e-170, 0.0));
    assert_eq!(chord.dx(), 2e-170);
    assert_eq!(chord.dy(), 0.0);
    assert!(chord.is_degenerate());
}

#[test]
fn test_chord_f32() {
    let chord = Chord::new((0.0f32, 0.0), (3.0, 4.0));
    assert_relative_eq!(chord.length(), 5.0f32);
    assert_relative_eq!(chord.perpendicular_distance(3.0, 0.0), 2.4f32, epsilon = 1e-6);
}
