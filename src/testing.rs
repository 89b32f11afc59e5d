// This module contains the proptest strategies shared by the test modules:
//  * bounded integer points and point clouds
//  * float points with exactly representable coordinates
//  * line segments
// Coordinates are kept small so that clouds hit duplicate and colinear
// configurations often instead of almost never.
use proptest::collection::vec;
use proptest::prelude::*;

use crate::data::{LineSegment, Point};

pub fn any_32() -> impl Strategy<Value = Point<i32>> {
  (-10_000..=10_000i32, -10_000..=10_000i32).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn point_cloud() -> impl Strategy<Value = Vec<Point<i32>>> {
  vec((-50..=50i32, -50..=50i32).prop_map(|(x, y)| Point::new([x, y])), 0..100)
}

// Tight coordinate range and few points, for the cubic-time hull.
pub fn small_point_cloud() -> impl Strategy<Value = Vec<Point<i32>>> {
  vec((-8..=8i32, -8..=8i32).prop_map(|(x, y)| Point::new([x, y])), 0..24)
}

// Integer-valued floats: every coordinate, difference, and product involved
// in the hull predicates is exact.
pub fn float_cloud() -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(
    (-100..=100i32, -100..=100i32).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)])),
    0..100,
  )
}

pub fn any_segment() -> impl Strategy<Value = LineSegment<i32>> {
  let coord = || -100..=100i32;
  (coord(), coord(), coord(), coord())
    .prop_map(|(x1, y1, x2, y2)| LineSegment::from(((x1, y1), (x2, y2))))
}
