use std::cmp::Ordering;

use crate::algorithms::convex_hull::distinct_points;
use crate::data::{ConvexHull, Point};
use crate::{Error, Orientation, PlanarScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

/// Convex hull of a set of points by gift wrapping.
///
/// [Jarvis march][wiki] starts at the bottom-most point and repeatedly
/// wraps to the most counter-clockwise remaining point. Candidates exactly
/// colinear with the current best are resolved towards the farthest one,
/// so colinear boundary points can never stall the wrap and are excluded
/// from the output.
///
/// # Errors
/// Will return an error iff the input set contains less than three points,
/// or less than two distinct points.
///
/// # Time complexity
/// $O(n h)$ where h is the number of hull vertices.
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T, 2>>) -> Result<ConvexHull<T>, Error>
where
  T: PlanarScalar,
{
  if pts.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  let pts = distinct_points(pts);
  if pts.len() < 2 {
    return Err(Error::InsufficientVertices);
  }
  let n = pts.len();
  let start = start_index(&pts)?;

  let mut hull: Vec<Point<T, 2>> = Vec::with_capacity(n);
  let mut p = start;
  loop {
    hull.push(pts[p].clone());
    let mut q = (p + 1) % n;
    for i in 0..n {
      let orientation = Point::orient(&pts[p], &pts[i], &pts[q]);
      if orientation == Orientation::CounterClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }
    p = q;
    if p == start {
      break;
    }
  }
  Ok(ConvexHull::new_unchecked(hull))
}

// Index of the bottom-most, then left-most point.
// O(n)
fn start_index<T>(pts: &[Point<T, 2>]) -> Result<usize, Error>
where
  T: PlanarScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord()))
    })
    .map(|(index, _)| index)
    .ok_or(Error::InsufficientVertices)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use claims::assert_ok;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn convex_hull_colinear() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([3, 0]),
      Point::new([4, 0]),
      Point::new([1, 1]),
    ];
    let hull = convex_hull(points).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(
      hull.vertices(),
      &[Point::new([0, 0]), Point::new([4, 0]), Point::new([1, 1])]
    );
  }

  #[test]
  fn convex_hull_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 2]),
      Point::new([2, 2]),
      Point::new([5, 1]),
      Point::new([5, 1]),
    ];
    let hull = convex_hull(points).unwrap();
    assert_ok!(hull.validate());
  }

  #[test]
  fn convex_hull_insufficient_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([0, 0]),
      Point::new([0, 0]),
      Point::new([0, 0]),
    ];
    assert_eq!(convex_hull(points).err(), Some(Error::InsufficientVertices));
  }

  #[test]
  fn convex_hull_fully_colinear() {
    let points = vec![
      Point::new([3, 3]),
      Point::new([1, 1]),
      Point::new([0, 0]),
      Point::new([2, 2]),
    ];
    let hull = convex_hull(points).unwrap();
    assert!(hull.is_degenerate());
    assert_eq!(hull.vertices(), &[Point::new([0, 0]), Point::new([3, 3])]);
  }

  #[test]
  fn convex_hull_negative_coords() {
    let points: Vec<Point<i8>> = vec![
      Point::new([0, 0]),
      Point::new([0, -10]),
      Point::new([-13, 0]),
    ];
    let hull = convex_hull(points).unwrap();
    assert_ok!(hull.validate());
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(point_cloud())] pts: Vec<Point<i32>>) {
    if let Ok(hull) = convex_hull(pts.clone()) {
      prop_assert_eq!(hull.validate().err(), None);
      for pt in pts.iter() {
        prop_assert_ne!(hull.locate(pt), PointLocation::Outside)
      }
      for pt in hull.iter() {
        prop_assert!(pts.contains(pt))
      }
    }
  }
}
