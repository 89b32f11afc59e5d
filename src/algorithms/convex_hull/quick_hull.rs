use crate::algorithms::convex_hull::{distinct_points, trace_boundary};
use crate::data::{ConvexHull, Point};
use crate::{Error, PlanarScalar};

// https://en.wikipedia.org/wiki/Quickhull

/// Convex hull of a set of points by divide and conquer.
///
/// [QuickHull][wiki] splits the points along the line through the two
/// x-extremes and recursively expands each directed edge towards the point
/// farthest from it, until no point remains strictly outside. The recursion
/// is run on an explicit work stack, so hull-heavy inputs (every point on
/// the boundary) cannot exhaust the call stack.
///
/// Expanding only on strictly-outside points makes the hull strict:
/// colinear boundary points are never picked as far points and drop out.
///
/// # Errors
/// Will return an error iff the input set contains less than three points,
/// or less than two distinct points.
///
/// [wiki]: https://en.wikipedia.org/wiki/Quickhull
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
  // distinct_points sorts lexicographically, so the two x-extremes sit at
  // the ends.
  let left = pts[0].clone();
  let right = pts[pts.len() - 1].clone();

  let below = outside_points(&left, &right, &pts);
  let above = outside_points(&right, &left, &pts);

  // Directed edges with their strictly-clockwise (outside) subsets. For a
  // CCW boundary the interior is to the left of each edge, so an edge with
  // an empty outside subset is final.
  let mut tasks: Vec<(Point<T, 2>, Point<T, 2>, Vec<Point<T, 2>>)> =
    vec![(left.clone(), right.clone(), below), (right, left, above)];
  let mut edges: Vec<(Point<T, 2>, Point<T, 2>)> = Vec::new();

  while let Some((a, b, outside)) = tasks.pop() {
    let far = match farthest_from_line(&a, &b, &outside) {
      None => {
        edges.push((a, b));
        continue;
      }
      Some(far) => far,
    };
    let first = outside_points(&a, &far, &outside);
    let second = outside_points(&far, &b, &outside);
    tasks.push((a, far.clone(), first));
    tasks.push((far, b, second));
  }

  let boundary = trace_boundary(edges)?;
  Ok(ConvexHull::new_unchecked(boundary))
}

// Points strictly clockwise of the directed line a -> b.
fn outside_points<T>(a: &Point<T, 2>, b: &Point<T, 2>, pts: &[Point<T, 2>]) -> Vec<Point<T, 2>>
where
  T: PlanarScalar,
{
  pts
    .iter()
    .filter(|p| Point::orient(a, b, p).is_cw())
    .cloned()
    .collect()
}

fn farthest_from_line<T>(a: &Point<T, 2>, b: &Point<T, 2>, pts: &[Point<T, 2>]) -> Option<Point<T, 2>>
where
  T: PlanarScalar,
{
  pts
    .iter()
    .max_by(|p, q| Point::cmp_line_distance(a, b, p, q))
    .cloned()
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
  fn convex_hull_square() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
      Point::new([2, 2]),
    ];
    let hull = convex_hull(points).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(
      hull.vertices(),
      &[
        Point::new([0, 0]),
        Point::new([4, 0]),
        Point::new([4, 4]),
        Point::new([0, 4]),
      ]
    );
  }

  #[test]
  fn convex_hull_colinear_edge() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([2, 0]),
      Point::new([4, 0]),
      Point::new([2, 3]),
    ];
    let hull = convex_hull(points).unwrap();
    assert_eq!(
      hull.vertices(),
      &[Point::new([0, 0]), Point::new([4, 0]), Point::new([2, 3])]
    );
  }

  #[test]
  fn convex_hull_fully_colinear() {
    let points = vec![
      Point::new([2, 1]),
      Point::new([4, 2]),
      Point::new([0, 0]),
      Point::new([6, 3]),
    ];
    let hull = convex_hull(points).unwrap();
    assert!(hull.is_degenerate());
    assert_eq!(hull.vertices(), &[Point::new([0, 0]), Point::new([6, 3])]);
  }

  #[test]
  fn convex_hull_vertical_line() {
    let points = vec![
      Point::new([1, 5]),
      Point::new([1, 1]),
      Point::new([1, 3]),
    ];
    let hull = convex_hull(points).unwrap();
    assert!(hull.is_degenerate());
    assert_eq!(hull.vertices(), &[Point::new([1, 1]), Point::new([1, 5])]);
  }

  // Every point on the boundary: the explicit work stack has to cope with
  // maximal splitting depth.
  #[test]
  fn convex_hull_all_on_boundary() {
    let mut points = Vec::new();
    for i in -50i64..=50 {
      points.push(Point::new([i, i * i]));
    }
    let hull = convex_hull(points.clone()).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.vertices().len(), points.len());
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
