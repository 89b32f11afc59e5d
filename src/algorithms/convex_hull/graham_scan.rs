use std::cmp::Ordering;

use crate::data::{ConvexHull, Point};
use crate::{Error, Orientation, PlanarScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are valid convex hulls.
//    No points are outside the resulting hull.
/// $O(n \log n)$ convex hull of a set of points.
///
/// [Graham scan][wiki] sorts the points by polar angle around the
/// bottom-most point and filters them with a single pop-while-not-CCW pass.
///
/// # Errors
/// Will return an error iff the input set contains less than three points,
/// or less than two distinct points.
///
/// # Examples
///
/// ```rust
/// # use hullscan::algorithms::convex_hull::graham_scan::convex_hull;
/// # use hullscan::data::Point;
/// # use hullscan::Error;
/// let dups = vec![Point::new([0,0])].repeat(3);
/// assert_eq!(
///   convex_hull(dups).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(mut pts: Vec<Point<T, 2>>) -> Result<ConvexHull<T>, Error>
where
  T: PlanarScalar,
{
  if pts.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  let pivot = smallest_point(&pts)?;

  // The pivot is the bottom-most point, so every angle around it lies in
  // [0°, 180°) and a single turn test is a total order on angles.
  pts.sort_unstable_by(|a, b| {
    angle_cmp(&pivot, a, b).then_with(|| pivot.cmp_distance_to(a, b))
  });
  pts.dedup();

  // Of each equal-angle run keep only the farthest point. The nearer ones
  // are either interior or sit on a hull edge through the pivot, and the
  // strict-hull convention excludes both.
  let mut filtered: Vec<Point<T, 2>> = Vec::with_capacity(pts.len());
  for p in pts {
    while let Some(last) = filtered.last() {
      if last != &pivot && Point::orient(&pivot, last, &p).is_colinear() {
        filtered.pop();
      } else {
        break;
      }
    }
    filtered.push(p);
  }
  if filtered.len() < 2 {
    return Err(Error::InsufficientVertices);
  }

  // Pop the last accepted point while the last three do not turn strictly
  // counter-clockwise.
  let mut stack: Vec<Point<T, 2>> = Vec::with_capacity(filtered.len());
  for p in filtered {
    while stack.len() >= 2
      && !Point::orient(&stack[stack.len() - 2], &stack[stack.len() - 1], &p).is_ccw()
    {
      stack.pop();
    }
    stack.push(p);
  }
  Ok(ConvexHull::new_unchecked(stack))
}

// Orders two points by angle around the pivot: a comes first when the walk
// pivot -> a -> b turns counter-clockwise.
fn angle_cmp<T>(pivot: &Point<T, 2>, a: &Point<T, 2>, b: &Point<T, 2>) -> Ordering
where
  T: PlanarScalar,
{
  match Point::orient(pivot, a, b) {
    Orientation::CounterClockWise => Ordering::Less,
    Orientation::ClockWise => Ordering::Greater,
    Orientation::CoLinear => Ordering::Equal,
  }
}

// Find the bottom-most, then left-most point.
// O(n)
fn smallest_point<T>(pts: &[Point<T, 2>]) -> Result<Point<T, 2>, Error>
where
  T: PlanarScalar,
{
  Ok(
    pts
      .iter()
      .min_by(|a, b| TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord())))
      .ok_or(Error::InsufficientVertices)?
      .clone(),
  )
}
