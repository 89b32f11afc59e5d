use crate::algorithms::convex_hull::{distinct_points, trace_boundary};
use crate::data::{ConvexHull, LineSegment, Point};
use crate::{Error, Orientation, PlanarScalar};

/// $O(n^3)$ convex hull of a set of points.
///
/// Checks every directed point pair `(p, q)` against every remaining
/// point: the pair is a hull edge iff nothing lies strictly clockwise of
/// `p -> q`. A point colinear with the pair blocks the edge unless it sits
/// strictly between the endpoints, which keeps the hull strict: the long
/// edge over a colinear run wins and the interior colinear points never
/// become vertices.
///
/// Only the hull vertices are exposed; the intermediate edge/non-edge
/// partition has no algorithmic meaning.
///
/// # Errors
/// Will return an error iff the input set contains less than three points,
/// or less than two distinct points.
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

  let mut edges: Vec<(Point<T, 2>, Point<T, 2>)> = Vec::new();
  for i in 0..n {
    for j in 0..n {
      if i == j {
        continue;
      }
      if is_hull_edge(&pts, i, j) {
        edges.push((pts[i].clone(), pts[j].clone()));
      }
    }
  }

  let boundary = trace_boundary(edges)?;
  Ok(ConvexHull::new_unchecked(boundary))
}

// Directed edge test: every other point must lie strictly counter-clockwise
// of p -> q, or colinear and strictly between the endpoints.
fn is_hull_edge<T>(pts: &[Point<T, 2>], i: usize, j: usize) -> bool
where
  T: PlanarScalar,
{
  let p = &pts[i];
  let q = &pts[j];
  let edge = LineSegment::new(p.clone(), q.clone());
  for (k, r) in pts.iter().enumerate() {
    if k == i || k == j {
      continue;
    }
    match Point::orient(p, q, r) {
      Orientation::ClockWise => return false,
      Orientation::CoLinear => {
        if !edge.contains(r) {
          return false;
        }
      }
      Orientation::CounterClockWise => {}
    }
  }
  true
}
