use crate::algorithms::convex_hull::distinct_points;
use crate::data::{ConvexHull, Point};
use crate::{Error, PlanarScalar};

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Algorithms
// (Andrew's monotone chain)

/// $O(n \log n)$ convex hull of a set of points.
///
/// Monotone chain sorts the points lexicographically and builds the lower
/// and upper boundary chains independently, each with the same strict
/// pop-while-not-CCW rule as Graham scan. The two constructions must agree
/// on every input.
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

  let mut lower = build_chain(pts.iter());
  let mut upper = build_chain(pts.iter().rev());

  // The chains share their endpoints; drop each chain's last point before
  // concatenating.
  lower.pop();
  upper.pop();
  lower.extend(upper);
  Ok(ConvexHull::new_unchecked(lower))
}

// Pop the last accepted point while the last three do not turn strictly
// counter-clockwise. Over the ascending order this yields the lower chain,
// over the descending order the upper chain.
fn build_chain<'a, T, I>(pts: I) -> Vec<Point<T, 2>>
where
  T: PlanarScalar + 'a,
  I: Iterator<Item = &'a Point<T, 2>>,
{
  let mut chain: Vec<Point<T, 2>> = Vec::new();
  for p in pts {
    while chain.len() >= 2
      && !Point::orient(&chain[chain.len() - 2], &chain[chain.len() - 1], p).is_ccw()
    {
      chain.pop();
    }
    chain.push(p.clone());
  }
  chain
}
