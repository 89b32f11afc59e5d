use crate::data::{ConvexHull, Point};
use crate::{Error, PlanarScalar, TotalOrd};

pub mod brute_force;
pub mod graham_scan;
pub mod jarvis_march;
pub mod monotone_chain;
pub mod quick_hull;

/// Selects one of the five hull constructors. All of them honor the same
/// contract: strict hull (no colinear boundary vertices), canonical CCW
/// output, identical degenerate-input behavior. The tag is a pure dispatch
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullAlgorithm {
  BruteForce,
  GrahamScan,
  JarvisMarch,
  QuickHull,
  MonotoneChain,
}

impl HullAlgorithm {
  pub const ALL: [HullAlgorithm; 5] = [
    HullAlgorithm::BruteForce,
    HullAlgorithm::GrahamScan,
    HullAlgorithm::JarvisMarch,
    HullAlgorithm::QuickHull,
    HullAlgorithm::MonotoneChain,
  ];
}

impl std::fmt::Display for HullAlgorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      HullAlgorithm::BruteForce => write!(f, "brute-force"),
      HullAlgorithm::GrahamScan => write!(f, "graham-scan"),
      HullAlgorithm::JarvisMarch => write!(f, "jarvis-march"),
      HullAlgorithm::QuickHull => write!(f, "quick-hull"),
      HullAlgorithm::MonotoneChain => write!(f, "monotone-chain"),
    }
  }
}

/// Convex hull of a set of points, using the default algorithm (Graham
/// scan).
///
/// # Errors
/// Will return an error iff the input set contains less than three points,
/// or less than two distinct points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All hull vertices are from the input set.
///
/// # Examples
///
/// ```rust
/// # use hullscan::algorithms::convex_hull;
/// # use hullscan::data::Point;
/// # use hullscan::Error;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// ```
pub fn convex_hull<T>(pts: Vec<Point<T, 2>>) -> Result<ConvexHull<T>, Error>
where
  T: PlanarScalar,
{
  graham_scan::convex_hull(pts)
}

/// Convex hull of a set of points, dispatching on an [`HullAlgorithm`] tag.
///
/// Every algorithm returns the same hull for the same input: the same
/// vertex set, in the same canonical counter-clockwise order.
pub fn convex_hull_with<T>(
  algorithm: HullAlgorithm,
  pts: Vec<Point<T, 2>>,
) -> Result<ConvexHull<T>, Error>
where
  T: PlanarScalar,
{
  match algorithm {
    HullAlgorithm::BruteForce => brute_force::convex_hull(pts),
    HullAlgorithm::GrahamScan => graham_scan::convex_hull(pts),
    HullAlgorithm::JarvisMarch => jarvis_march::convex_hull(pts),
    HullAlgorithm::QuickHull => quick_hull::convex_hull(pts),
    HullAlgorithm::MonotoneChain => monotone_chain::convex_hull(pts),
  }
}

// Lexicographic sort by (x, y) plus removal of exact duplicates. Every
// algorithm runs on distinct points; duplicates would stall Jarvis march
// and break the brute-force edge test.
pub(crate) fn distinct_points<T>(mut pts: Vec<Point<T, 2>>) -> Vec<Point<T, 2>>
where
  T: PlanarScalar,
{
  pts.sort_unstable_by(|a, b| {
    TotalOrd::total_cmp(&(a.x_coord(), a.y_coord()), &(b.x_coord(), b.y_coord()))
  });
  pts.dedup();
  pts
}

// Assembles directed hull edges into one CCW boundary walk. Both the
// brute-force and quick-hull constructors emit edges in no particular
// order; each vertex has exactly one outgoing edge, so following
// successors from the canonical start traces the boundary.
pub(crate) fn trace_boundary<T>(edges: Vec<(Point<T, 2>, Point<T, 2>)>) -> Result<Vec<Point<T, 2>>, Error>
where
  T: PlanarScalar,
{
  let sources: Vec<Point<T, 2>> = edges.iter().map(|(a, _)| a.clone()).collect();
  let start_idx = crate::data::lowest_leftmost(&sources).ok_or(Error::InsufficientVertices)?;
  let start = sources[start_idx].clone();

  let mut boundary = Vec::with_capacity(edges.len());
  let mut current = start.clone();
  loop {
    let next = edges
      .iter()
      .find(|(a, _)| a == &current)
      .map(|(_, b)| b.clone())
      .ok_or(Error::ConvexViolation)?;
    boundary.push(current);
    if next == start {
      break;
    }
    current = next;
  }
  Ok(boundary)
}
