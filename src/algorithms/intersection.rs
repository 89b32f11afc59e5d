use std::cmp::Ordering;

use num_traits::Float;

use crate::data::{coord_between, LineSegment, Point};
use crate::PlanarScalar;

/// How a pair of segments relate to one another. `Parallel` covers distinct
/// parallel supporting lines as well as colinear segments that never touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRelation {
  Crossing,
  Parallel,
  CollinearOverlap,
  Disjoint,
}

/// Selects one of the three intersection predicates. A pure dispatch key,
/// like [`HullAlgorithm`](crate::algorithms::HullAlgorithm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionAlgorithm {
  Ccw,
  Parametric,
  Slope,
}

impl IntersectionAlgorithm {
  pub const ALL: [IntersectionAlgorithm; 3] = [
    IntersectionAlgorithm::Ccw,
    IntersectionAlgorithm::Parametric,
    IntersectionAlgorithm::Slope,
  ];
}

impl std::fmt::Display for IntersectionAlgorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      IntersectionAlgorithm::Ccw => write!(f, "ccw"),
      IntersectionAlgorithm::Parametric => write!(f, "parametric"),
      IntersectionAlgorithm::Slope => write!(f, "slope"),
    }
  }
}

/// Intersection test dispatching on an [`IntersectionAlgorithm`] tag.
///
/// The slope predicate only exists over floats, so the dispatch is
/// float-only; the two exact predicates are also callable directly for any
/// scalar.
pub fn intersects_with<F>(
  algorithm: IntersectionAlgorithm,
  l1: &LineSegment<F>,
  l2: &LineSegment<F>,
) -> bool
where
  F: Float + PlanarScalar,
{
  match algorithm {
    IntersectionAlgorithm::Ccw => ccw_intersects(l1, l2),
    IntersectionAlgorithm::Parametric => parametric_intersects(l1, l2),
    IntersectionAlgorithm::Slope => slope_intersects(l1, l2),
  }
}

/// Segment intersection by orientation products.
///
/// `(p1,p2)` and `(p3,p4)` intersect iff the endpoints of each segment lie
/// on opposite sides (or on) the other segment's supporting line: both
/// orientation products are `<= 0`. Touching endpoints therefore count as
/// intersecting.
///
/// Colinear configurations degenerate to `0 * 0 <= 0` and are reported as
/// intersecting even when the segments are disjoint on their shared line.
/// That matches the plain product formulation; use
/// [`parametric_relation`] when the distinction matters.
///
/// # Examples
///
/// ```rust
/// # use hullscan::algorithms::intersection::ccw_intersects;
/// # use hullscan::data::LineSegment;
/// let l1 = LineSegment::from(((0, 0), (4, 4)));
/// let l2 = LineSegment::from(((0, 4), (4, 0)));
/// assert!(ccw_intersects(&l1, &l2));
/// ```
pub fn ccw_intersects<T>(l1: &LineSegment<T>, l2: &LineSegment<T>) -> bool
where
  T: PlanarScalar,
{
  let d1 = Point::orient(&l1.a, &l1.b, &l2.a).sign();
  let d2 = Point::orient(&l1.a, &l1.b, &l2.b).sign();
  let d3 = Point::orient(&l2.a, &l2.b, &l1.a).sign();
  let d4 = Point::orient(&l2.a, &l2.b, &l1.b).sign();
  d1 * d2 <= 0 && d3 * d4 <= 0
}

/// Segment intersection by solving the 2×2 parametric system.
///
/// The segments intersect iff both line parameters `t` and `u` land in
/// `[0, 1]`. A zero denominator (parallel supporting lines) is reported as
/// non-intersecting regardless of colinear overlap; [`parametric_relation`]
/// classifies those cases.
///
/// The in-range checks compare numerators against the denominator instead
/// of dividing, so the test is exact for every scalar, integers included.
pub fn parametric_intersects<T>(l1: &LineSegment<T>, l2: &LineSegment<T>) -> bool
where
  T: PlanarScalar,
{
  parametric_relation(l1, l2) == SegmentRelation::Crossing
}

/// Full classification of a segment pair from the parametric system:
/// crossing, parallel, colinear-overlapping, or disjoint.
pub fn parametric_relation<T>(l1: &LineSegment<T>, l2: &LineSegment<T>) -> SegmentRelation
where
  T: PlanarScalar,
{
  let [x1, y1] = l1.a.array.clone();
  let [x2, y2] = l1.b.array.clone();
  let [x3, y3] = l2.a.array.clone();
  let [x4, y4] = l2.b.array.clone();

  let den = (x1.clone() - x2.clone()) * (y3.clone() - y4.clone())
    - (y1.clone() - y2.clone()) * (x3.clone() - x4.clone());
  let zero = T::from_constant(0);

  if den.total_cmp(&zero) == Ordering::Equal {
    let colinear = Point::orient(&l1.a, &l1.b, &l2.a).is_colinear()
      && Point::orient(&l1.a, &l1.b, &l2.b).is_colinear();
    return if colinear && boxes_touch(l1, l2) {
      SegmentRelation::CollinearOverlap
    } else {
      SegmentRelation::Parallel
    };
  }

  let t_num = (x1.clone() - x3.clone()) * (y3.clone() - y4) - (y1.clone() - y3.clone()) * (x3.clone() - x4);
  let u_num = -((x1.clone() - x2) * (y1.clone() - y3) - (y1 - y2) * (x1 - x3));

  if unit_range(&t_num, &den, &zero) && unit_range(&u_num, &den, &zero) {
    SegmentRelation::Crossing
  } else {
    SegmentRelation::Disjoint
  }
}

// num/den in [0,1] without dividing: num lies between 0 and den.
fn unit_range<T: PlanarScalar>(num: &T, den: &T, zero: &T) -> bool {
  match den.total_cmp(zero) {
    Ordering::Greater => {
      num.total_cmp(zero) != Ordering::Less && num.total_cmp(den) != Ordering::Greater
    }
    Ordering::Less => {
      num.total_cmp(zero) != Ordering::Greater && num.total_cmp(den) != Ordering::Less
    }
    Ordering::Equal => false,
  }
}

// Axis-aligned bounding boxes share at least one point. Only meaningful
// here for colinear segments, where it decides overlap on the shared line.
fn boxes_touch<T: PlanarScalar>(l1: &LineSegment<T>, l2: &LineSegment<T>) -> bool {
  let on_axis = |a: &T, b: &T, c: &T, d: &T| {
    coord_between(a, c, d) || coord_between(b, c, d) || coord_between(c, a, b)
  };
  on_axis(l1.a.x_coord(), l1.b.x_coord(), l2.a.x_coord(), l2.b.x_coord())
    && on_axis(l1.a.y_coord(), l1.b.y_coord(), l2.a.y_coord(), l2.b.y_coord())
}

/// Segment intersection by comparing slopes, with an explicit tolerance.
///
/// A vertical segment gets an infinite slope sentinel. Slopes equal within
/// `epsilon` (or both infinite) are reported as non-intersecting, which
/// folds parallel and colinear-overlapping pairs into one answer.
/// Otherwise the supporting lines' crossing point is computed algebraically
/// and bounds-checked against both segments' bounding boxes.
///
/// The computed crossing point is subject to floating-point rounding; a
/// crossing exactly on a bounding-box edge can land on either side of the
/// check. Exact inputs with a comfortably interior crossing are safe.
pub fn slope_intersects_within<F>(l1: &LineSegment<F>, l2: &LineSegment<F>, epsilon: F) -> bool
where
  F: Float,
{
  let s1 = slope(l1);
  let s2 = slope(l2);
  if slopes_equal(s1, s2, epsilon) {
    return false;
  }
  let (x, y) = if s1.is_infinite() {
    let x = *l1.a.x_coord();
    (x, s2 * (x - *l2.a.x_coord()) + *l2.a.y_coord())
  } else if s2.is_infinite() {
    let x = *l2.a.x_coord();
    (x, s1 * (x - *l1.a.x_coord()) + *l1.a.y_coord())
  } else {
    let x = (s1 * *l1.a.x_coord() - s2 * *l2.a.x_coord() + *l2.a.y_coord() - *l1.a.y_coord())
      / (s1 - s2);
    (x, s1 * (x - *l1.a.x_coord()) + *l1.a.y_coord())
  };
  within_bounds(l1, x, y) && within_bounds(l2, x, y)
}

/// [`slope_intersects_within`] with a zero tolerance: slopes are compared
/// for exact equality.
pub fn slope_intersects<F>(l1: &LineSegment<F>, l2: &LineSegment<F>) -> bool
where
  F: Float,
{
  slope_intersects_within(l1, l2, F::zero())
}

fn slope<F: Float>(l: &LineSegment<F>) -> F {
  let run = *l.b.x_coord() - *l.a.x_coord();
  if run == F::zero() {
    F::infinity()
  } else {
    (*l.b.y_coord() - *l.a.y_coord()) / run
  }
}

fn slopes_equal<F: Float>(s1: F, s2: F, epsilon: F) -> bool {
  if s1.is_infinite() || s2.is_infinite() {
    s1.is_infinite() && s2.is_infinite()
  } else {
    (s1 - s2).abs() <= epsilon
  }
}

fn within_bounds<F: Float>(l: &LineSegment<F>, x: F, y: F) -> bool {
  let (ax, ay) = (*l.a.x_coord(), *l.a.y_coord());
  let (bx, by) = (*l.b.x_coord(), *l.b.y_coord());
  ax.min(bx) <= x && x <= ax.max(bx) && ay.min(by) <= y && y <= ay.max(by)
}
