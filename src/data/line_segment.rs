use std::cmp::Ordering;

use super::Point;
use crate::{PlanarScalar, TotalOrd};

/// A closed, finite line segment. The endpoint order carries no meaning:
/// two segments compare equal regardless of direction.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment<T, const N: usize = 2> {
  pub a: Point<T, N>,
  pub b: Point<T, N>,
}

impl<T, const N: usize> LineSegment<T, N> {
  pub const fn new(a: Point<T, N>, b: Point<T, N>) -> LineSegment<T, N> {
    LineSegment { a, b }
  }
}

impl<T, const N: usize> PartialEq for LineSegment<T, N>
where
  T: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
  }
}

impl<T, const N: usize> Eq for LineSegment<T, N> where T: Eq {}

impl<T> From<((T, T), (T, T))> for LineSegment<T> {
  fn from(endpoints: ((T, T), (T, T))) -> LineSegment<T> {
    LineSegment::new(endpoints.0.into(), endpoints.1.into())
  }
}

impl<T> LineSegment<T>
where
  T: PlanarScalar,
{
  /// True iff `pt` lies on the segment, endpoints included.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    Point::orient(&self.a, &self.b, pt).is_colinear()
      && coord_between(pt.x_coord(), self.a.x_coord(), self.b.x_coord())
      && coord_between(pt.y_coord(), self.a.y_coord(), self.b.y_coord())
  }
}

// Inclusive range check along a single axis.
pub(crate) fn coord_between<T: TotalOrd>(x: &T, a: &T, b: &T) -> bool {
  let (lo, hi) = if a.total_cmp(b) == Ordering::Greater {
    (b, a)
  } else {
    (a, b)
  };
  lo.total_cmp(x) != Ordering::Greater && x.total_cmp(hi) != Ordering::Greater
}
