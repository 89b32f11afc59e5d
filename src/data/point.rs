use array_init::array_init;
use num_traits::*;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use crate::{Orientation, PlanarScalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; N]) -> Point<NotNan<T>, N>
  where
    T: Float + ordered_float::FloatCore,
  {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

// Methods on two-dimensional points.
impl<T: PlanarScalar> Point<T, 2> {
  /// Turn direction of `p -> q -> r`. See [`Orientation::new`].
  pub fn orient(p: &Point<T, 2>, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation {
    Orientation::new(&p.array, &q.array, &r.array)
  }

  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Compares the distance from `self` to `p` against the distance from
  /// `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T, 2>, q: &Point<T, 2>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  /// Compares the perpendicular distances of `p` and `q` from the line
  /// through `a` and `b`. Used by QuickHull to rank candidate far points.
  pub fn cmp_line_distance(
    a: &Point<T, 2>,
    b: &Point<T, 2>,
    p: &Point<T, 2>,
    q: &Point<T, 2>,
  ) -> Ordering {
    T::cmp_line_dist(&a.array, &b.array, &p.array, &q.array)
  }
}

impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<const N: usize> TryFrom<Point<f64, N>> for Point<NotNan<f64>, N> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64, N>) -> Result<Point<NotNan<f64>, N>, FloatIsNan> {
    Ok(Point {
      array: array_init::try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::orient(
        &Point::new([0, 0]),
        &Point::new([1, 1]),
        &Point::new([2, 2])
      ),
      CoLinear
    );
    assert_eq!(
      Point::orient(
        &Point::new_nn([0.0, 0.0]),
        &Point::new_nn([1.0, 1.0]),
        &Point::new_nn([2.0, 2.0])
      ),
      CoLinear
    );

    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 0]), &Point::new([0, 0])),
      CoLinear
    );
  }

  #[test]
  fn degenerate_colinear() {
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([2, 0]), &Point::new([1, 0])),
      CoLinear
    );
  }

  #[test]
  fn line_distance_ranking() {
    let a = Point::new([0, 0]);
    let b = Point::new([4, 0]);
    assert_eq!(
      Point::cmp_line_distance(&a, &b, &Point::new([1, 3]), &Point::new([2, 1])),
      Ordering::Greater
    );
    // Side does not matter, only magnitude.
    assert_eq!(
      Point::cmp_line_distance(&a, &b, &Point::new([1, -3]), &Point::new([2, 3])),
      Ordering::Equal
    );
  }

  #[proptest]
  fn colinear_construction_prop(
    #[strategy(any_32())] p1: Point<i32>,
    #[strategy(any_32())] p2: Point<i32>,
  ) {
    let p3 = Point::new([
      p2.array[0] + (p2.array[0] - p1.array[0]),
      p2.array[1] + (p2.array[1] - p1.array[1]),
    ]);
    prop_assert!(Point::orient(&p1, &p2, &p3).is_colinear());
  }

  #[proptest]
  fn distance_to_self_prop(
    #[strategy(any_32())] p1: Point<i32>,
    #[strategy(any_32())] p2: Point<i32>,
  ) {
    if p1 != p2 {
      prop_assert_eq!(p1.cmp_distance_to(&p1, &p2), Ordering::Less);
    }
  }
}
