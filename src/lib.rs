#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::*;
use std::cmp::Ordering;
use std::ops::Neg;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three input points, or fewer than two distinct ones.
  InsufficientVertices,
  /// Three consecutive hull vertices are either colinear or oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Scalars that support the three comparison predicates every algorithm in
/// this crate is built from: turn direction, point-to-point distance, and
/// point-to-line distance.
///
/// All predicates answer with an [`Ordering`] rather than a raw number so
/// that exact implementations (fixed precision, big integers, rationals) and
/// inexact ones (floats routed through adaptive-precision arithmetic) share
/// one interface.
pub trait PlanarScalar:
  std::fmt::Debug + Neg<Output = Self> + NumOps<Self, Self> + TotalOrd + PartialOrd + Clone
{
  fn from_constant(val: i8) -> Self;
  /// Sign of the cross product `(q - p) × (r - q)`.
  /// `Greater` means the walk `p -> q -> r` turns counter-clockwise.
  fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Compares `|pq|` against `|pr|` (squared distances).
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Compares the perpendicular distances of `p` and `q` from the line
  /// through `a` and `b`, by comparing cross-product magnitudes.
  fn cmp_line_dist(a: &[Self; 2], b: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $wide:ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl PlanarScalar for $ty {
      fn from_constant(val: i8) -> Self {
        val as $ty
      }

      // Differences and products are evaluated in a wider type. Note: for
      // i64, coordinates beyond ±2^62 can still overflow the widened
      // products.
      fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        let lhs = (q[0] as $wide - p[0] as $wide) * (r[1] as $wide - q[1] as $wide);
        let rhs = (q[1] as $wide - p[1] as $wide) * (r[0] as $wide - q[0] as $wide);
        lhs.cmp(&rhs)
      }

      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        let sq = |a: &[Self; 2], b: &[Self; 2]| {
          let dx = a[0] as $wide - b[0] as $wide;
          let dy = a[1] as $wide - b[1] as $wide;
          dx * dx + dy * dy
        };
        sq(p, q).cmp(&sq(p, r))
      }

      fn cmp_line_dist(a: &[Self; 2], b: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
        let cross = |r: &[Self; 2]| {
          let v = (b[0] as $wide - a[0] as $wide) * (r[1] as $wide - a[1] as $wide)
            - (b[1] as $wide - a[1] as $wide) * (r[0] as $wide - a[0] as $wide);
          v.abs()
        };
        cross(p).cmp(&cross(q))
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PlanarScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_i8(val).unwrap()
        }

        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let lhs = (&q[0] - &p[0]) * (&r[1] - &q[1]);
          let rhs = (&q[1] - &p[1]) * (&r[0] - &q[0]);
          lhs.cmp(&rhs)
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq_dist_squared: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr_dist_squared: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq_dist_squared.cmp(&pr_dist_squared)
        }

        fn cmp_line_dist(a: &[Self; 2], b: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          let cross = |r: &[Self; 2]| {
            let v = (&b[0] - &a[0]) * (&r[1] - &a[1]) - (&b[1] - &a[1]) * (&r[0] - &a[0]);
            v.abs()
          };
          cross(p).cmp(&cross(q))
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PlanarScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_i8(val).unwrap()
        }

        // Adaptive-precision arithmetic from `geometry_predicates` gives the
        // exact sign of the turn even when plain float evaluation would round
        // to zero.
        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p[0] as f64, p[1] as f64],
            [q[0] as f64, q[1] as f64],
            [r[0] as f64, r[1] as f64],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PlanarScalar::cmp_dist(
            &[float_to_rational(p[0]), float_to_rational(p[1])],
            &[float_to_rational(q[0]), float_to_rational(q[1])],
            &[float_to_rational(r[0]), float_to_rational(r[1])],
          )
        }

        fn cmp_line_dist(a: &[Self; 2], b: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          PlanarScalar::cmp_line_dist(
            &[float_to_rational(a[0]), float_to_rational(a[1])],
            &[float_to_rational(b[0]), float_to_rational(b[1])],
            &[float_to_rational(p[0]), float_to_rational(p[1])],
            &[float_to_rational(q[0]), float_to_rational(q[1])],
          )
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PlanarScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from_i8(val).unwrap()
        }

        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PlanarScalar::cmp_turn(
            &[p[0].into_inner(), p[1].into_inner()],
            &[q[0].into_inner(), q[1].into_inner()],
            &[r[0].into_inner(), r[1].into_inner()],
          )
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PlanarScalar::cmp_dist(
            &[p[0].into_inner(), p[1].into_inner()],
            &[q[0].into_inner(), q[1].into_inner()],
            &[r[0].into_inner(), r[1].into_inner()],
          )
        }

        fn cmp_line_dist(a: &[Self; 2], b: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          PlanarScalar::cmp_line_dist(
            &[a[0].into_inner(), a[1].into_inner()],
            &[b[0].into_inner(), b[1].into_inner()],
            &[p[0].into_inner(), p[1].into_inner()],
            &[q[0].into_inner(), q[1].into_inner()],
          )
        }
      }
    )*
  };
}

fixed_precision!(i8, i32);
fixed_precision!(i16, i64);
fixed_precision!(i32, i128);
fixed_precision!(i64, i128);
fixed_precision!(isize, i128);
arbitrary_precision!(num_bigint::BigInt);
arbitrary_precision!(num_rational::BigRational);
floating_precision!(f32);
floating_precision!(f64);
wrapped_floating_precision!(ordered_float::OrderedFloat<f32>);
wrapped_floating_precision!(ordered_float::OrderedFloat<f64>);
wrapped_floating_precision!(ordered_float::NotNan<f32>);
wrapped_floating_precision!(ordered_float::NotNan<f64>);

fn float_to_rational(f: impl num::traits::float::FloatCore) -> num::BigRational {
  num::BigRational::from_float(f).expect("cannot convert NaN or infinite to exact precision number")
}

#[cfg(test)]
pub mod testing;
