use super::{LineSegment, Point};
use crate::{Error, Orientation, PlanarScalar, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

/// The boundary of a convex point set: vertices in counter-clockwise order,
/// implicitly closed, starting at the bottom-most (then left-most) vertex.
///
/// A hull is normally a simple polygon with at least three vertices. When
/// every input point lies on one line the hull degenerates to the two
/// extreme points of that line; such a hull reports
/// [`is_degenerate`](ConvexHull::is_degenerate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexHull<T> {
  vertices: Vec<Point<T, 2>>,
}

impl<T: PlanarScalar> ConvexHull<T> {
  /// Wraps a CCW vertex list, rotating it to the canonical start vertex.
  /// The caller guarantees order and strict convexity.
  pub(crate) fn new_unchecked(mut vertices: Vec<Point<T, 2>>) -> ConvexHull<T> {
    if let Some(idx) = lowest_leftmost(&vertices) {
      vertices.rotate_left(idx);
    }
    ConvexHull { vertices }
  }

  pub fn vertices(&self) -> &[Point<T, 2>] {
    &self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, 2>> {
    self.vertices.iter()
  }

  pub fn into_vertices(self) -> Vec<Point<T, 2>> {
    self.vertices
  }

  /// True when the input was entirely colinear and the hull collapsed to a
  /// segment.
  pub fn is_degenerate(&self) -> bool {
    self.vertices.len() == 2
  }

  /// Checks the convexity contract: every consecutive vertex triple turns
  /// strictly counter-clockwise (degenerate hulls: two distinct points).
  pub fn validate(&self) -> Result<(), Error> {
    match self.vertices.len() {
      0 | 1 => Err(Error::InsufficientVertices),
      2 => {
        if self.vertices[0] == self.vertices[1] {
          Err(Error::ConvexViolation)
        } else {
          Ok(())
        }
      }
      n => {
        for i in 0..n {
          let p = &self.vertices[i];
          let q = &self.vertices[(i + 1) % n];
          let r = &self.vertices[(i + 2) % n];
          if !Point::orient(p, q, r).is_ccw() {
            return Err(Error::ConvexViolation);
          }
        }
        Ok(())
      }
    }
  }

  /// Locates a point relative to the hull boundary using only the
  /// orientation predicate.
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    if self.is_degenerate() {
      let seg = LineSegment::new(self.vertices[0].clone(), self.vertices[1].clone());
      return if seg.contains(pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    let n = self.vertices.len();
    let mut on_boundary = false;
    for i in 0..n {
      let a = &self.vertices[i];
      let b = &self.vertices[(i + 1) % n];
      match Point::orient(a, b, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_boundary = true,
        Orientation::CounterClockWise => {}
      }
    }
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}

// Index of the bottom-most, then left-most vertex. The shared extreme-point
// rule: min by (y, x).
pub(crate) fn lowest_leftmost<T: PlanarScalar>(pts: &[Point<T, 2>]) -> Option<usize> {
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord()))
    })
    .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::assert_ok;

  fn unit_square() -> ConvexHull<i32> {
    ConvexHull::new_unchecked(vec![
      Point::new([4, 4]),
      Point::new([0, 4]),
      Point::new([0, 0]),
      Point::new([4, 0]),
    ])
  }

  #[test]
  fn canonical_start_vertex() {
    let hull = unit_square();
    assert_eq!(hull.vertices()[0], Point::new([0, 0]));
    assert_ok!(hull.validate());
  }

  #[test]
  fn locate_square() {
    let hull = unit_square();
    assert_eq!(hull.locate(&Point::new([2, 2])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([0, 2])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([4, 4])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([5, 2])), PointLocation::Outside);
    // On the supporting line of an edge but beyond the polygon.
    assert_eq!(hull.locate(&Point::new([5, 0])), PointLocation::Outside);
  }

  #[test]
  fn validate_rejects_colinear_triple() {
    let hull = ConvexHull::new_unchecked(vec![
      Point::new([0, 0]),
      Point::new([2, 0]),
      Point::new([4, 0]),
      Point::new([2, 2]),
    ]);
    assert_eq!(hull.validate(), Err(Error::ConvexViolation));
  }

  #[test]
  fn degenerate_hull() {
    let hull = ConvexHull::new_unchecked(vec![Point::new([0, 0]), Point::new([3, 3])]);
    assert!(hull.is_degenerate());
    assert_ok!(hull.validate());
    assert_eq!(hull.locate(&Point::new([1, 1])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([1, 2])), PointLocation::Outside);
  }
}
