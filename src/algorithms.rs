pub mod convex_hull;
pub mod intersection;

#[doc(inline)]
pub use convex_hull::{convex_hull, convex_hull_with, HullAlgorithm};

#[doc(inline)]
pub use intersection::{
  ccw_intersects, intersects_with, parametric_intersects, parametric_relation, slope_intersects,
  slope_intersects_within, IntersectionAlgorithm, SegmentRelation,
};
