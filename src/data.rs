mod hull;
mod line_segment;
mod point;

pub use hull::{ConvexHull, PointLocation};
pub use line_segment::LineSegment;
pub use point::Point;

pub(crate) use hull::lowest_leftmost;
pub(crate) use line_segment::coord_between;
