mod boundary_offset;
mod curvature;

pub use boundary_offset::{BoundaryOffset, OffsetMode};
pub use curvature::estimate_curvature;
