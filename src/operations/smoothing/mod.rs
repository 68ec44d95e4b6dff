mod smooth_corners;

pub use smooth_corners::SmoothCorners;
