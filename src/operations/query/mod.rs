mod self_intersect;

pub use self_intersect::IsSelfIntersecting;
