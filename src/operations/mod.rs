pub mod offset;
pub mod query;
pub mod relax;
pub mod sampling;
pub mod smoothing;
pub mod tour;
