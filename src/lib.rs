//! Procedural racetrack generation.
//!
//! [`TrackBuilder`] samples a skeleton, orders it into a loop, relaxes and
//! smooths it, then offsets it into inner and outer road boundaries. Attempts
//! whose boundaries self-intersect are discarded and regenerated.

pub mod error;
pub mod math;
pub mod operations;
pub mod track;

pub use error::{Result, TrackgenError};
pub use math::{Point2, Rect, Vector2};
pub use operations::offset::OffsetMode;
pub use operations::relax::RelaxParams;
pub use track::{build_track, Track, TrackBuilder, TrackParams, TrackStages};
