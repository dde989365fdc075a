//! Polygon geometry for the cut engine
//!
//! Pure and deterministic:
//! - No rendering or platform dependencies
//! - All coordinates in the polygon's local (already scale-normalized) space
//! - Ambiguous input resolves to "no change", never to a guessed split

pub mod engine;
pub mod polygon;
pub mod segment;

pub use engine::{
    BallSnapshot, Crossing, GeometryEngine, RegionKind, SplitOutcome, SplitResult,
    ball_obstruction_test,
};
pub use polygon::{EdgePoint, Polygon, Wall};
pub use segment::{Segment, SegmentHit};
