//! Shape Slice - cut-resolution engine for a slice-the-shape puzzle
//!
//! Core modules:
//! - `geom`: Polygon geometry (crossing tests, splitting, area/progress)
//! - `cut`: Pointer-driven cut state machine
//! - `game`: Progress/level controller and host-facing events
//! - `level`: Level ids and level data sources
//! - `settings`: Persisted save record (highest level, audio toggles)
//! - `tuning`: Data-driven timing and thresholds

pub mod cut;
pub mod error;
pub mod feedback;
pub mod game;
pub mod geom;
pub mod level;
pub mod settings;
pub mod tuning;

pub use error::{GameError, GeometryError, LevelError, StoreError};
pub use feedback::Cue;
pub use game::{Game, GameEvent, PointerEvent};
pub use level::{LevelData, LevelId, LevelSource};
pub use settings::{RecordStore, SaveRecord};
pub use tuning::Tuning;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Reference design resolution levels are authored in
    pub const REF_WIDTH: f64 = 480.0;
    pub const REF_HEIGHT: f64 = 600.0;

    /// Obstruction poll interval (ms)
    pub const POLL_INTERVAL_MS: u32 = 50;
    /// Freeze time after a chord touches a ball, before the level reloads (ms)
    pub const BLOCKED_COOLDOWN_MS: u32 = 3000;
    /// Delay between solving a level and loading the next one (ms)
    pub const TRANSITION_DELAY_MS: u32 = 2000;

    /// Progress above which a level counts as solved
    pub const COMPLETION_THRESHOLD: f64 = 0.8;

    /// Levels per group; the index wraps to 1 and the group advances after this
    pub const LEVELS_PER_GROUP: u32 = 9;
    /// Number of level groups in the campaign
    pub const LEVEL_GROUPS: u32 = 6;

    /// Base tolerance for on-boundary decisions (scaled by polygon extent)
    pub const EPSILON: f64 = 1e-9;
}

/// 2D cross product (z component of a × b)
#[inline]
pub fn cross(a: DVec2, b: DVec2) -> f64 {
    a.perp_dot(b)
}
