//! Feedback cues
//!
//! The core only says which cue fired; playing it is the host's business.

use serde::Serialize;

/// Audio/visual feedback triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cue {
    /// Chord hit a protected edge (spark at the pointer)
    Spark,
    /// Polygon sliced
    Slice,
    /// Chord ran between two balls and was refused (flashing chord)
    SliceRefused,
    /// Chord touched a ball
    Blocked,
    /// Level solved
    LevelComplete,
}

impl Cue {
    /// Bundled sound asset for this cue, if it has one
    pub fn sound_asset(&self) -> Option<&'static str> {
        match self {
            Cue::Spark => Some("sound/steel.wav"),
            Cue::Slice => Some("sound/slash.wav"),
            Cue::SliceRefused => Some("sound/slash.wav"),
            Cue::Blocked => Some("sound/slash_fail.wav"),
            Cue::LevelComplete => None,
        }
    }
}
