//! Cut session state
//!
//! The chord only exists inside `Drawing`, so leaving that state by any path
//! drops it.

use glam::DVec2;
use serde::Serialize;

/// The in-progress cut: fixed anchor on the boundary, live end at the pointer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chord {
    pub anchor: DVec2,
    pub live: DVec2,
}

/// Where the current gesture stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutState {
    /// No pointer interaction
    Idle,
    /// Pointer is down but hasn't validly entered the polygon.
    /// `last` is the previous pointer sample, tested against the next one.
    AwaitingEntry { last: DVec2 },
    /// Chord anchored on the boundary, live end tracking the pointer
    Drawing { chord: Chord },
    /// A chord touched a ball; input is ignored until the level reloads
    Blocked,
}

/// Per-level cut session
#[derive(Debug, Clone)]
pub struct CutSession {
    state: CutState,
}

impl Default for CutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CutSession {
    pub fn new() -> Self {
        Self {
            state: CutState::Idle,
        }
    }

    pub fn state(&self) -> CutState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CutState) {
        self.state = state;
    }

    /// The live chord, if drawing
    pub fn chord(&self) -> Option<Chord> {
        match self.state {
            CutState::Drawing { chord } => Some(chord),
            _ => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.state == CutState::Blocked
    }

    /// Back to idle (level load/teardown)
    pub fn reset(&mut self) {
        self.state = CutState::Idle;
    }
}
