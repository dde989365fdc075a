//! Cut state machine
//!
//! Decides, per pointer sample and per poll tick, whether a chord is starting,
//! growing, finishing or being invalidated by a ball.

pub mod state;
pub mod tick;

pub use state::{Chord, CutSession, CutState};
pub use tick::{CutInput, CutStep, step};
