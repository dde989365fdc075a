//! Cut state transitions
//!
//! One function takes both input channels (pointer samples and obstruction
//! poll ticks). It re-reads the session every call, so any interleaving of
//! the two channels gives the same result.

use glam::DVec2;

use super::state::{Chord, CutSession, CutState};
use crate::geom::{BallSnapshot, Crossing, GeometryEngine, SplitOutcome, SplitResult};

/// Input to the cut state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutInput {
    PointerDown(DVec2),
    PointerMove(DVec2),
    PointerUp,
    /// Fixed-rate obstruction poll
    Poll,
}

/// What a transition produced
#[derive(Debug, Clone, PartialEq)]
pub enum CutStep {
    /// No visible change
    Nothing,
    /// Chord created at the boundary
    Entered(Chord),
    /// Live end moved
    ChordMoved(Chord),
    /// Entry through a rigid edge; the gesture is cancelled
    EntryRejected { at: DVec2 },
    /// Exit through a rigid edge; the chord restarts from `at`
    ExitRejected { at: DVec2, exit: DVec2 },
    /// Both halves hold balls; the chord restarts from its live end
    SliceRefused(Chord),
    /// The polygon was split; a new chord may start from the live end
    Sliced(SplitResult),
    /// Pointer went back out the way it came; chord dropped
    Withdrawn,
    /// Pointer released; any chord dropped
    Released,
    /// Chord touched a ball
    Blocked(Chord),
}

/// Advance the cut session by one input
pub fn step(
    session: &mut CutSession,
    engine: &mut GeometryEngine,
    input: CutInput,
    balls: &[BallSnapshot],
) -> CutStep {
    if session.is_blocked() {
        return CutStep::Nothing;
    }

    match (session.state(), input) {
        (previous, CutInput::PointerDown(p)) => {
            session.set_state(CutState::AwaitingEntry { last: p });
            match previous {
                CutState::Drawing { .. } => CutStep::Released,
                _ => CutStep::Nothing,
            }
        }

        (CutState::Idle, _) => CutStep::Nothing,

        (CutState::AwaitingEntry { .. }, CutInput::PointerUp) => {
            session.reset();
            CutStep::Nothing
        }
        (CutState::Drawing { .. }, CutInput::PointerUp) => {
            session.reset();
            CutStep::Released
        }

        (CutState::AwaitingEntry { .. }, CutInput::Poll) => CutStep::Nothing,
        (CutState::AwaitingEntry { last }, CutInput::PointerMove(p)) => {
            try_enter(session, engine, last, p, balls)
        }

        (CutState::Drawing { chord }, CutInput::Poll) => {
            if engine.ball_obstruction_test(chord.anchor, chord.live, balls) {
                log::debug!("chord {} -> {} touched a ball", chord.anchor, chord.live);
                session.set_state(CutState::Blocked);
                CutStep::Blocked(chord)
            } else {
                CutStep::Nothing
            }
        }
        (CutState::Drawing { chord }, CutInput::PointerMove(p)) => {
            let chord = Chord { live: p, ..chord };
            session.set_state(CutState::Drawing { chord });
            resolve(session, engine, chord, balls)
        }

        (CutState::Blocked, _) => CutStep::Nothing,
    }
}

fn try_enter(
    session: &mut CutSession,
    engine: &mut GeometryEngine,
    last: DVec2,
    p: DVec2,
    balls: &[BallSnapshot],
) -> CutStep {
    match engine.crossing_test(last, p) {
        Crossing::None => {
            session.set_state(CutState::AwaitingEntry { last: p });
            CutStep::Nothing
        }
        Crossing::HitsRigidEdge => {
            session.reset();
            CutStep::EntryRejected { at: p }
        }
        Crossing::EntersPolygon => {
            let Some(anchor) = engine.line_start() else {
                session.set_state(CutState::AwaitingEntry { last: p });
                return CutStep::Nothing;
            };
            let chord = Chord { anchor, live: p };
            session.set_state(CutState::Drawing { chord });
            // A fast swipe may already be all the way through
            match resolve(session, engine, chord, balls) {
                CutStep::ChordMoved(chord) => CutStep::Entered(chord),
                other => other,
            }
        }
    }
}

/// Evaluate the chord after its live end moved
fn resolve(
    session: &mut CutSession,
    engine: &mut GeometryEngine,
    chord: Chord,
    balls: &[BallSnapshot],
) -> CutStep {
    match engine.split(chord.anchor, chord.live, balls) {
        SplitOutcome::Open => CutStep::ChordMoved(chord),
        SplitOutcome::Withdrawn => {
            session.set_state(CutState::AwaitingEntry { last: chord.live });
            CutStep::Withdrawn
        }
        SplitOutcome::BlockedByBall => {
            session.set_state(CutState::Blocked);
            CutStep::Blocked(chord)
        }
        SplitOutcome::ExitsThroughRigidEdge { exit } => {
            session.set_state(CutState::AwaitingEntry { last: chord.live });
            CutStep::ExitRejected {
                at: chord.live,
                exit,
            }
        }
        SplitOutcome::BothSidesOccupied { .. } => {
            session.set_state(CutState::AwaitingEntry { last: chord.live });
            CutStep::SliceRefused(chord)
        }
        SplitOutcome::Completed(result) => {
            session.set_state(CutState::AwaitingEntry { last: chord.live });
            CutStep::Sliced(result)
        }
    }
}
