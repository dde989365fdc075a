//! Progress/level controller
//!
//! One `Game` per session. It owns the active level's geometry and cut state,
//! turns cut outcomes into host-facing events, and runs the level-complete
//! and blocked-reload timers off the host's fixed-rate `tick`.

use glam::DVec2;
use serde::Serialize;

use crate::cut::{self, Chord, CutInput, CutSession, CutStep};
use crate::error::GameError;
use crate::feedback::Cue;
use crate::geom::{BallSnapshot, GeometryEngine, SplitResult, Wall};
use crate::level::{BallSpec, LevelData, LevelId, LevelSource};
use crate::settings::{RecordStore, SaveRecord};
use crate::tuning::Tuning;

/// Pointer input, already in level space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(DVec2),
    Move(DVec2),
    Up,
}

impl From<PointerEvent> for CutInput {
    fn from(event: PointerEvent) -> Self {
        match event {
            PointerEvent::Down(p) => CutInput::PointerDown(p),
            PointerEvent::Move(p) => CutInput::PointerMove(p),
            PointerEvent::Up => CutInput::PointerUp,
        }
    }
}

/// Things the host should react to, in emission order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// A level was (re)loaded; replace walls and respawn balls
    LevelLoaded {
        id: LevelId,
        walls: Vec<Wall>,
        balls: Vec<BallSpec>,
    },
    /// The outline changed after a slice
    WallsChanged(Vec<Wall>),
    /// Draw the chord
    ChordChanged(Chord),
    /// Stop drawing the chord
    ChordCleared,
    /// Flash a refused chord
    ChordFlash(Chord),
    /// Show a spark at a protected edge
    Spark { at: DVec2 },
    /// Outline of the piece that was cut away
    PieceRemoved(Vec<DVec2>),
    ProgressChanged(f64),
    /// Stop all balls where they are
    FreezeBalls,
    Cue(Cue),
    /// Level solved; `next` is `None` after the last level
    LevelComplete { id: LevelId, next: Option<LevelId> },
}

/// A level load waiting on a timer
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    level: LevelId,
    remaining_ms: u32,
}

/// Session controller
pub struct Game<L, S> {
    levels: L,
    store: S,
    tuning: Tuning,
    record: SaveRecord,
    level: LevelId,
    data: LevelData,
    engine: GeometryEngine,
    session: CutSession,
    solved: bool,
    pending: Option<Pending>,
    events: Vec<GameEvent>,
}

impl<L: LevelSource, S: RecordStore> Game<L, S> {
    /// Load the save record and start at the highest reached level
    pub fn new(levels: L, store: S, tuning: Tuning) -> Result<Self, GameError> {
        let record = store.load()?;
        let level = record.highest();
        let data = levels.load(level)?;
        let polygon = data.outline(level, tuning.epsilon)?;
        let engine = GeometryEngine::new(polygon, tuning.epsilon);

        let mut game = Self {
            levels,
            store,
            tuning,
            record,
            level,
            data,
            engine,
            session: CutSession::new(),
            solved: false,
            pending: None,
            events: Vec::new(),
        };
        game.emit_loaded();
        log::info!("Started at level {}", level);
        Ok(game)
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    pub fn level_data(&self) -> &LevelData {
        &self.data
    }

    pub fn engine(&self) -> &GeometryEngine {
        &self.engine
    }

    pub fn session(&self) -> &CutSession {
        &self.session
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn progress(&self) -> f64 {
        self.engine.progress()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Waiting on a level load (solved or blocked)
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Take everything emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feed one pointer sample
    pub fn pointer(&mut self, event: PointerEvent, balls: &[BallSnapshot]) {
        if self.solved || self.pending.is_some() {
            return;
        }
        let step = cut::step(&mut self.session, &mut self.engine, event.into(), balls);
        self.apply(step);
    }

    /// Fixed-rate tick: runs the obstruction poll and any pending level load
    pub fn tick(&mut self, dt_ms: u32, balls: &[BallSnapshot]) -> Result<(), GameError> {
        if let Some(pending) = self.pending.as_mut() {
            pending.remaining_ms = pending.remaining_ms.saturating_sub(dt_ms);
            if pending.remaining_ms > 0 {
                return Ok(());
            }
            let level = pending.level;
            self.pending = None;
            return self.load_level(level);
        }
        if self.solved {
            return Ok(());
        }
        let step = cut::step(&mut self.session, &mut self.engine, CutInput::Poll, balls);
        self.apply(step);
        Ok(())
    }

    /// Jump to an unlocked level
    pub fn select_level(&mut self, level: LevelId) -> Result<(), GameError> {
        if !self.record.is_unlocked(level) {
            return Err(GameError::Locked(level));
        }
        self.pending = None;
        self.load_level(level)
    }

    /// Step back one level in the campaign; no-op on the first level
    pub fn select_previous(&mut self) -> Result<(), GameError> {
        match self.level.prev(self.tuning.levels_per_group) {
            Some(level) => self.select_level(level),
            None => Ok(()),
        }
    }

    /// Step forward one level; fails with `Locked` past the highest reached
    pub fn select_next(&mut self) -> Result<(), GameError> {
        match self
            .level
            .next(self.tuning.levels_per_group, self.tuning.level_groups)
        {
            Some(level) => self.select_level(level),
            None => Ok(()),
        }
    }

    /// Reload the current level from scratch
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.pending = None;
        self.load_level(self.level)
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.record.sound_enabled = enabled;
        self.persist();
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.record.music_enabled = enabled;
        self.persist();
    }

    fn load_level(&mut self, level: LevelId) -> Result<(), GameError> {
        let data = self.levels.load(level)?;
        let polygon = data.outline(level, self.tuning.epsilon)?;
        self.engine = GeometryEngine::new(polygon, self.tuning.epsilon);
        self.data = data;
        self.level = level;
        self.session.reset();
        self.solved = false;
        self.emit_loaded();
        log::info!("Loaded level {}", level);
        Ok(())
    }

    fn emit_loaded(&mut self) {
        self.events.push(GameEvent::LevelLoaded {
            id: self.level,
            walls: self.engine.polygon().walls(),
            balls: self.data.balls.clone(),
        });
        self.events.push(GameEvent::ProgressChanged(self.engine.progress()));
    }

    fn apply(&mut self, step: CutStep) {
        match step {
            CutStep::Nothing => {}
            CutStep::Entered(chord) | CutStep::ChordMoved(chord) => {
                self.events.push(GameEvent::ChordChanged(chord));
            }
            CutStep::EntryRejected { at } => {
                self.events.push(GameEvent::Spark { at });
                self.events.push(GameEvent::Cue(Cue::Spark));
            }
            CutStep::ExitRejected { at, exit } => {
                log::debug!("Exit through protected edge at {}", exit);
                self.events.push(GameEvent::ChordCleared);
                self.events.push(GameEvent::Spark { at });
                self.events.push(GameEvent::Cue(Cue::Spark));
            }
            CutStep::SliceRefused(chord) => {
                self.events.push(GameEvent::ChordCleared);
                self.events.push(GameEvent::ChordFlash(chord));
                self.events.push(GameEvent::Cue(Cue::SliceRefused));
            }
            CutStep::Sliced(result) => self.on_sliced(result),
            CutStep::Withdrawn | CutStep::Released => {
                self.events.push(GameEvent::ChordCleared);
            }
            CutStep::Blocked(chord) => self.on_blocked(chord),
        }
    }

    fn on_sliced(&mut self, result: SplitResult) {
        log::info!(
            "Level {} sliced: +{:.3} -> {:.3}",
            self.level,
            result.progress_delta,
            result.progress
        );
        self.events.push(GameEvent::ChordCleared);
        self.events.push(GameEvent::WallsChanged(result.kept.walls()));
        self.events
            .push(GameEvent::PieceRemoved(result.removed.vertices().to_vec()));
        self.events.push(GameEvent::ProgressChanged(result.progress));
        self.events.push(GameEvent::Cue(Cue::Slice));

        if result.progress > self.tuning.completion_threshold {
            self.complete();
        }
    }

    fn on_blocked(&mut self, chord: Chord) {
        log::info!("Level {} blocked, reloading", self.level);
        self.events.push(GameEvent::FreezeBalls);
        self.events.push(GameEvent::ChordCleared);
        self.events.push(GameEvent::ChordFlash(chord));
        self.events.push(GameEvent::Cue(Cue::Blocked));
        self.pending = Some(Pending {
            level: self.level,
            remaining_ms: self.tuning.blocked_cooldown_ms,
        });
    }

    fn complete(&mut self) {
        self.solved = true;
        let next = self
            .level
            .next(self.tuning.levels_per_group, self.tuning.level_groups);
        log::info!("Level {} complete", self.level);
        self.events.push(GameEvent::LevelComplete {
            id: self.level,
            next,
        });
        self.events.push(GameEvent::Cue(Cue::LevelComplete));

        let Some(next) = next else {
            log::info!("Last level solved");
            return;
        };
        if self.record.reach(next) {
            self.persist();
        }
        self.pending = Some(Pending {
            level: next,
            remaining_ms: self.tuning.transition_delay_ms,
        });
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.record) {
            log::warn!("Failed to save record: {}", e);
        }
    }
}
