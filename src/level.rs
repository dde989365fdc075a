//! Level ids and level data
//!
//! A level is an outline (vertices plus per-edge rigidity) and the initial
//! ball placements. Levels are grouped: index 1..=levels_per_group within
//! group 1..=level_groups.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::geom::{BallSnapshot, Polygon};

/// Position in the campaign (both parts 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LevelId {
    pub group: u32,
    pub index: u32,
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.group, self.index)
    }
}

impl Default for LevelId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl LevelId {
    pub const FIRST: LevelId = LevelId { group: 1, index: 1 };

    pub fn new(group: u32, index: u32) -> Self {
        Self { group, index }
    }

    /// Following level; the index wraps into the next group.
    /// `None` after the last level of the last group.
    pub fn next(self, levels_per_group: u32, level_groups: u32) -> Option<Self> {
        if self.index >= levels_per_group {
            if self.group >= level_groups {
                return None;
            }
            Some(Self::new(self.group + 1, 1))
        } else {
            Some(Self::new(self.group, self.index + 1))
        }
    }

    /// Preceding level; `None` before the first one
    pub fn prev(self, levels_per_group: u32) -> Option<Self> {
        if self.index <= 1 {
            if self.group <= 1 {
                return None;
            }
            Some(Self::new(self.group - 1, levels_per_group))
        } else {
            Some(Self::new(self.group, self.index - 1))
        }
    }
}

fn default_density() -> f64 {
    1.0
}

fn default_restitution() -> f64 {
    1.0
}

/// Initial placement of one ball (physical params are passed through to the
/// obstacle collaborator untouched)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    pub pos: DVec2,
    pub radius: f64,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub friction: f64,
    #[serde(default = "default_restitution")]
    pub restitution: f64,
    #[serde(default)]
    pub velocity: DVec2,
}

/// Level file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Outline vertices
    pub walls: Vec<DVec2>,
    /// One flag per edge (edge i = walls[i] -> walls[i+1]); empty means none rigid
    #[serde(default)]
    pub rigid: Vec<bool>,
    #[serde(default)]
    pub balls: Vec<BallSpec>,
}

impl LevelData {
    pub fn from_json(id: LevelId, json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(|source| LevelError::Parse { id, source })
    }

    /// Validate the level and build its outline polygon
    pub fn outline(&self, id: LevelId, eps: f64) -> Result<Polygon, LevelError> {
        if let Some((index, ball)) = self
            .balls
            .iter()
            .enumerate()
            .find(|(_, b)| !(b.radius.is_finite() && b.radius >= 0.0) || !b.pos.is_finite())
        {
            return Err(LevelError::BadBall {
                id,
                index,
                radius: ball.radius,
            });
        }
        let rigid = if self.rigid.is_empty() {
            vec![false; self.walls.len()]
        } else {
            self.rigid.clone()
        };
        Polygon::new(self.walls.clone(), rigid, eps)
            .map_err(|source| LevelError::Outline { id, source })
    }

    /// Balls at their initial placement, ids by position in the file
    pub fn ball_snapshots(&self) -> Vec<BallSnapshot> {
        self.balls
            .iter()
            .enumerate()
            .map(|(i, b)| BallSnapshot {
                id: i as u32,
                pos: b.pos,
                radius: b.radius,
            })
            .collect()
    }
}

/// Supplies level data by id
pub trait LevelSource {
    fn load(&self, id: LevelId) -> Result<LevelData, LevelError>;
}

/// Levels stored as `level_<group>_<index>.json` in a directory
#[derive(Debug, Clone)]
pub struct LevelDir {
    root: PathBuf,
}

impl LevelDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, id: LevelId) -> PathBuf {
        self.root
            .join(format!("level_{}_{}.json", id.group, id.index))
    }
}

impl LevelSource for LevelDir {
    fn load(&self, id: LevelId) -> Result<LevelData, LevelError> {
        let path = self.path_for(id);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LevelError::NotFound(id));
            }
            Err(source) => return Err(LevelError::Io { path, source }),
        };
        log::debug!("Loaded level {} from {}", id, path.display());
        LevelData::from_json(id, &json)
    }
}

/// In-memory level set
#[derive(Debug, Clone, Default)]
pub struct MemoryLevels {
    levels: HashMap<LevelId, LevelData>,
}

impl MemoryLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: LevelId, data: LevelData) {
        self.levels.insert(id, data);
    }

    pub fn with(mut self, id: LevelId, data: LevelData) -> Self {
        self.insert(id, data);
        self
    }
}

impl LevelSource for MemoryLevels {
    fn load(&self, id: LevelId) -> Result<LevelData, LevelError> {
        self.levels.get(&id).cloned().ok_or(LevelError::NotFound(id))
    }
}
