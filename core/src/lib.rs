#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use math::*;
pub use random::*;
pub use reading::*;
pub use round::*;
pub use scoring::*;
pub use snapshot::*;
pub use spelling::*;
pub use types::*;
pub use words::*;

mod board;
mod cell;
mod error;
mod generator;
mod math;
mod random;
mod reading;
mod round;
mod scoring;
mod snapshot;
mod spelling;
mod types;
mod words;

/// Parent-selected difficulty shared by every mini-game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lenient match used for values coming out of the settings store, anything unrecognized is `Easy`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if contains_ignore_case(label, "medium") {
            Self::Medium
        } else if contains_ignore_case(label, "hard") {
            Self::Hard
        } else {
            if !label.is_empty() && !label.eq_ignore_ascii_case("easy") {
                log::warn!("Unknown difficulty {:?}, fallback to easy", label);
            }
            Self::Easy
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Starting grid for memory-match.
    pub const fn grid_config(self) -> GridConfig {
        match self {
            Self::Easy => GridConfig::new_unchecked(3, 3),
            Self::Medium => GridConfig::new_unchecked(4, 5),
            Self::Hard => GridConfig::new_unchecked(5, 6),
        }
    }

    /// Letters per word in the spelling and reading pools.
    pub const fn word_length(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 5,
        }
    }

    pub const fn tier_index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    size: GridSize,
    target_count: CellCount,
}

impl GridConfig {
    pub(crate) const fn new_unchecked(size: GridSize, target_count: CellCount) -> Self {
        Self { size, target_count }
    }

    pub fn new(size: GridSize, target_count: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::ZeroGridSize);
        }
        let max = mult(size, size);
        let clamped = target_count.clamp(1, max);
        if clamped != target_count {
            log::warn!(
                "Target count clamped, requested {} but grid fits 1..={}",
                target_count,
                max
            );
        }
        Ok(Self::new_unchecked(size, clamped))
    }

    pub const fn size(&self) -> GridSize {
        self.size
    }

    pub const fn target_count(&self) -> CellCount {
        self.target_count
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn with_target_count(self, target_count: CellCount) -> Self {
        Self::new_unchecked(self.size, target_count.clamp(1, self.total_cells()))
    }

    pub fn with_size(self, size: GridSize) -> Result<Self> {
        Self::new(size, self.target_count)
    }
}

/// Outcome of dropping a palette tile on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    Accepted,
    Solved,
    LevelUp,
    WrongCell,
    AlreadyFilled,
    Mismatch,
}

impl PlaceOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Accepted | Self::Solved | Self::LevelUp)
    }

    pub const fn is_round_end(self) -> bool {
        matches!(self, Self::Solved | Self::LevelUp)
    }

    pub const fn illegal_move(self) -> Option<IllegalMove> {
        match self {
            Self::Accepted | Self::Solved | Self::LevelUp => None,
            Self::WrongCell => Some(IllegalMove::WrongCell),
            Self::AlreadyFilled => Some(IllegalMove::AlreadyFilled),
            Self::Mismatch => Some(IllegalMove::Mismatch),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeoutOutcome {
    NoChange,
    TimedOut,
}

impl TimeoutOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::TimedOut)
    }
}
