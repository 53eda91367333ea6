use serde::{Deserialize, Serialize};

use crate::CellIndex;

/// Memory-match colors. The last entry is reserved for concealed and non-target cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorId {
    Red,
    Pink,
    Purple,
    Indigo,
    Blue,
    Teal,
    Green,
    LightGreen,
    Amber,
    Orange,
    Brown,
    Concealed,
}

impl ColorId {
    /// Colors a target can be assigned, excludes [`ColorId::Concealed`].
    pub const PLAYABLE: [ColorId; 11] = [
        Self::Red,
        Self::Pink,
        Self::Purple,
        Self::Indigo,
        Self::Blue,
        Self::Teal,
        Self::Green,
        Self::LightGreen,
        Self::Amber,
        Self::Orange,
        Self::Brown,
    ];

    pub const fn is_concealed(self) -> bool {
        matches!(self, Self::Concealed)
    }

    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#F44336",
            Self::Pink => "#E91E63",
            Self::Purple => "#9C27B0",
            Self::Indigo => "#3F51B5",
            Self::Blue => "#2196F3",
            Self::Teal => "#009688",
            Self::Green => "#4CAF50",
            Self::LightGreen => "#8BC34A",
            Self::Amber => "#FFC107",
            Self::Orange => "#FF9800",
            Self::Brown => "#795548",
            Self::Concealed => "#9E9E9E",
        }
    }
}

impl Default for ColorId {
    fn default() -> Self {
        Self::Concealed
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    index: CellIndex,
    is_target: bool,
    color: ColorId,
    revealed: bool,
}

impl Cell {
    pub const fn target(index: CellIndex, color: ColorId) -> Self {
        Self {
            index,
            is_target: true,
            color,
            revealed: false,
        }
    }

    pub const fn blank(index: CellIndex) -> Self {
        Self {
            index,
            is_target: false,
            color: ColorId::Concealed,
            revealed: false,
        }
    }

    pub const fn index(&self) -> CellIndex {
        self.index
    }

    pub const fn is_target(&self) -> bool {
        self.is_target
    }

    pub const fn color(&self) -> ColorId {
        self.color
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_pending(&self) -> bool {
        self.is_target && !self.revealed
    }

    /// Color the player sees, given whether unrevealed targets are currently hidden.
    pub const fn shown_color(&self, concealed: bool) -> ColorId {
        if !self.is_target || (concealed && !self.revealed) {
            ColorId::Concealed
        } else {
            self.color
        }
    }

    pub(crate) fn reveal(&mut self) {
        if self.is_target {
            self.revealed = true;
        }
    }
}
