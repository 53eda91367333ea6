use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be at least 1")]
    ZeroGridSize,
    #[error("Word must contain only letters A-Z")]
    InvalidWord,
    #[error("Concealed color cannot be assigned to a target")]
    ConcealedTarget,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid slot")]
    InvalidSlot,
    #[error("Move not accepted in the current phase")]
    WrongPhase,
    #[error("No words configured for this difficulty")]
    EmptyWordPool,
}

impl GameError {
    /// Configuration errors are fatal to the round being built, the caller has to reconfigure.
    pub const fn is_invalid_configuration(self) -> bool {
        matches!(
            self,
            Self::ZeroGridSize | Self::InvalidWord | Self::ConcealedTarget | Self::EmptyWordPool
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Recoverable player mistakes, reported back as feedback and never applied to the state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMove {
    WrongCell,
    AlreadyFilled,
    Mismatch,
    NoEmptySlot,
    LetterNotInBank,
    SlotEmpty,
    NothingToRemove,
    NothingToReveal,
}
