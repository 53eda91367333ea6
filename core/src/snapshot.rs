use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a memory-match round for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: GridSize,
    pub phase: RoundPhase,
    /// Row-major colors as the player should see them right now.
    pub shown: Vec<ColorId>,
    pub palette: Vec<ColorId>,
    pub pending: CellCount,
}

impl BoardSnapshot {
    pub fn from_round(round: &MemoryRound) -> Self {
        let board = round.board();
        let concealed = round.phase().is_concealed();
        Self {
            size: board.size(),
            phase: round.phase(),
            shown: board
                .cells()
                .map(|cell| cell.shown_color(concealed))
                .collect(),
            palette: board.palette().tiles().to_vec(),
            pending: board.pending_count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingSnapshot {
    pub slots: Vec<Option<char>>,
    pub bank: Vec<char>,
    pub answer: String,
    pub status: SpellingStatus,
}

impl SpellingSnapshot {
    pub fn from_puzzle(puzzle: &SpellingPuzzle) -> Self {
        Self {
            slots: puzzle.slots().to_vec(),
            bank: puzzle.bank().to_vec(),
            answer: puzzle.answer(),
            status: puzzle.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_snapshot_hides_targets_once_concealed() {
        let board = Board::from_targets(2, &[(1, ColorId::Amber), (2, ColorId::Teal)]).unwrap();
        let mut round = MemoryRound::new(board);
        let mut session = MatchSession::for_difficulty(Difficulty::Easy);

        let memorizing = BoardSnapshot::from_round(&round);
        assert_eq!(
            memorizing.shown,
            [ColorId::Concealed, ColorId::Amber, ColorId::Teal, ColorId::Concealed]
        );
        assert!(memorizing.palette.is_empty());

        round.conceal_all(&mut ScriptedRandom::zeros()).unwrap();
        round.try_place(&mut session, 2, ColorId::Teal).unwrap();
        let solving = BoardSnapshot::from_round(&round);

        assert_eq!(solving.phase, RoundPhase::Solving);
        assert_eq!(
            solving.shown,
            [ColorId::Concealed, ColorId::Concealed, ColorId::Teal, ColorId::Concealed]
        );
        assert_eq!(solving.palette, [ColorId::Amber]);
        assert_eq!(solving.pending, 1);
    }

    #[test]
    fn spelling_snapshot_serializes() {
        let mut puzzle = SpellingPuzzle::new("SUN", &mut ScriptedRandom::zeros()).unwrap();
        puzzle.place('S');

        let snapshot = SpellingSnapshot::from_puzzle(&puzzle);
        assert_eq!(snapshot.answer, "S__");
        assert_eq!(snapshot.status, SpellingStatus::InProgress);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SpellingSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
