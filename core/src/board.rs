use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Multiset of colors still waiting to be matched, in presentation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    tiles: Vec<ColorId>,
}

impl Palette {
    pub fn tiles(&self) -> &[ColorId] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn count_of(&self, color: ColorId) -> usize {
        self.tiles.iter().filter(|&&tile| tile == color).count()
    }

    /// Per-color tile counts, independent of presentation order.
    pub fn counts(&self) -> BTreeMap<ColorId, usize> {
        let mut counts = BTreeMap::new();
        for &tile in &self.tiles {
            *counts.entry(tile).or_insert(0) += 1;
        }
        counts
    }

    /// Removes one tile of `color`, preserving the order of the rest.
    fn take(&mut self, color: ColorId) -> bool {
        match self.tiles.iter().position(|&tile| tile == color) {
            Some(pos) => {
                self.tiles.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Square grid of cells and the palette dealt from its unrevealed targets.
///
/// Built by a generator or [`Board::from_targets`], never from data:
///
/// ```compile_fail
/// fn from_data<T: serde::de::DeserializeOwned>() {}
/// from_data::<learnly_core::Board>();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    target_count: CellCount,
    palette: Palette,
}

impl Board {
    /// Builds a board from exactly `size * size` cells in row-major order.
    pub(crate) fn from_cells(size: GridSize, cells: Vec<Cell>) -> Self {
        let side = usize::from(size);
        // bounded by `size * size`
        let target_count = cells.iter().filter(|cell| cell.is_target()).count() as CellCount;
        let cells = Array2::from_shape_fn((side, side), |(row, col)| cells[row * side + col]);
        Self {
            cells,
            target_count,
            palette: Palette::default(),
        }
    }

    /// Fixed layout with the given targets, every other cell blank.
    pub fn from_targets(size: GridSize, targets: &[(CellIndex, ColorId)]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::ZeroGridSize);
        }
        let total = mult(size, size);
        let mut cells: Vec<Cell> = (0..total).map(Cell::blank).collect();
        for &(index, color) in targets {
            if index >= total {
                return Err(GameError::InvalidCoords);
            }
            if color.is_concealed() {
                return Err(GameError::ConcealedTarget);
            }
            cells[usize::from(index)] = Cell::target(index, color);
        }
        Ok(Self::from_cells(size, cells))
    }

    pub fn size(&self) -> GridSize {
        // square by construction, and built from a `GridSize`
        self.cells.nrows() as GridSize
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn target_count(&self) -> CellCount {
        self.target_count
    }

    pub fn game_config(&self) -> GridConfig {
        GridConfig::new_unchecked(self.size(), self.target_count)
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.total_cells() {
            Ok(index)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, index: CellIndex) -> Result<&Cell> {
        let index = self.validate_index(index)?;
        Ok(&self.cells[index.to_nd_index(self.size())])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn targets(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells().filter(|cell| cell.is_target())
    }

    pub fn pending_count(&self) -> CellCount {
        // bounded by `target_count`
        self.cells().filter(|cell| cell.is_pending()).count() as CellCount
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_solved(&self) -> bool {
        self.cells().all(|cell| !cell.is_pending())
    }

    /// Rebuilds the palette from every unrevealed target, shuffled for presentation.
    pub(crate) fn rebuild_palette<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut tiles: Vec<ColorId> = self
            .cells()
            .filter(|cell| cell.is_pending())
            .map(|cell| cell.color())
            .collect();
        shuffle(&mut tiles, rng);
        self.palette = Palette { tiles };
    }

    /// Matches `color` against the cell, revealing it on success. Does not touch round state.
    pub(crate) fn reveal(&mut self, index: CellIndex, color: ColorId) -> Result<PlaceOutcome> {
        use PlaceOutcome::*;

        let index = self.validate_index(index)?;
        let nd_index = index.to_nd_index(self.size());
        let cell = &mut self.cells[nd_index];

        Ok(if !cell.is_target() {
            WrongCell
        } else if cell.is_revealed() {
            AlreadyFilled
        } else if cell.color() != color {
            Mismatch
        } else {
            cell.reveal();
            if !self.palette.take(color) {
                log::warn!("Palette had no {:?} tile left for cell {}", color, index);
            }
            Accepted
        })
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index.to_nd_index(self.size())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_targets(3, &[(0, ColorId::Red), (4, ColorId::Blue), (8, ColorId::Red)]).unwrap()
    }

    #[test]
    fn from_targets_builds_row_major_board() {
        let board = board();

        assert_eq!(board.size(), 3);
        assert_eq!(board.target_count(), 3);
        assert_eq!(board[4].color(), ColorId::Blue);
        assert_eq!(board[4].index(), 4);
        assert!(!board[1].is_target());
        assert_eq!(board[1].color(), ColorId::Concealed);
    }

    #[test]
    fn from_targets_rejects_bad_input() {
        assert_eq!(
            Board::from_targets(2, &[(4, ColorId::Red)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::from_targets(2, &[(1, ColorId::Concealed)]),
            Err(GameError::ConcealedTarget)
        );
        assert_eq!(Board::from_targets(0, &[]), Err(GameError::ZeroGridSize));
    }

    #[test]
    fn reveal_checks_cell_then_color() {
        let mut board = board();
        board.rebuild_palette(&mut ScriptedRandom::zeros());

        assert_eq!(board.reveal(1, ColorId::Red).unwrap(), PlaceOutcome::WrongCell);
        assert_eq!(board.reveal(4, ColorId::Red).unwrap(), PlaceOutcome::Mismatch);
        assert_eq!(board.palette().len(), 3);

        assert_eq!(board.reveal(0, ColorId::Red).unwrap(), PlaceOutcome::Accepted);
        assert_eq!(board.palette().count_of(ColorId::Red), 1);
        assert_eq!(board.reveal(0, ColorId::Red).unwrap(), PlaceOutcome::AlreadyFilled);
        assert_eq!(board.reveal(9, ColorId::Red), Err(GameError::InvalidCoords));
    }

    #[test]
    fn palette_tracks_pending_targets() {
        let mut board = board();
        board.rebuild_palette(&mut SeededRandom::new(3));

        assert_eq!(board.palette().counts().get(&ColorId::Red), Some(&2));
        assert_eq!(board.palette().counts().get(&ColorId::Blue), Some(&1));

        board.reveal(4, ColorId::Blue).unwrap();
        board.rebuild_palette(&mut SeededRandom::new(3));

        assert_eq!(board.palette().tiles(), &[ColorId::Red, ColorId::Red]);
        assert_eq!(board.pending_count(), 2);
        assert!(!board.is_solved());
    }
}
