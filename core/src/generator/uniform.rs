use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Draw budget per grid cell before sampling gives up on a degenerate random source.
const MAX_DRAWS_PER_CELL: usize = 64;

/// Picks distinct target cells uniformly and colors each one independently, so colors may repeat.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UniformBoardGenerator;

impl BoardGenerator for UniformBoardGenerator {
    fn generate(&self, config: GridConfig, rng: &mut dyn RandomSource) -> Board {
        let total_cells = config.total_cells();
        let target_count = config.target_count().clamp(1, total_cells);

        let mut chosen: BTreeSet<CellIndex> = BTreeSet::new();
        let max_draws = usize::from(total_cells).saturating_mul(MAX_DRAWS_PER_CELL);
        let mut draws = 0;
        while chosen.len() < usize::from(target_count) && draws < max_draws {
            // `total_cells` fits in `CellIndex`
            let index = rng.next_below(usize::from(total_cells)) as CellIndex;
            chosen.insert(index);
            draws += 1;
        }
        let missing = usize::from(target_count) - chosen.len();
        if missing > 0 {
            log::warn!(
                "Random source repeated itself for {} draws, filling {} targets from the lowest free cells",
                draws,
                missing
            );
            let free: Vec<CellIndex> = (0..total_cells)
                .filter(|index| !chosen.contains(index))
                .take(missing)
                .collect();
            chosen.extend(free);
        }

        let cells: Vec<Cell> = (0..total_cells)
            .map(|index| {
                if chosen.contains(&index) {
                    let color = ColorId::PLAYABLE[rng.next_below(ColorId::PLAYABLE.len())];
                    Cell::target(index, color)
                } else {
                    Cell::blank(index)
                }
            })
            .collect();

        let board = Board::from_cells(config.size(), cells);
        log::debug!(
            "Generated {}x{} board with {} targets",
            config.size(),
            config.size(),
            board.target_count()
        );
        board
    }
}
