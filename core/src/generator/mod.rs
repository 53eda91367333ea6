use crate::*;
pub use uniform::*;

mod uniform;

pub trait BoardGenerator {
    fn generate(&self, config: GridConfig, rng: &mut dyn RandomSource) -> Board;
}

/// Validates the raw grid parameters and generates with the [`UniformBoardGenerator`].
pub fn generate_board(
    size: GridSize,
    target_count: CellCount,
    rng: &mut dyn RandomSource,
) -> Result<Board> {
    let config = GridConfig::new(size, target_count)?;
    Ok(UniformBoardGenerator.generate(config, rng))
}
