/// Side length of a square grid.
pub type GridSize = u8;

/// Count type used for target counts and total-cell counts.
pub type CellCount = u16;

/// Row-major position of a cell in its grid.
pub type CellIndex = u16;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self, size: GridSize) -> Self::Output;
}

impl ToNdIndex for CellIndex {
    type Output = [usize; 2];

    fn to_nd_index(self, size: GridSize) -> Self::Output {
        let size = usize::from(size);
        let index = usize::from(self);
        [index / size, index % size]
    }
}

pub const fn mult(a: GridSize, b: GridSize) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
