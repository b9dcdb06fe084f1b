/// Single coordinate axis, used for rows, columns and the grid side.
pub type Coord = u8;

/// Grid coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Row-major position of a cell on the card, `0..CELL_COUNT`.
pub type CellIndex = u8;

/// Cells per row and per column.
pub const GRID_SIZE: Coord = 5;

pub const CELL_COUNT: CellIndex = GRID_SIZE * GRID_SIZE;

/// The reserved center cell.
pub const FREE_CELL_INDEX: CellIndex = CELL_COUNT / 2;

/// Number of pool items needed to fill every cell except the free one.
pub const REQUIRED_ITEMS: usize = CELL_COUNT as usize - 1;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

impl ToNdIndex for CellIndex {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        coords_of(self).to_nd_index()
    }
}

pub const fn coords_of(index: CellIndex) -> Coord2 {
    (index / GRID_SIZE, index % GRID_SIZE)
}

pub const fn index_of((row, col): Coord2) -> CellIndex {
    row * GRID_SIZE + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_cell_is_center() {
        assert_eq!(FREE_CELL_INDEX, 12);
        assert_eq!(coords_of(FREE_CELL_INDEX), (2, 2));
        assert_eq!(REQUIRED_ITEMS, 24);
    }

    #[test]
    fn index_and_coords_agree() {
        for index in 0..CELL_COUNT {
            assert_eq!(index_of(coords_of(index)), index);
        }
        assert_eq!(7u8.to_nd_index(), [1, 2]);
    }
}
