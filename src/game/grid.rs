use super::direction::Direction;
use crate::consts;

/// A block-aligned point on the board, measured in the same units as the
/// board's width & height.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell `block` units away from `self` in `direction`
    pub(crate) fn step(self, direction: Direction, block: i32) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx * block,
            y: self.y + dy * block,
        }
    }
}

/// The playing field: `[0, width) × [top, height)`, divided into square
/// blocks of side `block`.  The band `[0, top)` is reserved for the score
/// bar and is never part of play.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) top: i32,
    pub(crate) block: i32,
}

impl Grid {
    pub(crate) fn in_bounds(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (self.top..self.height).contains(&cell.y)
    }

    /// Number of block columns
    pub(crate) fn columns(self) -> i32 {
        self.width / self.block
    }

    /// Index of the first block row below the reserved top band
    pub(crate) fn first_row(self) -> i32 {
        (self.top + self.block - 1) / self.block
    }

    /// Number of playable block rows
    pub(crate) fn rows(self) -> i32 {
        (self.height / self.block - self.first_row()).max(0)
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::try_from(self.columns().max(0) * self.rows()).unwrap_or(0)
    }

    /// The cell in the middle of the whole window, snapped to the block grid
    pub(crate) fn center(self) -> Cell {
        Cell::new(
            self.width / 2 / self.block * self.block,
            self.height / 2 / self.block * self.block,
        )
    }

    /// Convert `cell` to a (column, row) pair counted from the top-left of
    /// the playable area.  Returns `None` for cells off the board.
    pub(crate) fn to_position(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.in_bounds(cell) {
            return None;
        }
        let col = u16::try_from(cell.x / self.block).ok()?;
        let row = u16::try_from(cell.y / self.block - self.first_row()).ok()?;
        Some((col, row))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            top: consts::BOARD_TOP,
            block: consts::BLOCK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(0, 80), true)]
    #[case(Cell::new(780, 580), true)]
    #[case(Cell::new(400, 300), true)]
    #[case(Cell::new(-20, 300), false)]
    #[case(Cell::new(800, 300), false)]
    #[case(Cell::new(400, 60), false)]
    #[case(Cell::new(400, 0), false)]
    #[case(Cell::new(400, 600), false)]
    fn test_in_bounds(#[case] cell: Cell, #[case] inside: bool) {
        assert_eq!(Grid::default().in_bounds(cell), inside);
    }

    #[test]
    fn default_dimensions() {
        let grid = Grid::default();
        assert_eq!(grid.columns(), 40);
        assert_eq!(grid.first_row(), 4);
        assert_eq!(grid.rows(), 26);
        assert_eq!(grid.cell_count(), 1040);
        assert_eq!(grid.center(), Cell::new(400, 300));
    }

    #[test]
    fn unaligned_top_band() {
        let grid = Grid {
            width: 100,
            height: 100,
            top: 15,
            block: 10,
        };
        assert_eq!(grid.first_row(), 2);
        assert_eq!(grid.rows(), 8);
    }

    #[rstest]
    #[case(Cell::new(0, 80), Some((0, 0)))]
    #[case(Cell::new(780, 580), Some((39, 25)))]
    #[case(Cell::new(400, 300), Some((20, 11)))]
    #[case(Cell::new(400, 60), None)]
    #[case(Cell::new(800, 80), None)]
    fn test_to_position(#[case] cell: Cell, #[case] pos: Option<(u16, u16)>) {
        assert_eq!(Grid::default().to_position(cell), pos);
    }

    #[rstest]
    #[case(Direction::Up, Cell::new(100, 80))]
    #[case(Direction::Down, Cell::new(100, 120))]
    #[case(Direction::Left, Cell::new(80, 100))]
    #[case(Direction::Right, Cell::new(120, 100))]
    fn test_step(#[case] direction: Direction, #[case] after: Cell) {
        assert_eq!(Cell::new(100, 100).step(direction, 20), after);
    }
}
