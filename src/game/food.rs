use super::grid::{Cell, Grid};
use rand::Rng;
use std::collections::HashSet;

/// Pick a uniformly random block of `grid` that is not in `occupied`.
///
/// This keeps sampling until it finds a free block, so it never returns if
/// every block of the grid is occupied.
pub(crate) fn spawn<R: Rng>(rng: &mut R, grid: Grid, occupied: &HashSet<Cell>) -> Cell {
    loop {
        let cell = random_cell(rng, grid);
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}

fn random_cell<R: Rng>(rng: &mut R, grid: Grid) -> Cell {
    let col = rng.random_range(0..grid.columns());
    let first = grid.first_row();
    let row = rng.random_range(first..first + grid.rows());
    Cell::new(col * grid.block, row * grid.block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn spawns_aligned_and_in_bounds() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::default();
        for _ in 0..500 {
            let cell = spawn(&mut rng, grid, &HashSet::new());
            assert!(grid.in_bounds(cell), "{cell:?} is off the board");
            assert_eq!(cell.x % grid.block, 0);
            assert_eq!(cell.y % grid.block, 0);
        }
    }

    #[test]
    fn avoids_occupied_cells() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid {
            width: 40,
            height: 40,
            top: 0,
            block: 20,
        };
        let occupied = HashSet::from([Cell::new(0, 0), Cell::new(20, 0), Cell::new(0, 20)]);
        for _ in 0..50 {
            assert_eq!(spawn(&mut rng, grid, &occupied), Cell::new(20, 20));
        }
    }

    #[test]
    fn never_lands_in_top_band() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid {
            width: 60,
            height: 100,
            top: 70,
            block: 20,
        };
        for _ in 0..100 {
            let cell = spawn(&mut rng, grid, &HashSet::new());
            assert_eq!(cell.y, 80);
        }
    }
}
