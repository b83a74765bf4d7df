use super::grid::{Cell, Grid};
use std::collections::VecDeque;

/// What the snake's head ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The head left the playing field
    Wall,
    /// The head landed on a cell of the snake's own body
    Body,
}

/// Test a prospective new head against the board edges and against `body`,
/// the snake as it was *before* the move.  The tail cell is still counted
/// even though it would vacate on a non-growing move.
pub(crate) fn check(head: Cell, body: &VecDeque<Cell>, grid: Grid) -> Option<Collision> {
    if !grid.in_bounds(head) {
        Some(Collision::Wall)
    } else if body.contains(&head) {
        Some(Collision::Body)
    } else {
        None
    }
}
