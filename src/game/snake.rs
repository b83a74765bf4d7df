use super::direction::Direction;
use super::grid::Cell;
use std::collections::VecDeque;

/// The snake: where it is and where it is going.
///
/// The head is at the front of `body`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first
    pub(super) body: VecDeque<Cell>,

    /// The direction the snake moved in on its most recent advance
    pub(super) heading: Direction,

    /// The direction the snake will move in on its next advance
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a one-cell snake at `head` facing in `direction`
    pub(crate) fn new(head: Cell, direction: Direction) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            heading: direction,
            direction,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.body[0]
    }

    /// Return the cells of the snake, head first
    pub(crate) fn cells(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Set the direction for the next advance.  Turning back onto the
    /// snake's own neck is refused; returns whether the change was accepted.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.heading.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Where the head will be after the next advance
    pub(crate) fn next_head(&self, block: i32) -> Cell {
        self.head().step(self.direction, block)
    }

    /// Move the head one block forwards, keeping the tail in place.  Call
    /// [`Snake::drop_tail()`] afterwards unless the snake is growing.
    pub(crate) fn advance(&mut self, block: i32) -> Cell {
        let head = self.next_head(block);
        self.body.push_front(head);
        self.heading = self.direction;
        head
    }

    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }
}
