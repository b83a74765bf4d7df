//! Game state & rules, independent of how the game is drawn or controlled
mod bonus;
mod collision;
mod direction;
mod food;
mod grid;
mod snake;
use self::bonus::BonusMode;
use self::collision::Collision;
pub(crate) use self::direction::Direction;
use self::grid::{Cell, Grid};
use self::snake::Snake;
use crate::difficulty::Difficulty;
use rand::Rng;
use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

/// One playthrough, from the first move until the snake crashes
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Cell,
    score: u32,
    high_score: u32,
    difficulty: Difficulty,
    /// Current tick rate, in ticks per second
    speed: u32,
    /// Current drawn size of a snake block
    block_size: i32,
    bonus: BonusMode,
    state: SessionState,
    events: Vec<SessionEvent>,
}

impl Session<rand::rngs::ThreadRng> {
    pub(crate) fn new(difficulty: Difficulty, high_score: u32) -> Self {
        Session::new_with_rng(difficulty, high_score, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(difficulty: Difficulty, high_score: u32, rng: R) -> Session<R> {
        Session::with_grid(Grid::default(), difficulty, high_score, rng)
    }

    pub(crate) fn with_grid(
        grid: Grid,
        difficulty: Difficulty,
        high_score: u32,
        mut rng: R,
    ) -> Session<R> {
        let snake = Snake::new(grid.center(), Direction::Right);
        let occupied = snake.cells().iter().copied().collect::<HashSet<_>>();
        let food = food::spawn(&mut rng, grid, &occupied);
        log::info!("Starting new {difficulty} game");
        Session {
            rng,
            grid,
            snake,
            food,
            score: 0,
            high_score,
            difficulty,
            speed: difficulty.tick_rate(),
            block_size: grid.block,
            bonus: BonusMode::Inactive,
            state: SessionState::Running,
            events: Vec::new(),
        }
    }

    /// Perform one tick of the game at time `now`, first turning the snake
    /// towards `input` (if any).  Does nothing unless the session is
    /// running.
    pub(crate) fn advance(&mut self, now: Instant, input: Option<Direction>) -> SessionState {
        if self.state != SessionState::Running {
            return self.state;
        }
        if let Some(direction) = input {
            self.set_direction(direction);
        }
        if self.bonus.expire(now) {
            self.speed = self.difficulty.tick_rate();
            self.block_size = self.grid.block;
            log::debug!("Bonus mode over");
            self.events.push(SessionEvent::BonusEnded);
        }

        let head = self.snake.next_head(self.grid.block);
        if let Some(collision) = collision::check(head, self.snake.cells(), self.grid) {
            self.end(Some(collision));
            return self.state;
        }
        self.snake.advance(self.grid.block);

        if head == self.food {
            let previous = self.score;
            let points = self.bonus.points();
            self.score = self.score.saturating_add(points);
            self.events.push(SessionEvent::FoodEaten { points });
            if self.bonus.observe_score(previous, self.score, now) {
                self.speed = bonus::boosted_speed(self.speed);
                self.block_size = bonus::boosted_block(self.grid.block);
                log::debug!("Bonus mode started at score {}", self.score);
                self.events.push(SessionEvent::BonusStarted);
            }
            if self.snake.len() >= self.grid.cell_count() {
                // Nowhere left to put the food
                self.end(None);
            } else {
                let occupied = self.snake.cells().iter().copied().collect::<HashSet<_>>();
                self.food = food::spawn(&mut self.rng, self.grid, &occupied);
            }
        } else {
            self.snake.drop_tail();
        }
        self.state
    }
}

impl<R> Session<R> {
    /// Queue a change of direction for the next tick.  Has no effect unless
    /// the session is running.  Returns `true` if the change was accepted.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        self.state == SessionState::Running && self.snake.set_direction(direction)
    }

    /// Pause a running session or resume a paused one
    pub(crate) fn toggle_pause(&mut self) -> SessionState {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            SessionState::Over => SessionState::Over,
        };
        self.state
    }

    /// Time between ticks at the current speed
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    /// Take the events that have occurred since the last call
    pub(crate) fn drain_events(&mut self) -> std::vec::Drain<'_, SessionEvent> {
        self.events.drain(..)
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// The better of the high score the session started with and the
    /// current score
    pub(crate) fn high_score(&self) -> u32 {
        self.high_score.max(self.score)
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn speed(&self) -> u32 {
        self.speed
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub(crate) fn block_size(&self) -> i32 {
        self.block_size
    }

    pub(crate) fn bonus(&self) -> BonusMode {
        self.bonus
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake_cells(&self) -> &VecDeque<Cell> {
        self.snake.cells()
    }

    pub(crate) fn food(&self) -> Cell {
        self.food
    }

    fn end(&mut self, collision: Option<Collision>) {
        self.state = SessionState::Over;
        self.high_score = self.high_score.max(self.score);
        match collision {
            Some(c) => log::info!("Game over: {c:?} collision with score {}", self.score),
            None => log::info!("Game over: board filled with score {}", self.score),
        }
        self.events.push(SessionEvent::Over { collision });
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SessionState {
    Running,
    Paused,
    Over,
}

/// Things that happened during a tick that collaborators outside the game
/// rules may want to react to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SessionEvent {
    FoodEaten { points: u32 },
    BonusStarted,
    BonusEnded,
    /// The session ended, either by a collision or by the snake filling the
    /// board
    Over { collision: Option<Collision> },
}
