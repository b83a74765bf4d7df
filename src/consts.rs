//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width of the board, in board units
pub(crate) const BOARD_WIDTH: i32 = 800;

/// Height of the board, in board units, including the reserved top band
pub(crate) const BOARD_HEIGHT: i32 = 600;

/// Height of the band at the top of the board that the snake may not enter
pub(crate) const BOARD_TOP: i32 = 80;

/// Side length of one block of the board, in board units
pub(crate) const BLOCK_SIZE: i32 = 20;

/// Bonus mode begins whenever the score reaches a multiple of this
pub(crate) const BONUS_SCORE_STEP: u32 = 10;

/// How long bonus mode lasts once triggered
pub(crate) const BONUS_DURATION: Duration = Duration::from_secs(10);

/// Amount added to the tick rate while bonus mode is active
pub(crate) const BONUS_SPEED_BOOST: u32 = 7;

/// Amount added to the drawn block size while bonus mode is active
pub(crate) const BONUS_BLOCK_GROWTH: i32 = 10;

/// Points per fruit outside of bonus mode
pub(crate) const FOOD_POINTS: u32 = 1;

/// Points per fruit during bonus mode
pub(crate) const BONUS_FOOD_POINTS: u32 = 2;

/// Maximum number of direction changes queued between two ticks
pub(crate) const MAX_PENDING_TURNS: usize = 3;

/// How often to redraw the game screen while the snake is not moving
pub(crate) const IDLE_REDRAW_PERIOD: Duration = Duration::from_millis(100);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 82,
    height: 31,
};

/// Number of terminal columns used to draw one block of the board
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "██";

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▓▓";

/// Glyphs for the parts of the snake's body while it is enlarged by bonus
/// mode
pub(crate) const BONUS_BODY_SYMBOL: &str = "██";

/// Glyphs for the fruit
pub(crate) const FRUIT_SYMBOL: &str = "()";

/// Glyphs for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the whole snake while bonus mode is active
pub(crate) const BONUS_SNAKE_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for the fruit
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the "GAME OVER" banner
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the bonus indicator in the score bar
pub(crate) const BONUS_BADGE_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
