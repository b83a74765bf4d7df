use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::highscore::HighScoreFile;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Settings shared by every screen of the application
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    /// Difficulty for the next game
    pub(crate) difficulty: Difficulty,

    /// Where the high score is kept
    pub(crate) high_score: HighScoreFile,

    /// Whether to ring the terminal bell when the snake eats
    pub(crate) sound: bool,
}

impl Globals {
    pub(crate) fn from_config(config: &Config) -> Globals {
        Globals {
            difficulty: config.difficulty,
            high_score: HighScoreFile::new(config.high_score_path()),
            sound: config.sound,
        }
    }
}

pub(crate) trait EnumExt: Enum {
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize().checked_add(1)?;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

/// Move a menu's `selection` in response to `cmd`.  Up & Down stop at the
/// ends of the menu while Tab & Shift-Tab wrap around.  Returns `None` if
/// `cmd` is not a navigation command.
pub(crate) fn navigate<T: EnumExt + Copy>(selection: T, cmd: Command) -> Option<T> {
    Some(match cmd {
        Command::Up => selection.prev().unwrap_or(selection),
        Command::Down => selection.next().unwrap_or(selection),
        Command::Next => selection.next().unwrap_or_else(T::min),
        Command::Prev => selection.prev().unwrap_or_else(T::max),
        Command::Home => T::min(),
        Command::End => T::max(),
        _ => return None,
    })
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of size `size` centered within `area`, clipped to `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}
