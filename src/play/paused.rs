use crate::command::Command;
use crate::consts;
use crate::util::{navigate, EnumExt};
use crossterm::event::Event;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// The pop-up shown over the board while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    /// The highlighted option
    selection: PauseOpt,
}

impl Paused {
    /// Size of the `Rect` that `Paused::render()` expects
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 21;

    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle an input event.  Returns `Some` once the player has picked an
    /// option, either by shortcut key or by pressing Enter on the
    /// highlighted one.
    pub(super) fn handle_event(&mut self, event: Event) -> Option<PauseOpt> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if let Some(selection) = navigate(self.selection, cmd) {
            self.selection = selection;
            return None;
        }
        match cmd {
            Command::P => Some(PauseOpt::Resume),
            Command::R => Some(PauseOpt::Restart),
            Command::M | Command::Esc => Some(PauseOpt::MainMenu),
            Command::Q | Command::Quit => Some(PauseOpt::Quit),
            Command::Enter => Some(self.selection),
            _ => None,
        }
    }
}

/// What the player can do from the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    Resume,
    /// Abandon this game and start a new one
    Restart,
    MainMenu,
    Quit,
}

impl PauseOpt {
    fn label(self) -> (&'static str, &'static str) {
        match self {
            PauseOpt::Resume => ("Resume", "p"),
            PauseOpt::Restart => ("Restart", "r"),
            PauseOpt::MainMenu => ("Main Menu", "Esc"),
            PauseOpt::Quit => ("Quit", "q"),
        }
    }

    fn to_line(self, selected: bool) -> Line<'static> {
        let (text, key) = self.label();
        let line = Line::from_iter([
            Span::raw(if selected { "» " } else { "  " }),
            Span::raw(text),
            Span::raw(" ("),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(")"),
        ]);
        if selected {
            line.style(consts::MENU_SELECTION_STYLE)
        } else {
            line
        }
    }
}

impl Widget for Paused {
    /*
     * ┌───── PAUSED ──────┐
     * │ » Resume (p)      │
     * │   Restart (r)     │
     * │   Main Menu (Esc) │
     * │   Quit (q)        │
     * └───────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}
