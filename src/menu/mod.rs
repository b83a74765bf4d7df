mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::play::Play;
use crate::util::{get_display_area, navigate, Globals};
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
    globals: Globals,

    /// The stored high score, read when the menu was opened
    high_score: u32,

    /// An error to show on top of the menu until dismissed
    warning: Option<Warning>,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        let high_score = globals.high_score.load();
        MainMenu {
            selection: Selection::default(),
            globals,
            high_score,
            warning: None,
        }
    }

    pub(crate) fn with_warning(mut self, warning: Option<Warning>) -> Self {
        self.warning = warning;
        self
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if let Some(ref warning) = self.warning {
            match warning.handle_command(cmd)? {
                WarningOutcome::Dismissed => self.warning = None,
                WarningOutcome::Quit => return Some(Screen::Quit),
            }
            return None;
        }
        match (self.selection, cmd) {
            (_, Command::Quit | Command::Q) | (Selection::Quit, Command::Enter) => {
                return Some(Screen::Quit)
            }
            (_, Command::P) | (Selection::Play, Command::Enter) => {
                return Some(Screen::Play(self.play()))
            }
            (Selection::Difficulty, Command::Enter | Command::Right) => {
                self.globals.difficulty = self.globals.difficulty.cycle();
            }
            (Selection::Difficulty, Command::Left) => {
                self.globals.difficulty = self.globals.difficulty.cycle_back();
            }
            (_, cmd) => {
                if let Some(selection) = navigate(self.selection, cmd) {
                    self.selection = selection;
                }
            }
        }
        None
    }

    fn play(&self) -> Play {
        Play::new(self.globals.clone())
    }

    fn style_for(&self, selection: Selection) -> Style {
        if self.selection == selection {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        }
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, play_area, difficulty_area, quit_area, score_area] =
            Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        let style = self.style_for(Selection::Play);
        Line::from_iter([
            Span::styled("[Start Game (", style),
            Span::styled("p", consts::KEY_STYLE.patch(style)),
            Span::styled(")]", style),
        ])
        .centered()
        .render(play_area, buf);

        let style = self.style_for(Selection::Difficulty);
        Line::from_iter([
            Span::styled("Difficulty: ", style),
            Span::styled("◀", consts::KEY_STYLE.patch(style)),
            Span::styled(
                format!(
                    " {:^width$} ",
                    self.globals.difficulty,
                    width = usize::from(Difficulty::DISPLAY_WIDTH)
                ),
                style,
            ),
            Span::styled("▶", consts::KEY_STYLE.patch(style)),
        ])
        .centered()
        .render(difficulty_area, buf);

        let style = self.style_for(Selection::Quit);
        Line::from_iter([
            Span::styled("[Quit (", style),
            Span::styled("q", consts::KEY_STYLE.patch(style)),
            Span::styled(")]", style),
        ])
        .centered()
        .render(quit_area, buf);

        Line::from(format!("High Score: {}", self.high_score))
            .centered()
            .render(score_area, buf);

        if let Some(ref warning) = self.warning {
            warning.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
enum Selection {
    #[default]
    Play,
    Difficulty,
    Quit,
}
