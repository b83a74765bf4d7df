//! The game screen: drives a [`Session`] in real time, draws it, and
//! handles the player's input
mod paused;
use self::paused::{PauseOpt, Paused};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::{Direction, Session, SessionEvent, SessionState};
use crate::menu::MainMenu;
use crate::sound::Bell;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::{rngs::ThreadRng, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
    Frame,
};
use std::collections::VecDeque;
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct Play<R = ThreadRng> {
    session: Session<R>,
    globals: Globals,

    /// The high score on record when the game began
    record: u32,

    /// When the snake should next move.  `None` means "one tick period from
    /// whenever we next check".
    next_tick: Option<Instant>,

    /// Turns entered since the last tick, oldest first
    pending: VecDeque<Direction>,

    /// The pause menu, present whenever the session is paused
    paused: Option<Paused>,

    /// Whether the session ended by the snake crashing into something
    crashed: bool,

    bell: Option<Bell>,
}

impl Play<ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Play<ThreadRng> {
        let record = globals.high_score.load();
        let session = Session::new(globals.difficulty, record);
        Play::with_session(session, globals, record)
    }
}

impl<R: Rng> Play<R> {
    #[cfg(test)]
    fn new_with_rng(globals: Globals, rng: R) -> Play<R> {
        let record = globals.high_score.load();
        let session = Session::new_with_rng(globals.difficulty, record, rng);
        Play::with_session(session, globals, record)
    }

    /// Wait for either the next tick or the next input event, whichever
    /// comes first, and handle it
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.session.state() != SessionState::Running {
            return if poll(consts::IDLE_REDRAW_PERIOD)? {
                Ok(self.handle_event(read()?))
            } else {
                Ok(None)
            };
        }
        let deadline = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + self.session.tick_period());
        let wait = deadline.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.next_tick = None;
            self.tick(Instant::now());
            Ok(None)
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn tick(&mut self, now: Instant) {
        let input = self.pending.pop_front();
        let state = self.session.advance(now, input);
        let events = self.session.drain_events().collect::<Vec<_>>();
        for event in events {
            match event {
                SessionEvent::FoodEaten { points } => {
                    log::debug!(
                        "Ate food for {points} point(s); speed is now {}",
                        self.session.speed()
                    );
                    self.ring();
                }
                SessionEvent::BonusStarted => self.ring(),
                SessionEvent::BonusEnded => (),
                SessionEvent::Over { collision } => {
                    self.crashed = collision.is_some();
                    self.persist();
                }
            }
        }
        if state != SessionState::Running {
            self.pending.clear();
        }
    }
}

impl<R> Play<R> {
    fn with_session(session: Session<R>, globals: Globals, record: u32) -> Play<R> {
        let bell = Bell::open(globals.sound);
        Play {
            session,
            globals,
            record,
            next_tick: None,
            pending: VecDeque::new(),
            paused: None,
            crashed: false,
            bell,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if event == Event::FocusLost {
            if self.session.state() == SessionState::Running {
                self.pause();
            }
            return None;
        }
        if let Some(ref mut paused) = self.paused {
            return match paused.handle_event(event)? {
                PauseOpt::Resume => {
                    self.resume();
                    None
                }
                PauseOpt::Restart => Some(self.restart()),
                PauseOpt::MainMenu => Some(self.main_menu()),
                PauseOpt::Quit => Some(self.quit()),
            };
        }
        match (
            self.session.state(),
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit | Command::Q) => return Some(self.quit()),
            (_, Command::Esc) | (SessionState::Over, Command::M) => {
                return Some(self.main_menu())
            }
            (SessionState::Over, Command::R | Command::Enter) => return Some(self.restart()),
            (SessionState::Running, Command::P) => self.pause(),
            (SessionState::Running, Command::Up) => self.queue_turn(Direction::Up),
            (SessionState::Running, Command::Down) => self.queue_turn(Direction::Down),
            (SessionState::Running, Command::Left) => self.queue_turn(Direction::Left),
            (SessionState::Running, Command::Right) => self.queue_turn(Direction::Right),
            _ => (),
        }
        None
    }

    fn ring(&self) {
        if let Some(bell) = self.bell {
            bell.ring();
        }
    }

    fn queue_turn(&mut self, direction: Direction) {
        if self.pending.len() < consts::MAX_PENDING_TURNS {
            self.pending.push_back(direction);
        }
    }

    fn pause(&mut self) {
        if self.session.toggle_pause() == SessionState::Paused {
            self.paused = Some(Paused::new());
            self.pending.clear();
            self.next_tick = None;
        }
    }

    fn resume(&mut self) {
        if self.session.toggle_pause() == SessionState::Running {
            self.paused = None;
        }
    }

    /// Record the current score if it beats the stored high score
    fn persist(&self) {
        self.globals.high_score.save(self.session.score());
    }

    fn quit(&self) -> Screen {
        self.persist();
        Screen::Quit
    }

    fn main_menu(&self) -> Screen {
        self.persist();
        Screen::Main(MainMenu::new(self.globals.clone()))
    }

    fn restart(&self) -> Screen {
        self.persist();
        Screen::Play(Play::new(self.globals.clone()))
    }

    fn render_score_bar(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        buf.set_style(area, consts::SCORE_BAR_STYLE);
        let mut left = Line::from(format!(" Score: {}", self.session.score()));
        if let Some(remaining) = self.session.bonus().remaining(now) {
            let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            left.push_span("  ");
            left.push_span(Span::styled(
                format!("BONUS x2 {secs}s"),
                consts::BONUS_BADGE_STYLE,
            ));
        }
        left.render(area, buf);
        Line::from(self.session.difficulty().as_str())
            .centered()
            .render(area, buf);
        Line::from(format!("High Score: {} ", self.session.high_score()))
            .right_aligned()
            .render(area, buf);
    }

    /// Draw the board centered in `area` and return the `Rect` it occupies
    fn render_board(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let grid = self.session.grid();
        let columns = u16::try_from(grid.columns()).unwrap_or_default();
        let rows = u16::try_from(grid.rows()).unwrap_or_default();
        let board = center_rect(
            area,
            Size::new(
                columns.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
                rows.saturating_add(2),
            ),
        );
        let block = Block::bordered();
        let inner = block.inner(board);
        block.render(board, buf);
        let mut canvas = Canvas { area: inner, buf };

        if let Some(pos) = grid.to_position(self.session.food()) {
            canvas.draw(pos, consts::FRUIT_SYMBOL, consts::FRUIT_STYLE);
        }
        let (body_symbol, body_style, head_style) = if self.session.block_size() > grid.block {
            (
                consts::BONUS_BODY_SYMBOL,
                consts::BONUS_SNAKE_STYLE,
                consts::BONUS_SNAKE_STYLE,
            )
        } else {
            (
                consts::SNAKE_BODY_SYMBOL,
                consts::SNAKE_STYLE,
                consts::SNAKE_HEAD_STYLE,
            )
        };
        let cells = self.session.snake_cells();
        for pos in cells.iter().skip(1).filter_map(|&c| grid.to_position(c)) {
            canvas.draw(pos, body_symbol, body_style);
        }
        if let Some(pos) = cells.front().and_then(|&c| grid.to_position(c)) {
            if self.crashed {
                canvas.draw(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                canvas.draw(pos, consts::SNAKE_HEAD_SYMBOL, head_style);
            }
        }
        board
    }

    fn render_messages(&self, area: Rect, buf: &mut Buffer) {
        let [status_area, keys_area] = Layout::vertical([Constraint::Length(1); 2]).areas(area);
        if self.session.state() == SessionState::Over {
            let score = self.session.score();
            let mut status = Line::from_iter([
                Span::styled("GAME OVER", consts::GAME_OVER_STYLE),
                Span::raw(format!("  Your score: {score}")),
            ]);
            if score > self.record {
                status.push_span("  ");
                status.push_span(Span::styled("New high score!", consts::BONUS_BADGE_STYLE));
            }
            status.centered().render(status_area, buf);
            key_help(&[("Restart", "r"), ("Main Menu", "m"), ("Quit", "q")])
                .render(keys_area, buf);
        } else {
            key_help(&[("Pause", "p"), ("Main Menu", "Esc"), ("Quit", "q")])
                .render(keys_area, buf);
        }
    }
}

impl<R> Widget for &Play<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [bar_area, board_area, messages_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(display);
        self.render_score_bar(bar_area, buf, Instant::now());
        let board = self.render_board(board_area, buf);
        self.render_messages(messages_area, buf);
        if let Some(paused) = self.paused {
            let popup = center_rect(board, Size::new(Paused::WIDTH, Paused::HEIGHT));
            Clear.render(popup, buf);
            paused.render(popup, buf);
        }
    }
}

/// A centered line of "Label (key)" hints
fn key_help(items: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut line = Line::default();
    for (i, &(label, key)) in items.iter().enumerate() {
        if i > 0 {
            line.push_span("  ");
        }
        line.push_span(format!("{label} ("));
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line.centered()
}

/// Draws board blocks into the inside of the board's border, each block
/// taking [`CELL_WIDTH`][consts::CELL_WIDTH] terminal columns
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw(&mut self, (col, row): (u16, u16), symbol: &str, style: Style) {
        let x = self
            .area
            .x
            .saturating_add(col.saturating_mul(consts::CELL_WIDTH));
        let y = self.area.y.saturating_add(row);
        for (x, ch) in (x..).zip(symbol.chars()) {
            if !self.area.contains(Position::new(x, y)) {
                break;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::highscore::HighScoreFile;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::style::Color;
    use rstest::rstest;
    use std::path::Path;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn play() -> Play<ChaCha12Rng> {
        Play::new_with_rng(Globals::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    fn render(play: &Play<ChaCha12Rng>) -> Buffer {
        let area = Rect::new(0, 0, 82, 31);
        let mut buffer = Buffer::empty(area);
        play.render(area, &mut buffer);
        buffer
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Tick until the session ends, which it must do by the time the snake
    /// has crossed the board
    fn run_to_end(play: &mut Play<ChaCha12Rng>) {
        let mut now = Instant::now();
        for _ in 0..100 {
            if play.session.state() == SessionState::Over {
                return;
            }
            play.tick(now);
            now += Duration::from_millis(10);
        }
        panic!("session never ended");
    }

    #[test]
    fn render_initial() {
        let play = play();
        let buffer = render(&play);
        let bar = row_text(&buffer, 0);
        assert!(bar.starts_with(" Score: 0 "), "{bar:?}");
        assert!(bar.contains("Beginner"), "{bar:?}");
        assert!(bar.ends_with("High Score: 0 "), "{bar:?}");
        assert!(buffer[(0, 0)].modifier.contains(ratatui::style::Modifier::REVERSED));

        assert_eq!(buffer[(0, 1)].symbol(), "┌");
        assert_eq!(buffer[(81, 1)].symbol(), "┐");
        assert_eq!(buffer[(0, 28)].symbol(), "└");
        assert_eq!(buffer[(81, 28)].symbol(), "┘");

        // The snake starts as just its head in the middle of the board
        assert_eq!(buffer[(41, 13)].symbol(), "█");
        assert_eq!(buffer[(42, 13)].symbol(), "█");
        assert_eq!(buffer[(41, 13)].fg, Color::LightGreen);

        let (col, row) = play
            .session
            .grid()
            .to_position(play.session.food())
            .expect("food should be on the board");
        let (x, y) = (1 + col * 2, 2 + row);
        assert_eq!(buffer[(x, y)].symbol(), "(");
        assert_eq!(buffer[(x + 1, y)].symbol(), ")");
        assert_eq!(buffer[(x, y)].fg, Color::LightRed);

        assert!(row_text(&buffer, 30).contains("Pause (p)  Main Menu (Esc)  Quit (q)"));
    }

    #[test]
    fn pause_and_resume() {
        let mut play = play();
        assert!(play.handle_event(key(KeyCode::Char('p'))).is_none());
        assert_eq!(play.session.state(), SessionState::Paused);
        assert!(play.paused.is_some());
        let buffer = render(&play);
        assert!((0..31).any(|y| row_text(&buffer, y).contains(" PAUSED ")));

        // Moving is impossible while paused
        assert!(play.handle_event(key(KeyCode::Up)).is_none());
        assert!(play.pending.is_empty());

        assert!(play.handle_event(key(KeyCode::Char('p'))).is_none());
        assert_eq!(play.session.state(), SessionState::Running);
        assert!(play.paused.is_none());
    }

    #[test]
    fn losing_focus_pauses() {
        let mut play = play();
        assert!(play.handle_event(Event::FocusLost).is_none());
        assert_eq!(play.session.state(), SessionState::Paused);
        assert!(play.handle_event(Event::FocusGained).is_none());
        assert_eq!(play.session.state(), SessionState::Paused);
    }

    #[test]
    fn turns_are_buffered() {
        let mut play = play();
        for code in [KeyCode::Up, KeyCode::Left, KeyCode::Down, KeyCode::Right] {
            assert!(play.handle_event(key(code)).is_none());
        }
        assert_eq!(
            play.pending,
            [Direction::Up, Direction::Left, Direction::Down]
        );
        play.tick(Instant::now());
        assert_eq!(play.pending, [Direction::Left, Direction::Down]);
    }

    #[test]
    fn escape_goes_to_menu() {
        let mut play = play();
        assert!(matches!(
            play.handle_event(key(KeyCode::Esc)),
            Some(Screen::Main(_))
        ));
    }

    #[test]
    fn quit() {
        let mut play = play();
        assert!(matches!(
            play.handle_event(key(KeyCode::Char('q'))),
            Some(Screen::Quit)
        ));
        let mut other = self::play();
        assert!(matches!(
            other.handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn game_over() {
        let mut play = play();
        run_to_end(&mut play);
        assert!(play.crashed);
        let buffer = render(&play);
        assert!(row_text(&buffer, 29).contains("GAME OVER  Your score: "));
        assert!(row_text(&buffer, 30).contains("Restart (r)  Main Menu (m)  Quit (q)"));
        assert!((0..31).any(|y| row_text(&buffer, y).contains("××")));

        assert!(play.handle_event(key(KeyCode::Up)).is_none());
        assert!(play.pending.is_empty());
        assert!(play.handle_event(key(KeyCode::Char('p'))).is_none());
        assert_eq!(play.session.state(), SessionState::Over);

        assert!(matches!(
            play.clone().handle_event(key(KeyCode::Char('r'))),
            Some(Screen::Play(_))
        ));
        assert!(matches!(
            play.clone().handle_event(key(KeyCode::Char('m'))),
            Some(Screen::Main(_))
        ));
    }

    #[test]
    fn high_score_from_file() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("highscore.json");
        fs_err::write(&path, "{\"highscore\": 42}\n").expect("failed to write high score");
        let globals = Globals {
            difficulty: Difficulty::Advanced,
            high_score: HighScoreFile::new(Some(path)),
            sound: false,
        };
        let play = Play::new_with_rng(globals, ChaCha12Rng::seed_from_u64(RNG_SEED));
        assert_eq!(play.record, 42);
        assert_eq!(play.session.speed(), 20);
        let bar = row_text(&render(&play), 0);
        assert!(bar.ends_with("High Score: 42 "), "{bar:?}");
        assert!(bar.contains("Advanced"), "{bar:?}");
    }

    fn play_with_store(dir: &Path) -> Play<ChaCha12Rng> {
        let globals = Globals {
            high_score: HighScoreFile::new(Some(dir.join("highscore.json"))),
            ..Globals::default()
        };
        Play::new_with_rng(globals, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[rstest]
    #[case(key(KeyCode::Esc), 5)]
    #[case(key(KeyCode::Char('q')), 9)]
    #[case(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), 11)]
    fn leaving_saves_score(#[case] event: Event, #[case] score: u32) {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let mut play = play_with_store(dir.path());
        play.session.set_score(score);
        assert!(play.handle_event(event).is_some());
        assert_eq!(play.globals.high_score.load(), score);
    }

    #[test]
    fn leaving_from_pause_menu_saves_score() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let mut play = play_with_store(dir.path());
        play.session.set_score(6);
        assert!(play.handle_event(key(KeyCode::Char('p'))).is_none());
        assert!(matches!(
            play.handle_event(key(KeyCode::Char('m'))),
            Some(Screen::Main(_))
        ));
        assert_eq!(play.globals.high_score.load(), 6);
    }

    #[test]
    fn crash_saves_score() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let mut play = play_with_store(dir.path());
        play.session.set_score(7);
        run_to_end(&mut play);
        let score = play.session.score();
        assert!(score >= 7);
        assert_eq!(play.globals.high_score.load(), score);
        let bar = row_text(&render(&play), 0);
        assert!(bar.ends_with(&format!("High Score: {score} ")), "{bar:?}");
    }

    #[test]
    fn low_score_keeps_stored_high_score() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        fs_err::write(dir.path().join("highscore.json"), "{\"highscore\": 100}\n")
            .expect("failed to write high score");
        let mut play = play_with_store(dir.path());
        play.session.set_score(3);
        run_to_end(&mut play);
        assert_eq!(play.globals.high_score.load(), 100);
        let buffer = render(&play);
        assert!(!row_text(&buffer, 29).contains("New high score!"));
        assert!(row_text(&buffer, 0).ends_with("High Score: 100 "));
    }
}
