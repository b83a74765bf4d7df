use crate::menu::MainMenu;
use crate::play::Play;
use crate::util::Globals;
use crate::warning::Warning;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    /// Start at the main menu, showing `warning` on top of it if given
    pub(crate) fn new(globals: Globals, warning: Option<Warning>) -> App {
        let screen = Screen::Main(MainMenu::new(globals).with_warning(warning));
        App { screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Main(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            Screen::Play(ref play) => {
                terminal.draw(|frame| play.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Main(ref mut menu) => menu.process_input()?,
            Screen::Play(ref mut play) => play.process_input()?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            log::debug!("Switching to {} screen", screen.name());
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

/// What the application is currently showing
#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Play(Play),
    Quit,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Main(_) => "main menu",
            Screen::Play(_) => "game",
            Screen::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn draw_menu_with_warning() {
        let app = App::new(
            Globals::default(),
            Some(Warning::from(io::Error::other("bad config"))),
        );
        let mut terminal = Terminal::new(TestBackend::new(82, 31)).expect("terminal should open");
        app.draw(&mut terminal).expect("drawing should succeed");
        let buffer = terminal.backend().buffer();
        let rows = (0..31)
            .map(|y| (0..82).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>();
        // The pop-up sits in the middle of the screen, over the menu options
        assert!(rows.iter().any(|r| r.contains(" WARNING ")));
        assert!(rows.iter().any(|r| r.contains("bad config")));
        assert!(!rows.iter().any(|r| r.contains("[Start Game (p)]")));
        assert!(rows.iter().any(|r| r.contains("[Quit (q)]")));
        assert!(rows.iter().any(|r| r.contains("High Score: 0")));
        assert!(!app.quitting());
    }
}
