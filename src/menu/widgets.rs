use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const TEXT_WIDTH: u16 = 32;
    const TEXT_HEIGHT: u16 = 5;
    const SNAKE_BODY_LENGTH: usize = 6;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::TEXT_WIDTH;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____  _   _    _    _  _______ ",
        r"/ ___|| \ | |  / \  | |/ / ____|",
        r"\___ \|  \| | / _ \ | ' /|  _|  ",
        r" ___) | |\  |/ ___ \| . \| |___ ",
        r"|____/|_| \_/_/   \_\_|\_\_____|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        Text::from_iter(Self::TEXT)
            .style(consts::SNAKE_STYLE)
            .render(words_area, buf);
        let mut snake = consts::SNAKE_BODY_SYMBOL.repeat(Self::SNAKE_BODY_LENGTH);
        snake.push_str(consts::SNAKE_HEAD_SYMBOL);
        Line::from_iter([
            Span::styled(snake, consts::SNAKE_STYLE),
            Span::raw("  "),
            Span::styled(consts::FRUIT_SYMBOL, consts::FRUIT_STYLE),
        ])
        .centered()
        .render(diagram_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 7;
    pub(super) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys = |prefix: &'static str, names: [&'static str; 4]| {
            let mut line = Line::from(prefix);
            for (i, k) in names.into_iter().enumerate() {
                if i > 0 {
                    line.push_span(" ");
                }
                line.push_span(Span::styled(k, consts::KEY_STYLE));
            }
            line
        };
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            keys("       ", ["←", "↓", "↑", "→"]),
            keys("   or: ", ["h", "j", "k", "l"]),
            keys("   or: ", ["a", "s", "w", "d"]),
            Line::from("Eat the fruit, but"),
            Line::from("don't hit the walls"),
            Line::from("or yourself!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}
