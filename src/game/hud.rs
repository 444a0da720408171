use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// The title, score, and lives shown in the band at the top of the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Hud {
    pub(super) score: u32,
    pub(super) lives: u32,
}

impl Widget for Hud {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, score_area, lives_area] =
            Layout::vertical([Constraint::Length(1); 3]).areas(area);
        Line::from(consts::TITLE)
            .centered()
            .render(title_area, buf);
        Line::from(format!("Score: {}", self.score))
            .centered()
            .render(score_area, buf);
        Line::from(format!("Lives: {}", self.lives))
            .centered()
            .render(lives_area, buf);
    }
}

/// A pop-up message drawn over the playfield
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Notice {
    Paused,
    GameOver,
}

impl Notice {
    /// The size of the `Rect` that should be passed to `Notice::render()`
    pub(super) fn size(self) -> Size {
        let text_width = u16::try_from(self.message().width()).unwrap_or(u16::MAX);
        Size {
            width: text_width.saturating_add(4),
            height: 3,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Notice::Paused => " PAUSED ",
            Notice::GameOver => " GAME OVER ",
        }
    }

    fn message(self) -> Line<'static> {
        match self {
            Notice::Paused => Line::from_iter([
                Span::raw("Press "),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(" to resume"),
            ]),
            Notice::GameOver => Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to play again"),
            ]),
        }
    }
}

impl Widget for Notice {
    /*
     * ┌──────── GAME OVER ────────┐
     * │ Press Enter to play again │
     * └───────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        self.message().render(inner, buf);
    }
}
