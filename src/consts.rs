//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Position,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between frames of the main loop (60 Hz).  Input is polled and the
/// game is updated once per frame.  Rounded up so that fifteen frames cover
/// the default move delay.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Time between movements of a freshly-spawned snake.  Four cells per
/// second.
pub(crate) const DEFAULT_MOVE_DELAY: Duration = Duration::from_millis(250);

/// Whenever the snake doubles in length, its move delay is multiplied by
/// `SPEEDUP_NUMERATOR / SPEEDUP_DENOMINATOR`.
pub(crate) const SPEEDUP_NUMERATOR: u32 = 3;

/// Cf. [`SPEEDUP_NUMERATOR`]
pub(crate) const SPEEDUP_DENOMINATOR: u32 = 4;

/// Points awarded for each apple eaten
pub(crate) const POINTS_PER_APPLE: u32 = 100;

/// Default number of apples on the board at once
pub(crate) const DEFAULT_MAX_APPLES: usize = 10;

/// Default number of lives at the start of a match
pub(crate) const DEFAULT_LIVES: u32 = 3;

/// Default length of a newly-spawned snake
pub(crate) const DEFAULT_STARTING_LENGTH: usize = 3;

/// Thickness of the board's border, in cells
pub(crate) const BORDER_WIDTH: u16 = 1;

/// Number of rows reserved below the top border for the title, score, and
/// lives
pub(crate) const HUD_HEIGHT: u16 = 3;

/// The lower-right corner of the board is clamped to this position no matter
/// how large the terminal is.
pub(crate) const MAX_LOWER_RIGHT: Position = Position { x: 39, y: 39 };

/// Title shown at the top of the HUD
pub(crate) const TITLE: &str = "Snake";

/// Glyph for each cell of the snake's body
pub(crate) const SNAKE_SYMBOL: char = 'X';

/// Glyph for an uneaten apple
pub(crate) const APPLE_SYMBOL: char = 'A';

/// Style for the snake
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for apples
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for key names shown in the overlays
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
