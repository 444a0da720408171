mod apples;
mod board;
mod direction;
mod hud;
mod snake;
pub(crate) use self::board::Board;
use self::apples::Apples;
use self::direction::Direction;
use self::hud::{Hud, Notice};
use self::snake::{Snake, Step};
use crate::command::Intent;
use crate::config::Config;
use crate::consts;
use crate::util::center_rect;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::Style,
    symbols::{border, line},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Duration;

/// Border for the playfield, whose top edge doubles as the line separating
/// it from the HUD
const FIELD_BORDER: border::Set = border::Set {
    top_left: line::NORMAL.vertical_right,
    top_right: line::NORMAL.vertical_left,
    ..border::PLAIN
};

/// A single match of snake, from the first frame until the player exits
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: Config,
    board: Board,
    snake: Snake,
    apples: Apples,
    score: u32,
    lives: u32,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: Config, board: Board) -> Self {
        Game::new_with_rng(config, board, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: Config, board: Board, mut rng: R) -> Game<R> {
        let snake = Snake::new(&board, board.center(), config.starting_length);
        let apples = Apples::spawn(&mut rng, &board, config.max_apples);
        log::info!(
            "Starting match on {}x{} board with {} apples and {} lives",
            board.width(),
            board.height(),
            apples.len(),
            config.lives,
        );
        Game {
            rng,
            config,
            board,
            snake,
            apples,
            score: 0,
            lives: config.lives,
            state: GameState::Playing,
        }
    }

    /// Apply a player intent to the state machine
    pub(crate) fn handle_intent(&mut self, intent: Intent) {
        match (self.state, intent) {
            (GameState::Finished, _) => (),
            (_, Intent::Exit) => {
                log::debug!("Exit requested while {:?}", self.state);
                self.state = GameState::Finished;
            }
            (GameState::Playing, Intent::Pause) => {
                log::debug!("Pausing");
                self.state = GameState::Paused;
            }
            (GameState::Paused, Intent::Pause) => {
                log::debug!("Resuming");
                self.state = GameState::Playing;
            }
            (GameState::GameOver, Intent::Start) => self.restart(),
            (GameState::Playing, Intent::MoveUp) => self.snake.turn(Direction::Up),
            (GameState::Playing, Intent::MoveDown) => self.snake.turn(Direction::Down),
            (GameState::Playing, Intent::MoveLeft) => self.snake.turn(Direction::Left),
            (GameState::Playing, Intent::MoveRight) => self.snake.turn(Direction::Right),
            _ => (),
        }
    }

    /// Advance the match by `delta`, the time since the previous frame.  Does
    /// nothing unless the match is in play.
    pub(crate) fn update(&mut self, delta: Duration) {
        if self.state != GameState::Playing {
            return;
        }
        let step = self.snake.tick(&self.board, delta, &mut self.apples);
        if self.snake.has_crashed() {
            self.lose_life();
        } else if let Step::Moved { eaten } = step {
            log::trace!(
                "Snake moved {:?} to {:?}; length {}, next move in {:?}",
                self.snake.direction(),
                self.snake.head(),
                self.snake.len(),
                self.snake.move_delay(),
            );
            let eaten = u32::try_from(eaten).unwrap_or(u32::MAX);
            self.score = self
                .score
                .saturating_add(eaten.saturating_mul(consts::POINTS_PER_APPLE));
        }
        if self.apples.eaten_qty() > 0 {
            self.apples.respawn_eaten(&mut self.rng, &self.board);
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            log::info!("Game over; final score: {}", self.score);
            self.state = GameState::GameOver;
        } else {
            log::debug!("Snake crashed; {} lives remaining", self.lives);
            self.snake.reset_to(&self.board, self.board.center());
        }
    }

    fn restart(&mut self) {
        log::info!("Starting a new match");
        self.score = 0;
        self.lives = self.config.lives;
        self.snake = Snake::new(
            &self.board,
            self.board.center(),
            self.config.starting_length,
        );
        self.apples = Apples::spawn(&mut self.rng, &self.board, self.config.max_apples);
        self.state = GameState::Playing;
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// The cells of the snake's body, from tail to head
    pub(crate) fn snake_body(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.body().iter().copied()
    }

    pub(crate) fn apples(&self) -> &Apples {
        &self.apples
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn remaining_lives(&self) -> u32 {
        self.lives
    }

    pub(crate) fn paused(&self) -> bool {
        self.state == GameState::Paused
    }

    pub(crate) fn game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// True once the player has asked to leave.  The frame loop should stop.
    pub(crate) fn finished(&self) -> bool {
        self.state == GameState::Finished
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_area = center_rect(area, self.board().size());
        let hud_height = consts::HUD_HEIGHT.saturating_add(2 * consts::BORDER_WIDTH);
        let hud_area = Rect {
            height: hud_height.min(board_area.height),
            ..board_area
        };
        let field_area = Rect {
            y: board_area
                .y
                .saturating_add(hud_height.saturating_sub(consts::BORDER_WIDTH)),
            height: board_area
                .height
                .saturating_sub(hud_height.saturating_sub(consts::BORDER_WIDTH)),
            ..board_area
        };

        Block::bordered().render(hud_area, buf);
        Hud {
            score: self.score(),
            lives: self.remaining_lives(),
        }
        .render(hud_area.inner(Margin::new(1, 1)), buf);
        Block::bordered()
            .border_set(FIELD_BORDER)
            .render(field_area, buf);

        let mut canvas = Canvas {
            origin: self.board().upper_left(),
            area: board_area,
            buf,
        };
        for apple in self.apples().iter().filter(|a| !a.eaten()) {
            canvas.draw_cell(apple.pos(), consts::APPLE_SYMBOL, consts::APPLE_STYLE);
        }
        for p in self.snake_body() {
            canvas.draw_cell(p, consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        }

        let notice = if self.paused() {
            Some(Notice::Paused)
        } else if self.game_over() {
            Some(Notice::GameOver)
        } else {
            None
        };
        if let Some(notice) = notice {
            notice.render(center_rect(field_area, notice.size()), buf);
        }
    }
}

/// A `Buffer` addressed in board coordinates
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    /// The board position drawn at the upper-left corner of `area`
    origin: Position,
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_sub(self.origin.x)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = pos
            .y
            .checked_sub(self.origin.y)
            .and_then(|y| self.area.y.checked_add(y))
        else {
            return;
        };
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Playing,
    Paused,
    GameOver,
    /// The player has exited.  No further intents are honored.
    Finished,
}
