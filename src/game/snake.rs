use super::apples::Apples;
use super::board::Board;
use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;
use std::time::Duration;

/// The player's snake.
///
/// The body is stored tail-first, so the head is always the last element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, from tail to head.  Never empty.
    body: VecDeque<Position>,

    /// The heading that the next advance will use
    direction: Direction,

    /// The heading used by the most recent advance
    last_step: Direction,

    /// Time remaining until the next advance
    move_timer: Duration,

    /// Time between advances; shrinks as the snake grows
    move_delay: Duration,

    /// Length of the body after a reset
    starting_len: usize,

    /// Length of the body as of the last speed-up (or reset)
    last_len: usize,
}

/// What happened during a call to [`Snake::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Step {
    /// The move timer has not yet run out
    Waiting,

    /// The snake is facing a wall and stayed where it was
    Blocked,

    /// The snake advanced one cell and ate `eaten` apples in doing so
    Moved { eaten: usize },
}

impl Snake {
    /// Create a snake of up to `starting_len` cells laid out horizontally
    /// with its head at `head`, facing right
    pub(super) fn new(board: &Board, head: Position, starting_len: usize) -> Snake {
        let mut snake = Snake {
            body: VecDeque::new(),
            direction: Direction::Right,
            last_step: Direction::Right,
            move_timer: consts::DEFAULT_MOVE_DELAY,
            move_delay: consts::DEFAULT_MOVE_DELAY,
            starting_len: starting_len.max(1),
            last_len: 1,
        };
        snake.reset_to(board, head);
        snake
    }

    /// Put the snake back to its starting length, facing right with its head
    /// at `head`, and restore the default speed.
    ///
    /// The body trails off to the left of the head and is cut short where it
    /// would leave the board's playable interior.
    pub(super) fn reset_to(&mut self, board: &Board, head: Position) {
        let mut body = std::iter::successors(Some(head), |&p| {
            Direction::Left.advance(p).filter(|&q| board.is_inside(q))
        })
        .take(self.starting_len)
        .collect::<VecDeque<_>>();
        body.make_contiguous().reverse();
        self.body = body;
        self.direction = Direction::Right;
        self.last_step = Direction::Right;
        self.move_delay = consts::DEFAULT_MOVE_DELAY;
        self.move_timer = self.move_delay;
        self.last_len = self.body.len();
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self.body.back().expect("snake body should never be empty")
    }

    /// Return the cells of the snake's body, from tail to head
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    pub(super) fn move_delay(&self) -> Duration {
        self.move_delay
    }

    /// Change the snake's heading to `direction` for its next advance.
    ///
    /// Turning to face the opposite of the current heading is silently
    /// ignored, as is turning to face the opposite of the heading of the last
    /// advance (which would otherwise allow a reversal via two quick turns
    /// between advances).
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() && direction != self.last_step.reverse() {
            self.direction = direction;
        }
    }

    /// Called once per frame with the time elapsed since the previous frame.
    /// Once enough time has accumulated, the snake tries to advance one cell,
    /// eating any apples at the new head.  If the cell ahead is wall, the
    /// snake stays put until it is turned.
    pub(super) fn tick(&mut self, board: &Board, delta: Duration, apples: &mut Apples) -> Step {
        self.move_timer = self.move_timer.saturating_sub(delta);
        if !self.move_timer.is_zero() {
            return Step::Waiting;
        }
        self.move_timer = self.move_delay;
        let Some(next) = board.clears(self.head(), self.direction) else {
            return Step::Blocked;
        };
        self.body.push_back(next);
        self.last_step = self.direction;
        let eaten = self.eat(apples);
        if eaten == 0 {
            let _ = self.body.pop_front();
        } else {
            self.speed_up_if_doubled();
        }
        Step::Moved { eaten }
    }

    /// Mark any apples at the snake's head as eaten and return how many
    /// there were
    fn eat(&self, apples: &mut Apples) -> usize {
        apples.eat_at(self.head())
    }

    fn speed_up_if_doubled(&mut self) {
        let len = self.body.len();
        if len >= self.last_len.saturating_mul(2) {
            self.move_delay =
                self.move_delay * consts::SPEEDUP_NUMERATOR / consts::SPEEDUP_DENOMINATOR;
            self.last_len = len;
            log::debug!(
                "Snake reached length {len}; move delay is now {:?}",
                self.move_delay
            );
        }
    }

    /// Test whether the head occupies the same cell as some other part of the
    /// body.  The cell just behind the head is not checked, as the head can
    /// never legitimately coincide with it.
    pub(super) fn has_crashed(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .take(self.body.len().saturating_sub(2))
            .any(|&p| p == head)
    }
}
