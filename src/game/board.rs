use super::direction::Direction;
use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Rect, Size};
use thiserror::Error;

/// The rectangle that a match is played in, including its border and the HUD
/// band along the top.
///
/// The *playable interior* consists of the cells strictly between
/// [`left()`](Board::left) & [`right()`](Board::right) and strictly between
/// [`top()`](Board::top) & [`bottom()`](Board::bottom).  Cells on those
/// edges count as wall.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    upper_left: Position,
    lower_right: Position,
}

impl Board {
    /// Create a board spanning `upper_left` to `lower_right`, inclusive.  The
    /// lower-right corner is first clamped so that the board is no larger
    /// than [`MAX_LOWER_RIGHT`][consts::MAX_LOWER_RIGHT] allows.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the playable interior would contain fewer than two
    /// cells or if [`center()`](Board::center) would not lie within it.
    pub(crate) fn new(upper_left: Position, lower_right: Position) -> Result<Board, BoardError> {
        let lower_right = Position {
            x: lower_right
                .x
                .min(upper_left.x.saturating_add(consts::MAX_LOWER_RIGHT.x)),
            y: lower_right
                .y
                .min(upper_left.y.saturating_add(consts::MAX_LOWER_RIGHT.y)),
        };
        let board = Board {
            upper_left,
            lower_right,
        };
        if lower_right.x < upper_left.x
            || lower_right.y < upper_left.y
            || board.interior_cells() < 2
            || !board.is_inside(board.center())
        {
            return Err(BoardError::Degenerate {
                upper_left,
                lower_right,
            });
        }
        Ok(board)
    }

    /// Create the largest board with its upper-left corner at the origin that
    /// fits in a terminal of the given size
    pub(crate) fn for_terminal(size: Size) -> Result<Board, BoardError> {
        Board::new(
            Position::ORIGIN,
            Position {
                x: size.width.saturating_sub(1),
                y: size.height.saturating_sub(1),
            },
        )
    }

    pub(crate) fn upper_left(&self) -> Position {
        self.upper_left
    }

    pub(crate) fn lower_right(&self) -> Position {
        self.lower_right
    }

    pub(crate) fn left(&self) -> u16 {
        self.upper_left.x.saturating_add(consts::BORDER_WIDTH)
    }

    pub(crate) fn right(&self) -> u16 {
        self.lower_right.x.saturating_sub(consts::BORDER_WIDTH)
    }

    /// The top edge lies below the top border, the HUD band, and the
    /// separator line beneath the HUD.
    pub(crate) fn top(&self) -> u16 {
        self.upper_left
            .y
            .saturating_add(consts::BORDER_WIDTH)
            .saturating_add(consts::HUD_HEIGHT)
            .saturating_add(consts::BORDER_WIDTH)
    }

    pub(crate) fn bottom(&self) -> u16 {
        self.lower_right.y.saturating_sub(consts::BORDER_WIDTH)
    }

    pub(crate) fn width(&self) -> u16 {
        self.lower_right.x - self.upper_left.x + 1
    }

    pub(crate) fn height(&self) -> u16 {
        self.lower_right.y - self.upper_left.y + 1
    }

    pub(crate) fn size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// The middle of the board in board-local coordinates.  Snakes respawn
    /// here after a crash.
    pub(crate) fn center(&self) -> Position {
        Position {
            x: self.width() / 2,
            y: self.height() / 2,
        }
    }

    pub(crate) fn is_inside(&self, pos: Position) -> bool {
        self.left() < pos.x && pos.x < self.right() && self.top() < pos.y && pos.y < self.bottom()
    }

    /// Return the cell one step from `head` in direction `dir`, or `None` if
    /// that cell is on or beyond the edge in the direction of travel.
    pub(super) fn clears(&self, head: Position, dir: Direction) -> Option<Position> {
        let next = dir.advance(head)?;
        let clear = match dir {
            Direction::Up => next.y > self.top(),
            Direction::Down => next.y < self.bottom(),
            Direction::Left => next.x > self.left(),
            Direction::Right => next.x < self.right(),
        };
        clear.then_some(next)
    }

    /// Iterate over every cell of the playable interior, row by row
    pub(crate) fn positions(&self) -> impl Iterator<Item = Position> {
        let interior = Rect {
            x: self.left().saturating_add(1),
            y: self.top().saturating_add(1),
            width: self.interior_width(),
            height: self.interior_height(),
        };
        interior.positions()
    }

    /// Pick a cell uniformly at random from anywhere on the board, border and
    /// HUD included
    pub(super) fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        Position {
            x: rng.random_range(self.upper_left.x..=self.lower_right.x),
            y: rng.random_range(self.upper_left.y..=self.lower_right.y),
        }
    }

    fn interior_width(&self) -> u16 {
        self.right().saturating_sub(self.left()).saturating_sub(1)
    }

    fn interior_height(&self) -> u16 {
        self.bottom().saturating_sub(self.top()).saturating_sub(1)
    }

    fn interior_cells(&self) -> usize {
        usize::from(self.interior_width()) * usize::from(self.interior_height())
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardError {
    #[error(
        "board from ({}, {}) to ({}, {}) leaves too little room to play",
        .upper_left.x,
        .upper_left.y,
        .lower_right.x,
        .lower_right.y
    )]
    Degenerate {
        upper_left: Position,
        lower_right: Position,
    },
}
