use ratatui::layout::Position;

/// A heading of the snake
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the position one cell away from `pos` in this direction, or
    /// `None` if that would leave the coordinate space.
    pub(super) fn advance(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Down => y = y.checked_add(1)?,
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Right => x = x.checked_add(1)?,
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
