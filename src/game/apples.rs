use super::board::Board;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;

/// A single piece of food.  Apples are never removed from play; once eaten,
/// they are moved elsewhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Apple {
    pos: Position,
    eaten: bool,
}

impl Apple {
    pub(crate) fn new(pos: Position) -> Apple {
        Apple { pos, eaten: false }
    }

    pub(crate) fn pos(&self) -> Position {
        self.pos
    }

    pub(crate) fn eaten(&self) -> bool {
        self.eaten
    }

    /// If the apple has been eaten, move it to a random cell of the board's
    /// interior other than the one it currently occupies and mark it uneaten.
    ///
    /// Candidates are drawn from the whole board and redrawn until one is
    /// acceptable.  The board guarantees at least two interior cells, so
    /// this terminates.
    fn respawn<R: Rng>(&mut self, rng: &mut R, board: &Board) {
        if !self.eaten {
            return;
        }
        loop {
            let candidate = board.random_cell(rng);
            if candidate != self.pos && board.is_inside(candidate) {
                self.pos = candidate;
                break;
            }
        }
        self.eaten = false;
    }
}

/// All of the apples in a match
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Apples(Vec<Apple>);

impl Apples {
    /// Place `qty` apples on distinct cells of the board's interior.  If the
    /// interior has fewer than `qty` cells, one apple is placed on each.
    pub(crate) fn spawn<R: Rng>(rng: &mut R, board: &Board, qty: usize) -> Apples {
        Apples(
            board
                .positions()
                .choose_multiple(rng, qty)
                .into_iter()
                .map(Apple::new)
                .collect(),
        )
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Apple> {
        self.0.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Mark every apple at `pos` as eaten and return how many there were
    pub(crate) fn eat_at(&mut self, pos: Position) -> usize {
        let mut qty = 0;
        for apple in self.0.iter_mut().filter(|a| a.pos == pos) {
            apple.eaten = true;
            qty += 1;
        }
        qty
    }

    pub(crate) fn eaten_qty(&self) -> usize {
        self.0.iter().filter(|a| a.eaten).count()
    }

    /// Move every eaten apple to a fresh cell
    pub(crate) fn respawn_eaten<R: Rng>(&mut self, rng: &mut R, board: &Board) {
        for apple in &mut self.0 {
            apple.respawn(rng, board);
        }
    }
}

impl From<Vec<Apple>> for Apples {
    fn from(apples: Vec<Apple>) -> Apples {
        Apples(apples)
    }
}

impl<'a> IntoIterator for &'a Apples {
    type Item = &'a Apple;
    type IntoIter = std::slice::Iter<'a, Apple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
