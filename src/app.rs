use crate::command::{Intent, IntentQueue};
use crate::consts;
use crate::game::Game;
use crossterm::event::{poll, read};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The fixed-rate frame loop driving a [`Game`]
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    queue: IntentQueue,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            queue: IntentQueue::new(),
        }
    }

    /// Draw, gather input, and update the game once per frame until the
    /// player exits
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut last_frame = Instant::now();
        while !self.game.finished() {
            let deadline = Instant::now() + consts::FRAME_PERIOD;
            terminal.draw(|frame| self.game.draw(frame))?;
            self.process_input(deadline)?;
            let now = Instant::now();
            self.step(now.saturating_duration_since(last_frame));
            last_frame = now;
        }
        log::info!("Exiting with a score of {}", self.game.score());
        Ok(())
    }

    /// Queue up intents from terminal events until `deadline` passes
    fn process_input(&mut self, deadline: Instant) -> io::Result<()> {
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !poll(wait)? {
                return Ok(());
            }
            if let Some(intent) = Intent::from_event(&read()?) {
                self.queue.push(intent);
            }
            if wait.is_zero() {
                return Ok(());
            }
        }
    }

    /// Apply at most one pending intent, then advance the game by `delta`
    fn step(&mut self, delta: Duration) {
        if let Some(intent) = self.queue.pop() {
            log::trace!("Applying intent {intent:?}");
            self.game.handle_intent(intent);
        }
        self.game.update(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::game::Board;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::layout::Position;

    fn new_app() -> App<ChaCha12Rng> {
        let board = Board::new(Position::ORIGIN, Position::new(39, 39)).unwrap();
        App::new(Game::new_with_rng(
            Config::default(),
            board,
            ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF),
        ))
    }

    fn head(app: &App<ChaCha12Rng>) -> Option<Position> {
        app.game.snake_body().last()
    }

    #[test]
    fn newest_intent_applied() {
        let mut app = new_app();
        app.queue.push(Intent::Pause);
        app.queue.push(Intent::MoveUp);
        app.step(consts::DEFAULT_MOVE_DELAY);
        assert!(!app.game.paused());
        assert_eq!(head(&app), Some(Position::new(20, 19)));
    }

    #[test]
    fn one_intent_per_step() {
        let mut app = new_app();
        app.queue.push(Intent::Pause);
        app.step(Duration::ZERO);
        assert!(app.game.paused());
        app.step(Duration::ZERO);
        assert!(app.game.paused());
        assert_eq!(app.queue.pop(), None);
    }

    #[test]
    fn pending_exit_wins() {
        let mut app = new_app();
        app.queue.push(Intent::Exit);
        app.queue.push(Intent::Pause);
        app.step(Duration::ZERO);
        assert!(app.game.finished());
        assert!(!app.game.paused());
    }

    #[test]
    fn frames_accumulate_into_moves() {
        let mut app = new_app();
        for _ in 0..60 {
            app.step(consts::FRAME_PERIOD);
        }
        assert_eq!(head(&app), Some(Position::new(24, 20)));
    }

    #[test]
    fn fifteen_frames_make_one_move() {
        let mut app = new_app();
        for _ in 0..14 {
            app.step(consts::FRAME_PERIOD);
        }
        assert_eq!(head(&app), Some(Position::new(20, 20)));
        app.step(consts::FRAME_PERIOD);
        assert_eq!(head(&app), Some(Position::new(21, 20)));
    }
}
