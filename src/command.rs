use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// An abstract request from the player
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Pause,
    Start,
    Exit,
}

impl Intent {
    pub(crate) fn from_event(event: &Event) -> Option<Intent> {
        Intent::from_key_event(event.as_key_press_event()?)
    }

    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Intent> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Intent::Exit),
            (m, _) if !normal_modifiers.contains(m) => None,
            (_, KeyCode::Char('w' | 'W' | 'k' | 'K') | KeyCode::Up) => Some(Intent::MoveUp),
            (_, KeyCode::Char('s' | 'S' | 'j' | 'J') | KeyCode::Down) => Some(Intent::MoveDown),
            (_, KeyCode::Char('a' | 'A' | 'h' | 'H') | KeyCode::Left) => Some(Intent::MoveLeft),
            (_, KeyCode::Char('d' | 'D' | 'l' | 'L') | KeyCode::Right) => Some(Intent::MoveRight),
            (_, KeyCode::Char(' ' | 'p' | 'P')) => Some(Intent::Pause),
            (_, KeyCode::Enter) => Some(Intent::Start),
            (_, KeyCode::Esc | KeyCode::Char('q' | 'Q')) => Some(Intent::Exit),
            _ => None,
        }
    }
}

/// A one-slot holding area for intents between frames.
///
/// Pushing onto a full queue replaces the pending intent, so the most recent
/// keypress wins, except that a pending [`Intent::Exit`] is never replaced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct IntentQueue(Option<Intent>);

impl IntentQueue {
    pub(crate) fn new() -> IntentQueue {
        IntentQueue(None)
    }

    pub(crate) fn push(&mut self, intent: Intent) {
        if self.0 != Some(Intent::Exit) {
            self.0 = Some(intent);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Intent> {
        self.0.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Intent::MoveUp))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Intent::MoveUp))]
    #[case(KeyCode::Char('W'), KeyModifiers::SHIFT, Some(Intent::MoveUp))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Intent::MoveUp))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Intent::MoveDown))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Intent::MoveDown))]
    #[case(KeyCode::Char('j'), KeyModifiers::NONE, Some(Intent::MoveDown))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Intent::MoveLeft))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Intent::MoveLeft))]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, Some(Intent::MoveLeft))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Intent::MoveRight))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Intent::MoveRight))]
    #[case(KeyCode::Char('l'), KeyModifiers::NONE, Some(Intent::MoveRight))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Intent::Pause))]
    #[case(KeyCode::Char('p'), KeyModifiers::NONE, Some(Intent::Pause))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Intent::Start))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Intent::Exit))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Intent::Exit))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Intent::Exit))]
    #[case(KeyCode::Char('x'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('w'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Char('d'), KeyModifiers::ALT, None)]
    #[case(KeyCode::Tab, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] intent: Option<Intent>,
    ) {
        assert_eq!(
            Intent::from_key_event(KeyEvent::new(code, modifiers)),
            intent
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(Intent::from_event(&ev), None);
    }

    #[test]
    fn key_press_is_mapped() {
        let ev = Event::Key(KeyCode::Left.into());
        assert_eq!(Intent::from_event(&ev), Some(Intent::MoveLeft));
    }

    #[test]
    fn non_key_event_is_ignored() {
        assert_eq!(Intent::from_event(&Event::FocusLost), None);
    }

    mod queue {
        use super::*;

        #[test]
        fn empty() {
            let mut q = IntentQueue::new();
            assert_eq!(q.pop(), None);
        }

        #[test]
        fn newest_wins() {
            let mut q = IntentQueue::new();
            q.push(Intent::MoveUp);
            q.push(Intent::MoveLeft);
            assert_eq!(q.pop(), Some(Intent::MoveLeft));
            assert_eq!(q.pop(), None);
        }

        #[test]
        fn exit_is_not_overwritten() {
            let mut q = IntentQueue::new();
            q.push(Intent::Exit);
            q.push(Intent::MoveDown);
            q.push(Intent::Pause);
            assert_eq!(q.pop(), Some(Intent::Exit));
        }

        #[test]
        fn exit_overwrites() {
            let mut q = IntentQueue::new();
            q.push(Intent::Start);
            q.push(Intent::Exit);
            assert_eq!(q.pop(), Some(Intent::Exit));
        }
    }
}
