use std::sync::{Mutex, MutexGuard};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Translates a raw key event into a game input.
///
/// Keys outside the arrow/WASD/restart/quit vocabulary produce `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Single-slot pending-direction exchange between input and tick contexts.
///
/// The pending slot is overwrite-on-write: the last valid request before a
/// tick wins. `request` ignores reversals of the current direction of travel,
/// so the snake can never fold back into its second segment. The latch is the
/// only value shared with the input context; a tick always reads one
/// consistent direction, either the previous one or the newest request.
#[derive(Debug)]
pub struct DirectionLatch {
    state: Mutex<LatchState>,
}

#[derive(Debug, Clone, Copy)]
struct LatchState {
    current: Direction,
    pending: Option<Direction>,
}

impl DirectionLatch {
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            state: Mutex::new(LatchState {
                current: initial,
                pending: None,
            }),
        }
    }

    /// Records `requested` for the next tick unless it reverses the current
    /// direction of travel.
    pub fn request(&self, requested: Direction) {
        let mut state = self.lock();
        if requested != state.current.opposite() {
            state.pending = Some(requested);
        }
    }

    /// Promotes the pending direction (if any) and returns the direction the
    /// next move must use. Called once per tick.
    pub fn commit(&self) -> Direction {
        let mut state = self.lock();
        if let Some(next) = state.pending.take() {
            state.current = next;
        }
        state.current
    }

    /// Returns the current direction of travel without promoting anything.
    #[must_use]
    pub fn current(&self) -> Direction {
        self.lock().current
    }

    /// Re-arms the latch for a new game.
    pub fn reset(&self, direction: Direction) {
        let mut state = self.lock();
        state.current = direction;
        state.pending = None;
    }

    fn lock(&self) -> MutexGuard<'_, LatchState> {
        self.state.lock().expect("direction latch lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{map_key, Direction, DirectionLatch, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn latch_ignores_reversal_of_current_travel() {
        let latch = DirectionLatch::new(Direction::Right);

        latch.request(Direction::Left);

        assert_eq!(latch.commit(), Direction::Right);
    }

    #[test]
    fn latch_last_valid_request_wins() {
        let latch = DirectionLatch::new(Direction::Right);

        latch.request(Direction::Up);
        latch.request(Direction::Down);

        assert_eq!(latch.commit(), Direction::Down);
    }

    #[test]
    fn latch_keeps_accepted_request_when_reversal_follows() {
        let latch = DirectionLatch::new(Direction::Right);

        latch.request(Direction::Up);
        latch.request(Direction::Left);

        assert_eq!(latch.commit(), Direction::Up);
    }

    #[test]
    fn latch_commit_updates_direction_of_travel() {
        let latch = DirectionLatch::new(Direction::Right);

        latch.request(Direction::Up);
        assert_eq!(latch.current(), Direction::Right);
        assert_eq!(latch.commit(), Direction::Up);
        assert_eq!(latch.current(), Direction::Up);

        // With Up committed, Down is now the rejected reversal.
        latch.request(Direction::Down);
        assert_eq!(latch.commit(), Direction::Up);
    }

    #[test]
    fn latch_reset_clears_pending_request() {
        let latch = DirectionLatch::new(Direction::Right);

        latch.request(Direction::Up);
        latch.reset(Direction::Right);

        assert_eq!(latch.commit(), Direction::Right);
    }

    #[test]
    fn latch_accepts_requests_from_another_thread() {
        let latch = Arc::new(DirectionLatch::new(Direction::Right));
        let writer = Arc::clone(&latch);

        thread::spawn(move || writer.request(Direction::Down))
            .join()
            .expect("input thread should not panic");

        assert_eq!(latch.commit(), Direction::Down);
    }

    #[test]
    fn key_mapping_covers_arrows_wasd_and_controls() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('S'))),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(map_key(press(KeyCode::Enter)), Some(GameInput::Restart));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn key_mapping_ignores_unbound_keys() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
        assert_eq!(map_key(press(KeyCode::F(1))), None);
    }
}
