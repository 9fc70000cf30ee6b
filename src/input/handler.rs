use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::swipe::SwipeTracker;
use crate::game::Direction;

/// What the play loop should do in response to an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Translates terminal events into [`KeyAction`]s. Keyboard and pointer
/// drags end up on the same `Turn` path.
#[derive(Debug, Default)]
pub struct InputHandler {
    swipe: SwipeTracker,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: Event) -> KeyAction {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => KeyAction::None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = direction_for_key(key.code) {
            return KeyAction::Turn(direction);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }

    /// A press starts a gesture, the first drag resolves it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> KeyAction {
        let (x, y) = (i32::from(mouse.column), i32::from(mouse.row));

        match mouse.kind {
            MouseEventKind::Down(_) => {
                self.swipe.start(x, y);
                KeyAction::None
            }
            MouseEventKind::Drag(_) => self
                .swipe
                .finish(x, y)
                .map_or(KeyAction::None, KeyAction::Turn),
            MouseEventKind::Up(_) => {
                self.swipe.cancel();
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    /// Forget any half-finished gesture
    pub fn reset(&mut self) {
        self.swipe.cancel();
    }
}

/// Arrow keys and WASD, either case
fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_arrow_and_wasd_keys() {
        let handler = InputHandler::new();
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Char('D'), Direction::Right),
        ];

        for (code, direction) in cases {
            assert_eq!(
                handler.handle_key_event(press(code)),
                KeyAction::Turn(direction)
            );
        }
    }

    #[test]
    fn test_quit_and_restart_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            handler.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key_event(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            KeyAction::Restart
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut handler = InputHandler::new();
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(handler.handle_event(Event::Key(release)), KeyAction::None);
        assert_eq!(
            handler.handle_event(Event::Key(press(KeyCode::Up))),
            KeyAction::Turn(Direction::Up)
        );
    }

    #[test]
    fn test_drag_turns_snake() {
        let mut handler = InputHandler::new();

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 40, 10);
        assert_eq!(handler.handle_event(down), KeyAction::None);

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 30, 11);
        assert_eq!(handler.handle_event(drag), KeyAction::Turn(Direction::Left));

        // The gesture was consumed by the first drag
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 20, 11);
        assert_eq!(handler.handle_event(drag), KeyAction::None);
    }

    #[test]
    fn test_reset_drops_pending_gesture() {
        let mut handler = InputHandler::new();
        handler.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        handler.reset();

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 10, 20);
        assert_eq!(handler.handle_event(drag), KeyAction::None);
    }
}
