use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forwarded to the engine with the next step
    Game(Action),
    /// Start from the menu
    Confirm,
    Restart,
    MainMenu,
    CycleScheme,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::Game(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::Game(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::Game(Action::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(Direction::Up.into()),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Game(Direction::Down.into()),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Game(Direction::Left.into()),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Game(Direction::Right.into()),

            KeyCode::Char(' ') => KeyAction::Game(Action::Boost),
            KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Game(Action::TogglePause),

            // Controls
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::MainMenu,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::CycleScheme,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, code: KeyCode) -> KeyAction {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Up),
            KeyAction::Game(Action::Move(Direction::Up))
        );
        assert_eq!(
            press(&handler, KeyCode::Down),
            KeyAction::Game(Action::Move(Direction::Down))
        );
        assert_eq!(
            press(&handler, KeyCode::Left),
            KeyAction::Game(Action::Move(Direction::Left))
        );
        assert_eq!(
            press(&handler, KeyCode::Right),
            KeyAction::Game(Action::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            press(&handler, KeyCode::Char('w')),
            KeyAction::Game(Action::Move(Direction::Up))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('a')),
            KeyAction::Game(Action::Move(Direction::Left))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('s')),
            KeyAction::Game(Action::Move(Direction::Down))
        );
        assert_eq!(
            press(&handler, KeyCode::Char('d')),
            KeyAction::Game(Action::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Game(Action::Move(Direction::Up))
        );
    }

    #[test]
    fn test_boost_and_pause() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char(' ')), KeyAction::Game(Action::Boost));
        assert_eq!(
            press(&handler, KeyCode::Char('p')),
            KeyAction::Game(Action::TogglePause)
        );
        assert_eq!(
            press(&handler, KeyCode::Char('P')),
            KeyAction::Game(Action::TogglePause)
        );
    }

    #[test]
    fn test_menu_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Enter), KeyAction::Confirm);
        assert_eq!(press(&handler, KeyCode::Char('r')), KeyAction::Restart);
        assert_eq!(press(&handler, KeyCode::Char('R')), KeyAction::Restart);
        assert_eq!(press(&handler, KeyCode::Char('m')), KeyAction::MainMenu);
        assert_eq!(press(&handler, KeyCode::Char('c')), KeyAction::CycleScheme);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(&handler, KeyCode::Esc), KeyAction::Quit);

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, KeyCode::Char('x')), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
