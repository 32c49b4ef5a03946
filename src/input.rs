use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::world::{GameState, TickInput};

/// Semantic game actions triggered by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    /// Energy blast
    Special,
    /// Start or restart, depending on the current screen
    Confirm,
    Quit,
}

/// Tracks keys that can be held down for continuous input.
#[derive(Debug, Default)]
struct KeyState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    fire: bool,
}

/// Polls crossterm events and translates raw key presses/releases into game
/// actions for the current screen.
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Polls all pending input events without blocking. Call once per frame
    /// before [`InputManager::get_actions`].
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // Resize is picked up from the terminal size each frame
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: GameState) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, game_state),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: GameState) {
        // Quit works on every screen
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match game_state {
            GameState::Title | GameState::GameOver => {
                if key_event.code == KeyCode::Enter {
                    self.oneshot_actions.push(InputAction::Confirm);
                }
            }
            GameState::Countdown => {
                // Nothing to do but wait
            }
            GameState::Playing => match key_event.code {
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    self.key_state.up = true;
                    self.key_state.down = false;
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    self.key_state.down = true;
                    self.key_state.up = false;
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.key_state.left = true;
                    self.key_state.right = false;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.key_state.right = true;
                    self.key_state.left = false;
                }
                KeyCode::Char(' ') => {
                    self.key_state.fire = true;
                }
                KeyCode::Char('x') | KeyCode::Char('X') => {
                    self.oneshot_actions.push(InputAction::Special);
                }
                _ => {}
            },
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.up = false;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                self.key_state.down = false;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = false;
            }
            _ => {}
        }
    }

    /// All actions for this frame, one-shot first then held keys.
    pub fn get_actions(&self, game_state: GameState) -> Vec<InputAction> {
        let mut actions = Vec::new();
        actions.extend_from_slice(&self.oneshot_actions);

        if game_state == GameState::Playing {
            if self.key_state.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right {
                actions.push(InputAction::MoveRight);
            }
            if self.key_state.up {
                actions.push(InputAction::MoveUp);
            }
            if self.key_state.down {
                actions.push(InputAction::MoveDown);
            }
            if self.key_state.fire {
                actions.push(InputAction::Fire);
            }
        }

        actions
    }
}

/// Folds a frame's actions into the input sample the world consumes.
/// Returns `None` on a quit request.
pub fn fold_actions(actions: &[InputAction]) -> Option<TickInput> {
    let mut input = TickInput::default();
    for action in actions {
        match action {
            InputAction::MoveLeft => input.left = true,
            InputAction::MoveRight => input.right = true,
            InputAction::MoveUp => input.up = true,
            InputAction::MoveDown => input.down = true,
            InputAction::Fire => input.fire = true,
            InputAction::Special => input.special = true,
            InputAction::Confirm => input.confirm = true,
            InputAction::Quit => return None,
        }
    }
    Some(input)
}
