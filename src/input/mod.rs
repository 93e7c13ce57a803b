use macroquad::prelude::*;

use crate::application::{Command, GameState};
use crate::domain::Direction;
use crate::ui::Button;

/// Keys the game reacts to, checked in this order each frame
const KEY_BINDINGS: [(KeyCode, Command); 5] = [
    (KeyCode::Left, Command::Move(Direction::Left)),
    (KeyCode::Right, Command::Move(Direction::Right)),
    (KeyCode::Up, Command::Move(Direction::Up)),
    (KeyCode::Down, Command::Move(Direction::Down)),
    (KeyCode::R, Command::Reset),
];

/// Commands for every bound key reported as pressed, in binding order
pub fn pressed_commands(is_pressed: impl Fn(KeyCode) -> bool) -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Apply one command per key pressed this frame
pub fn process_keyboard_input(state: GameState) -> GameState {
    pressed_commands(is_key_pressed)
        .into_iter()
        .fold(state, |s, command| s.apply(command))
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.apply(Command::Reset),
                _ => s,
            }
        })
}
