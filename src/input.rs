//! Keyboard input
//!
//! A small action-based layer over macroquad's key polling, so gameplay and
//! menu code ask about intent ("steer left") instead of key codes.

use macroquad::prelude::{is_key_pressed, KeyCode};

/// Everything the player can ask for, in game or in the menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // In-game
    SteerLeft,
    SteerRight,
    Horn,
    Quit,

    // Menus
    Confirm,
    CarPrev,
    CarNext,
    LevelPrev,
    LevelNext,
    VolumeDown,
    VolumeUp,
}

/// Edge-triggered check: was this action's key pressed this frame?
pub fn action_pressed(action: Action) -> bool {
    match action {
        Action::SteerLeft | Action::CarPrev => is_key_pressed(KeyCode::Left),
        Action::SteerRight | Action::CarNext => is_key_pressed(KeyCode::Right),
        Action::Horn => is_key_pressed(KeyCode::G),
        Action::Quit => is_key_pressed(KeyCode::Escape),
        Action::Confirm => is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space),
        Action::LevelPrev => is_key_pressed(KeyCode::Up),
        Action::LevelNext => is_key_pressed(KeyCode::Down),
        Action::VolumeDown => is_key_pressed(KeyCode::Minus),
        Action::VolumeUp => is_key_pressed(KeyCode::Equal),
    }
}
