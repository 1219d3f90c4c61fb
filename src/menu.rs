//! Menu screens
//!
//! Keyboard-driven glue between runs: car and level selection, volume, best
//! score display, and the game-over card. Returns intents to the main loop
//! rather than starting sessions itself.

use macroquad::prelude::*;

use crate::app::AppState;
use crate::input::{action_pressed, Action};

/// What the menu wants the main loop to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    None,
    StartGame,
}

/// Handle menu-screen input. Car cycles with Left/Right, level with Up/Down,
/// volume with -/=, Enter starts.
pub fn update_menu(app: &mut AppState) -> MenuIntent {
    if action_pressed(Action::CarNext) {
        app.selected_car = app.selected_car.next();
    }
    if action_pressed(Action::CarPrev) {
        app.selected_car = app.selected_car.prev();
    }
    if action_pressed(Action::LevelNext) {
        app.selected_level = app.selected_level.next();
    }
    if action_pressed(Action::LevelPrev) {
        app.selected_level = app.selected_level.prev();
    }
    if action_pressed(Action::VolumeDown) || action_pressed(Action::VolumeUp) {
        let step = if action_pressed(Action::VolumeUp) { 0.1 } else { -0.1 };
        app.volume = (app.volume + step).clamp(0.0, 1.0);
        if let Some(sounds) = app.sounds.as_mut() {
            sounds.set_volume(app.volume);
        }
    }
    if action_pressed(Action::Confirm) {
        return MenuIntent::StartGame;
    }
    MenuIntent::None
}

pub fn draw_menu(app: &AppState) {
    clear_background(Color::new(0.07, 0.08, 0.12, 1.0));

    let cx = screen_width() / 2.0;
    centered("HOTLANE", cx, 120.0, 96.0, Color::new(1.0, 0.55, 0.15, 1.0));
    centered("a lane-dodging arcade driver", cx, 160.0, 28.0, GRAY);

    centered(
        &format!("car   < {} >", app.selected_car.profile().name),
        cx,
        260.0,
        36.0,
        WHITE,
    );
    centered(
        &format!("level   {} {} {}", "^", app.selected_level.profile().name, "v"),
        cx,
        310.0,
        36.0,
        WHITE,
    );
    centered(
        &format!("volume  {:.0}%  (- / =)", app.volume * 100.0),
        cx,
        360.0,
        28.0,
        GRAY,
    );

    centered(&format!("best score  {}", app.store.best()), cx, 430.0, 32.0, GOLD);
    centered("press enter to drive", cx, 500.0, 32.0, WHITE);

    if let Some(error) = &app.load_error {
        centered(error, cx, screen_height() - 40.0, 24.0, RED);
    }
}

/// Game-over card input: Enter (or Escape) returns to the menu.
pub fn update_game_over(_app: &mut AppState) -> bool {
    action_pressed(Action::Confirm) || action_pressed(Action::Quit)
}

pub fn draw_game_over(app: &AppState) {
    clear_background(Color::new(0.10, 0.05, 0.06, 1.0));

    let cx = screen_width() / 2.0;
    centered("WRECKED", cx, 160.0, 96.0, RED);
    centered(&format!("score  {}", app.last_score), cx, 280.0, 48.0, WHITE);
    if app.new_best {
        centered("new best!", cx, 330.0, 36.0, GOLD);
    } else {
        centered(&format!("best  {}", app.store.best()), cx, 330.0, 32.0, GRAY);
    }
    centered("press enter for the menu", cx, 430.0, 30.0, WHITE);
}

fn centered(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}
