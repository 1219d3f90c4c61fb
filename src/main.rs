//! HOTLANE: a lane-dodging arcade driver
//!
//! Steer between three lanes of a highway painted on a rotating drum while
//! obstacle cars crest the horizon at an ever-tightening interval. Score
//! accrues per spawn tick; one touch ends the run.

mod app;
mod assets;
mod audio;
mod game;
mod input;
mod menu;
mod profile;
mod scene;
mod storage;

use macroquad::prelude::*;

use app::{AppState, Screen};
use assets::CatalogError;
use audio::SoundBank;
use game::GameSession;
use menu::MenuIntent;

fn window_conf() -> Conf {
    Conf {
        window_title: "HOTLANE".to_string(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = AppState::new();

    loop {
        match app.screen {
            Screen::Menu => {
                if menu::update_menu(&mut app) == MenuIntent::StartGame {
                    start_session(&mut app).await;
                }
                if app.screen == Screen::Menu {
                    menu::draw_menu(&app);
                }
            }
            Screen::Playing => {
                if let (Some(session), Some(sounds)) =
                    (app.session.as_mut(), app.sounds.as_ref())
                {
                    session.frame(sounds);
                }
                if let Some(session) = app.session.as_ref() {
                    scene::draw_session(session, &app.catalog);
                    if session.is_stopped() {
                        finish_session(&mut app);
                    }
                } else {
                    // No live session to show; fall back to the menu.
                    app.screen = Screen::Menu;
                }
            }
            Screen::GameOver => {
                if menu::update_game_over(&mut app) {
                    app.screen = Screen::Menu;
                }
                menu::draw_game_over(&app);
            }
        }

        next_frame().await;
    }
}

/// Load anything missing, then move into a fresh running session. A failed
/// load keeps us on the menu with the error on display.
async fn start_session(app: &mut AppState) {
    app.load_error = None;
    draw_loading_frame();
    next_frame().await;

    match load_assets(app).await {
        Ok(()) => {
            let mut session = GameSession::new(app.selected_car, app.selected_level);
            if let Some(sounds) = app.sounds.as_ref() {
                session.begin(sounds);
            }
            println!(
                "session start: {} on {}",
                app.selected_car.profile().name,
                app.selected_level.profile().name
            );
            app.session = Some(session);
            app.screen = Screen::Playing;
        }
        Err(e) => {
            eprintln!("asset load failed: {}", e);
            app.load_error = Some(format!("could not load assets: {}", e));
        }
    }
}

/// All-or-first-failure join over everything the game needs.
async fn load_assets(app: &mut AppState) -> Result<(), CatalogError> {
    app.catalog.ensure_loaded().await?;
    if app.sounds.is_none() {
        app.sounds = Some(SoundBank::load(app.volume).await?);
    }
    Ok(())
}

/// The session just stopped: read the final score, update the stored best,
/// show the card.
fn finish_session(app: &mut AppState) {
    if let Some(session) = app.session.take() {
        app.last_score = session.score();
        app.new_best = app.store.record(app.last_score);
        println!(
            "session over ({:?}): score {}",
            session.stop_reason(),
            app.last_score
        );
    }
    app.screen = Screen::GameOver;
}

fn draw_loading_frame() {
    clear_background(BLACK);
    let text = "loading...";
    let dims = measure_text(text, None, 40, 1.0);
    draw_text(
        text,
        screen_width() / 2.0 - dims.width / 2.0,
        screen_height() / 2.0,
        40.0,
        WHITE,
    );
}
