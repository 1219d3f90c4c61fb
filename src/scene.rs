//! Scene rendering
//!
//! Composes one fixed scene: sky dome, rotating highway drum, hero car and
//! whatever obstacles are currently riding the drum, plus the score HUD.
//! The camera tracks the hero laterally and recomputes its aspect from the
//! window size every frame, so resizes need no explicit handling.

use std::f32::consts::PI;

use macroquad::prelude::*;

use crate::assets::AssetCatalog;
use crate::game::GameSession;
use crate::profile::DRUM_RADIUS;

/// Camera sits above the drum surface, behind the hero.
const CAMERA_HEIGHT: f32 = DRUM_RADIUS + 2.0;
const CAMERA_DEPTH: f32 = 32.0;

/// Sky dome radius; everything else lives well inside it.
const SKY_RADIUS: f32 = 800.0;

/// Draw the whole play-field for the current session state.
pub fn draw_session(session: &GameSession, catalog: &AssetCatalog) {
    let sim = session.simulation();
    let level = session.level.profile();
    let car = session.car.profile();

    clear_background(level.clear_color);

    set_camera(&Camera3D {
        position: vec3(sim.hero_x(), CAMERA_HEIGHT, CAMERA_DEPTH),
        target: vec3(sim.hero_x(), CAMERA_HEIGHT + 2.8, 0.0),
        up: vec3(0.0, 1.0, 0.0),
        ..Default::default()
    });

    // Sky dome centered on the viewer so it never parallaxes.
    draw_sphere(
        vec3(sim.hero_x(), DRUM_RADIUS, 0.0),
        SKY_RADIUS,
        catalog.sky(session.level),
        WHITE,
    );

    if let Some(drum) = catalog.drum() {
        drum.draw(Mat4::from_rotation_x(sim.rotation()), level.ambient);
    }

    if let Some(model) = catalog.car(session.car) {
        // Banking lean relative to the car's base heading; nose into the screen.
        let bank = sim.hero_heading() - car.base_rotation;
        let transform =
            Mat4::from_translation(sim.hero_position()) * Mat4::from_rotation_y(bank);
        model.draw(transform, level.ambient);

        // Obstacles reuse the roster car model and counter-rotate with the
        // drum so they stay upright, facing oncoming.
        if let Some(obstacle_model) = catalog.car(crate::profile::CarKind::GolfGti) {
            for view in sim.obstacles() {
                let transform = Mat4::from_translation(view.position)
                    * Mat4::from_rotation_x(view.rotation)
                    * Mat4::from_rotation_y(PI);
                obstacle_model.draw(transform, level.ambient);
            }
        }
    }

    set_default_camera();
    draw_hud(sim.score());
}

fn draw_hud(score: u32) {
    let text = format!("SCORE {}", score);
    draw_text(&text, 24.0, 52.0, 48.0, WHITE);
    draw_text(
        "arrows steer  G horn  esc quit",
        24.0,
        screen_height() - 24.0,
        24.0,
        Color::new(1.0, 1.0, 1.0, 0.6),
    );
}

/// Sanity anchor used by the camera: the hero should always be in front of
/// the camera and below its eye line.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{HERO_DEPTH, LANE_OFFSETS};

    #[test]
    fn camera_frames_the_hero() {
        assert!(HERO_DEPTH < CAMERA_DEPTH);
        assert!(DRUM_RADIUS - 1.0 < CAMERA_HEIGHT);
        // Lanes stay comfortably inside the sky dome.
        assert!(LANE_OFFSETS[2] < SKY_RADIUS);
    }
}
