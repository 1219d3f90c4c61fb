//! Car and level tuning registries
//!
//! All per-car and per-level tuning lives here as immutable tables keyed by
//! enumerated identifiers. Lookups are exhaustive matches, so adding a car or
//! level without tuning it is a compile error.

use macroquad::prelude::Color;

/// Lateral offsets of the three highway lanes, left to right.
pub const LANE_OFFSETS: [f32; 3] = [-5.6, 0.0, 5.6];

/// Number of lanes (index range is `0..LANE_COUNT`).
pub const LANE_COUNT: usize = LANE_OFFSETS.len();

/// Radius of the rotating highway drum.
pub const DRUM_RADIUS: f32 = 24.5;

/// Obstacles sit slightly proud of the drum surface.
pub const OBSTACLE_RADIAL_OFFSET: f32 = 1.4;

/// Forward (depth) coordinate the hero car holds.
pub const HERO_DEPTH: f32 = 13.0;

/// Depth past which an obstacle has scrolled behind the camera.
pub const CLEANUP_DEPTH: f32 = 20.0;

/// Hero/obstacle distance that counts as a crash.
pub const COLLISION_DISTANCE: f32 = 3.0;

/// The selectable hero cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarKind {
    Skyline,
    GolfGti,
    Enzo,
}

/// Tuning parameters for one car.
#[derive(Debug, Clone, Copy)]
pub struct CarProfile {
    /// Display name for menus
    pub name: &'static str,
    /// Speed scalar: score per spawn tick, and cube-rooted into drum spin
    pub speed: f32,
    /// Steering responsiveness (lerp factor multiplier)
    pub steering_ratio: f32,
    /// Resting heading in radians; its sign flips the banking direction
    pub base_rotation: f32,
    /// Body paint
    pub body_color: Color,
    /// Cabin/window tint
    pub cabin_color: Color,
    /// Overall model scale
    pub scale: f32,
}

impl CarKind {
    pub const ALL: [CarKind; 3] = [CarKind::Skyline, CarKind::GolfGti, CarKind::Enzo];

    /// Tuning table for this car.
    pub fn profile(self) -> CarProfile {
        match self {
            CarKind::Skyline => CarProfile {
                name: "Skyline GT-R",
                speed: 2.0,
                steering_ratio: 6.0,
                base_rotation: 180.0_f32.to_radians(),
                body_color: Color::new(0.25, 0.35, 0.85, 1.0),
                cabin_color: Color::new(0.10, 0.12, 0.18, 1.0),
                scale: 0.7,
            },
            CarKind::GolfGti => CarProfile {
                name: "Golf GTI",
                speed: 1.0,
                steering_ratio: 4.0,
                base_rotation: (-360.0_f32).to_radians(),
                body_color: Color::new(0.80, 0.82, 0.84, 1.0),
                cabin_color: Color::new(0.12, 0.12, 0.14, 1.0),
                scale: 1.0,
            },
            CarKind::Enzo => CarProfile {
                name: "Enzo",
                speed: 3.0,
                steering_ratio: 8.0,
                base_rotation: 0.0,
                body_color: Color::new(0.85, 0.12, 0.10, 1.0),
                cabin_color: Color::new(0.08, 0.06, 0.06, 1.0),
                scale: 1.2,
            },
        }
    }

    /// Next car in menu order (wraps).
    pub fn next(self) -> Self {
        match self {
            CarKind::Skyline => CarKind::GolfGti,
            CarKind::GolfGti => CarKind::Enzo,
            CarKind::Enzo => CarKind::Skyline,
        }
    }

    /// Previous car in menu order (wraps).
    pub fn prev(self) -> Self {
        match self {
            CarKind::Skyline => CarKind::Enzo,
            CarKind::GolfGti => CarKind::Skyline,
            CarKind::Enzo => CarKind::GolfGti,
        }
    }
}

/// Time-of-day levels. Each carries its own sky, mood and difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelKind {
    Morning,
    Day,
    Night,
}

/// Spawn-cadence tuning. The three source variants of the game differed in
/// how often a tick skips spawning and how often it doubles up; they are
/// kept as distinct profiles, one per level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Chance that a spawn tick releases no obstacle at all
    pub spawn_skip_chance: f32,
    /// Chance that a spawn tick releases a second obstacle in another lane
    pub dual_spawn_chance: f32,
    /// The spawn interval never decays below this (seconds)
    pub interval_floor: f32,
}

/// Tuning parameters for one level.
#[derive(Debug, Clone, Copy)]
pub struct LevelProfile {
    /// Display name for menus
    pub name: &'static str,
    /// Equirectangular sky panorama
    pub sky_texture: &'static str,
    /// Clear/horizon color
    pub clear_color: Color,
    /// Ambient light intensity folded into mesh tinting
    pub ambient: f32,
    /// Difficulty variant for this level
    pub difficulty: DifficultyProfile,
}

impl LevelKind {
    pub const ALL: [LevelKind; 3] = [LevelKind::Morning, LevelKind::Day, LevelKind::Night];

    /// Tuning table for this level.
    pub fn profile(self) -> LevelProfile {
        match self {
            LevelKind::Morning => LevelProfile {
                name: "Morning",
                sky_texture: "assets/skies/morning.png",
                clear_color: Color::new(0.80, 0.76, 0.77, 1.0),
                ambient: 1.0,
                difficulty: DifficultyProfile {
                    spawn_skip_chance: 0.3,
                    dual_spawn_chance: 0.5,
                    interval_floor: 1.5,
                },
            },
            LevelKind::Day => LevelProfile {
                name: "Day",
                sky_texture: "assets/skies/day.png",
                clear_color: Color::new(0.72, 0.80, 0.92, 1.0),
                ambient: 1.2,
                difficulty: DifficultyProfile {
                    spawn_skip_chance: 0.0,
                    dual_spawn_chance: 0.5,
                    interval_floor: 1.2,
                },
            },
            LevelKind::Night => LevelProfile {
                name: "Night",
                sky_texture: "assets/skies/night.png",
                clear_color: Color::new(0.08, 0.09, 0.14, 1.0),
                ambient: 0.8,
                difficulty: DifficultyProfile {
                    spawn_skip_chance: 0.0,
                    dual_spawn_chance: 0.7,
                    interval_floor: 1.0,
                },
            },
        }
    }

    /// Next level in menu order (wraps).
    pub fn next(self) -> Self {
        match self {
            LevelKind::Morning => LevelKind::Day,
            LevelKind::Day => LevelKind::Night,
            LevelKind::Night => LevelKind::Morning,
        }
    }

    /// Previous level in menu order (wraps).
    pub fn prev(self) -> Self {
        match self {
            LevelKind::Morning => LevelKind::Night,
            LevelKind::Day => LevelKind::Morning,
            LevelKind::Night => LevelKind::Day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_tuning_matches_tables() {
        assert_eq!(CarKind::Skyline.profile().speed, 2.0);
        assert_eq!(CarKind::GolfGti.profile().steering_ratio, 4.0);
        assert_eq!(CarKind::Enzo.profile().base_rotation, 0.0);
        assert!(CarKind::GolfGti.profile().base_rotation < 0.0);
    }

    #[test]
    fn car_cycle_visits_every_kind() {
        let mut kind = CarKind::Skyline;
        for _ in 0..CarKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, CarKind::Skyline);
        assert_eq!(CarKind::Skyline.next().prev(), CarKind::Skyline);
    }

    #[test]
    fn difficulty_floors_are_ordered() {
        // Night is the hardest variant: always spawns, lowest floor.
        let morning = LevelKind::Morning.profile().difficulty;
        let night = LevelKind::Night.profile().difficulty;
        assert!(morning.interval_floor > night.interval_floor);
        assert_eq!(night.spawn_skip_chance, 0.0);
    }

    #[test]
    fn lanes_are_symmetric() {
        assert_eq!(LANE_COUNT, 3);
        assert_eq!(LANE_OFFSETS[0], -LANE_OFFSETS[2]);
        assert_eq!(LANE_OFFSETS[1], 0.0);
    }
}
