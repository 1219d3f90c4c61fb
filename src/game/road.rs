//! Road simulation
//!
//! The per-frame heart of the game: drum rotation, hero lane easing and
//! banking, the decaying spawn cadence, obstacle placement on the drum, and
//! the collision/cleanup sweep. Runs once per simulated frame via [`step`],
//! which reports whether the session should keep running - the host loop
//! owns scheduling, the simulation only signals.
//!
//! [`step`]: RoadSimulation::step

use std::f32::consts::PI;

use macroquad::prelude::{vec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::profile::{
    CarKind, CarProfile, DifficultyProfile, LevelKind, CLEANUP_DEPTH, COLLISION_DISTANCE,
    DRUM_RADIUS, HERO_DEPTH, LANE_COUNT, LANE_OFFSETS, OBSTACLE_RADIAL_OFFSET,
};

use super::cylinder::{drum_local_position, rotate_about_x, Cylindrical};
use super::pool::{ObstacleId, ObstaclePool};

/// Spawn interval at the start of every session (seconds).
const INITIAL_SPAWN_INTERVAL: f32 = 3.0;

/// Interval decay per spawn tick - the game's sole difficulty ramp.
const INTERVAL_DECAY: f32 = 0.05;

/// Frame deltas at or above this snap the hero straight to the target lane
/// instead of easing (a long stall is a teleport, not a runaway lerp).
const SNAP_DELTA: f32 = 0.25;

/// Lateral error below which the hero counts as centered on its lane.
const LANE_EPSILON: f32 = 0.01;

/// Maximum banking angle while changing lanes (degrees).
const BANK_DEGREES: f32 = 15.0;

/// Why a running session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The hero hit an obstacle
    Collision,
    /// The player bowed out
    Quit,
}

/// Result of one simulation step. The host drives the frame loop until it
/// sees `Stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSignal {
    Continue,
    Stop(StopReason),
}

/// An active obstacle resolved to world space, ready to draw.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleView {
    pub position: Vec3,
    /// Rotation about the drum axis keeping the car upright
    pub rotation: f32,
}

/// The whole mutable state of one run.
pub struct RoadSimulation {
    car: CarProfile,
    difficulty: DifficultyProfile,

    current_lane: usize,
    hero_x: f32,
    hero_heading: f32,

    /// Drum rotation, monotonically increasing
    rotation: f32,
    /// Cube root of car speed: faster cars see a faster-unwinding road
    rotation_factor: f32,

    spawn_interval: f32,
    spawn_clock: f32,
    score: u32,

    pool: ObstaclePool,
    rng: StdRng,
}

impl RoadSimulation {
    pub fn new(car: CarKind, level: LevelKind) -> Self {
        Self::with_rng(car, level, StdRng::from_entropy())
    }

    /// Construct with a caller-supplied RNG (tests seed this).
    pub fn with_rng(car: CarKind, level: LevelKind, rng: StdRng) -> Self {
        let profile = car.profile();
        let start_lane = LANE_COUNT / 2;
        Self {
            car: profile,
            difficulty: level.profile().difficulty,
            current_lane: start_lane,
            hero_x: LANE_OFFSETS[start_lane],
            hero_heading: profile.base_rotation,
            rotation: 0.0,
            rotation_factor: profile.speed.cbrt(),
            spawn_interval: INITIAL_SPAWN_INTERVAL,
            spawn_clock: 0.0,
            score: 0,
            pool: ObstaclePool::default(),
            rng,
        }
    }

    /// Shift one lane toward the left shoulder; a no-op at the boundary.
    pub fn move_left(&mut self) {
        self.current_lane = self.current_lane.saturating_sub(1);
    }

    /// Shift one lane toward the right shoulder; a no-op at the boundary.
    pub fn move_right(&mut self) {
        if self.current_lane + 1 < LANE_COUNT {
            self.current_lane += 1;
        }
    }

    /// Advance the simulation by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) -> StepSignal {
        // The drum unwinds faster as the spawn interval tightens.
        self.rotation += INTERVAL_DECAY / self.spawn_interval * self.rotation_factor;

        self.advance_hero(dt);

        self.spawn_clock += dt;
        if self.spawn_clock > self.spawn_interval {
            self.spawn_clock = 0.0;
            self.spawn_wave();
            self.score += self.car.speed as u32;
            self.spawn_interval =
                (self.spawn_interval - INTERVAL_DECAY).max(self.difficulty.interval_floor);
        }

        if self.sweep() {
            StepSignal::Stop(StopReason::Collision)
        } else {
            StepSignal::Continue
        }
    }

    /// Ease the hero toward its target lane and bank it into the turn.
    fn advance_hero(&mut self, dt: f32) {
        let target = LANE_OFFSETS[self.current_lane];
        let error = target - self.hero_x;

        // Banking is purely cosmetic: lean proportional to lateral error,
        // sign-adjusted so cars with a negative base heading lean the same way.
        let base = self.car.base_rotation;
        self.hero_heading = if error == 0.0 {
            base
        } else {
            let sign = if base < 0.0 { -1.0 } else { 1.0 };
            base - (sign * BANK_DEGREES * (error / 11.2)).to_radians()
        };

        let factor = if dt < SNAP_DELTA && error.abs() > LANE_EPSILON {
            (dt * self.car.steering_ratio).min(1.0)
        } else {
            1.0
        };
        self.hero_x += error * factor;
    }

    /// One spawn attempt: possibly nothing, one obstacle, or two obstacles in
    /// guaranteed-different lanes.
    fn spawn_wave(&mut self) {
        if self.rng.gen::<f32>() < self.difficulty.spawn_skip_chance {
            return;
        }

        let lane1 = self.rng.gen_range(0..LANE_COUNT);
        self.place_obstacle(lane1);

        if self.rng.gen::<f32>() < self.difficulty.dual_spawn_chance {
            // Offset by 1 or 2 mod 3 - never the same lane twice.
            let lane2 = (lane1 + self.rng.gen_range(1..LANE_COUNT)) % LANE_COUNT;
            self.place_obstacle(lane2);
        }
    }

    /// Paint one obstacle onto the drum in the given lane. Silently spawns
    /// nothing when the pool is exhausted.
    fn place_obstacle(&mut self, lane: usize) {
        let Some(id) = self.pool.acquire() else {
            return;
        };

        // The far side of the drum relative to the current rotation, so the
        // obstacle crests the horizon and rolls toward the camera.
        let cyl = Cylindrical::new(
            DRUM_RADIUS + OBSTACLE_RADIAL_OFFSET,
            -self.rotation + PI,
            LANE_OFFSETS[lane],
        );

        let obstacle = self.pool.get_mut(id);
        obstacle.lane = lane;
        obstacle.local_position = drum_local_position(cyl);
        obstacle.rotation = -self.rotation;
        obstacle.visible = true;
    }

    /// Collision/cleanup scan over the active set. Removal is deferred to a
    /// second pass so the active list is never mutated mid-iteration.
    /// Returns true when the hero has hit something.
    fn sweep(&mut self) -> bool {
        let hero = self.hero_position();
        let mut passed: Vec<ObstacleId> = Vec::new();
        let mut collided = false;

        for (id, obstacle) in self.pool.iter_active() {
            if !obstacle.visible {
                continue;
            }
            let world = rotate_about_x(obstacle.local_position, self.rotation);
            if world.z > CLEANUP_DEPTH {
                passed.push(id);
            } else if world.distance(hero) < COLLISION_DISTANCE {
                collided = true;
            }
        }

        for id in passed {
            self.pool.release(id);
        }
        collided
    }

    /// Hero world position: on the drum surface, fixed depth.
    pub fn hero_position(&self) -> Vec3 {
        vec3(self.hero_x, DRUM_RADIUS - 1.0, HERO_DEPTH)
    }

    pub fn hero_heading(&self) -> f32 {
        self.hero_heading
    }

    pub fn hero_x(&self) -> f32 {
        self.hero_x
    }

    pub fn current_lane(&self) -> usize {
        self.current_lane
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// Active obstacles resolved to world space for rendering.
    pub fn obstacles(&self) -> impl Iterator<Item = ObstacleView> + '_ {
        self.pool.iter_active().filter(|(_, o)| o.visible).map(|(_, o)| ObstacleView {
            position: rotate_about_x(o.local_position, self.rotation),
            rotation: o.rotation + self.rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(car: CarKind, level: LevelKind, seed: u64) -> RoadSimulation {
        RoadSimulation::with_rng(car, level, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn lane_index_stays_in_range() {
        let mut sim = seeded(CarKind::Skyline, LevelKind::Morning, 1);
        assert_eq!(sim.current_lane(), 1);

        sim.move_left();
        sim.move_left();
        sim.move_left();
        assert_eq!(sim.current_lane(), 0);

        for _ in 0..10 {
            sim.move_right();
        }
        assert_eq!(sim.current_lane(), LANE_COUNT - 1);

        sim.move_right();
        assert_eq!(sim.current_lane(), LANE_COUNT - 1);
    }

    #[test]
    fn hero_eases_toward_target_lane() {
        let mut sim = seeded(CarKind::Skyline, LevelKind::Morning, 2);
        sim.move_left();
        let before = sim.hero_x();
        sim.step(0.016);
        assert!(sim.hero_x() < before, "hero should drift left");
        assert!(sim.hero_x() > LANE_OFFSETS[0], "one frame must not overshoot");
    }

    #[test]
    fn long_stall_snaps_to_lane() {
        let mut sim = seeded(CarKind::GolfGti, LevelKind::Morning, 3);
        sim.move_right();
        sim.step(0.3);
        assert_eq!(sim.hero_x(), LANE_OFFSETS[2]);
    }

    #[test]
    fn centered_hero_holds_base_heading() {
        let mut sim = seeded(CarKind::Enzo, LevelKind::Day, 4);
        sim.step(0.016);
        assert_eq!(sim.hero_heading(), CarKind::Enzo.profile().base_rotation);

        sim.move_left();
        sim.step(0.016);
        assert_ne!(sim.hero_heading(), CarKind::Enzo.profile().base_rotation);
    }

    #[test]
    fn cadence_decays_by_fixed_step_to_floor() {
        // Night: never skips a spawn, floor at 1.0.
        let mut sim = seeded(CarKind::Skyline, LevelKind::Night, 5);
        let mut intervals = vec![sim.spawn_interval()];

        // 3.0 -> 1.0 takes exactly 40 ticks of 0.05.
        for _ in 0..45 {
            let before = sim.spawn_interval();
            // Two half-interval steps always cross the threshold once.
            sim.step(before * 0.6);
            sim.step(before * 0.6);
            intervals.push(sim.spawn_interval());
        }

        for pair in intervals.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a > 1.0 {
                assert!((a - b - INTERVAL_DECAY).abs() < 1e-4, "expected 0.05 decay");
            } else {
                assert_eq!(b, 1.0, "interval must hold at the floor");
            }
        }
        assert_eq!(*intervals.last().unwrap(), 1.0);
    }

    #[test]
    fn score_accrues_speed_per_tick() {
        let mut sim = seeded(CarKind::Enzo, LevelKind::Night, 6);
        let mut ticks = 0;
        for _ in 0..20 {
            let before = sim.spawn_interval();
            sim.step(before + 0.01);
            ticks += 1;
            assert_eq!(sim.score(), ticks * 3, "Enzo scores 3 per spawn tick");
        }
    }

    #[test]
    fn collision_inside_proximity_stops_the_run() {
        let mut sim = seeded(CarKind::Skyline, LevelKind::Morning, 7);
        let hero = sim.hero_position();

        let id = sim.pool.acquire().unwrap();
        let obstacle = sim.pool.get_mut(id);
        obstacle.local_position = hero; // rotation is ~0 at session start
        obstacle.visible = true;

        assert_eq!(sim.step(0.016), StepSignal::Stop(StopReason::Collision));
    }

    #[test]
    fn near_miss_does_not_stop() {
        let mut sim = seeded(CarKind::Skyline, LevelKind::Morning, 8);
        let hero = sim.hero_position();

        let id = sim.pool.acquire().unwrap();
        let obstacle = sim.pool.get_mut(id);
        obstacle.local_position = hero + vec3(5.0, 0.0, 0.0);
        obstacle.visible = true;

        assert_eq!(sim.step(0.016), StepSignal::Continue);
        assert_eq!(sim.pool.active_len(), 1, "a near miss is not cleaned up");
    }

    #[test]
    fn passed_obstacle_returns_to_pool() {
        let mut sim = seeded(CarKind::Skyline, LevelKind::Morning, 9);

        let id = sim.pool.acquire().unwrap();
        let obstacle = sim.pool.get_mut(id);
        obstacle.local_position = vec3(0.0, 10.0, CLEANUP_DEPTH + 1.5);
        obstacle.visible = true;
        assert_eq!(sim.pool.active_len(), 1);

        assert_eq!(sim.step(0.016), StepSignal::Continue);
        assert_eq!(sim.pool.active_len(), 0);
        assert_eq!(sim.pool.free_len(), sim.pool.capacity());
        assert!(!sim.pool.get(id).visible);
    }

    #[test]
    fn dual_spawn_always_picks_a_second_lane() {
        for seed in 0..32 {
            let mut sim = seeded(CarKind::GolfGti, LevelKind::Night, seed);
            sim.spawn_wave();
            let lanes: Vec<usize> =
                sim.pool.iter_active().map(|(_, o)| o.lane).collect();
            assert!(!lanes.is_empty(), "night never skips a spawn tick");
            if lanes.len() == 2 {
                assert_ne!(lanes[0], lanes[1]);
            }
            for &lane in &lanes {
                assert!(lane < LANE_COUNT);
            }
        }
    }

    #[test]
    fn spawned_obstacles_sit_on_the_far_side() {
        let mut sim = seeded(CarKind::Skyline, LevelKind::Night, 10);
        sim.spawn_wave();
        for (_, obstacle) in sim.pool.iter_active() {
            // theta = 180 degrees at zero rotation: the bottom of the drum,
            // i.e. hidden on the far side from the camera.
            assert!(obstacle.local_position.y < 0.0);
            assert!(obstacle.visible);
        }
    }

    #[test]
    fn rotation_is_monotonic() {
        let mut sim = seeded(CarKind::Enzo, LevelKind::Day, 11);
        let mut last = sim.rotation();
        for _ in 0..100 {
            sim.step(0.016);
            assert!(sim.rotation() > last);
            last = sim.rotation();
        }
    }
}
