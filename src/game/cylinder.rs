//! Cylindrical placement on the highway drum
//!
//! The road is an infinite-highway illusion: a large drum spinning about the
//! lateral (X) axis with the vehicles "painted" onto its surface. Obstacles
//! are placed in cylindrical coordinates on the drum, then the coordinate is
//! permuted into scene axes so that the cylinder's height axis becomes the
//! scene's lateral X axis.
//!
//! The world-space position of a drum child is its local position rotated
//! about X by the drum's current rotation; an obstacle also counter-rotates
//! by the spawn-time rotation so it appears upright as the surface spins
//! beneath it.

use macroquad::prelude::{vec3, Vec3};

/// A point in cylindrical coordinates: radius, angle, height along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical {
    pub radius: f32,
    /// Angle in radians
    pub theta: f32,
    pub height: f32,
}

impl Cylindrical {
    pub fn new(radius: f32, theta: f32, height: f32) -> Self {
        Self { radius, theta, height }
    }

    /// Standard cylindrical-to-cartesian: x = r sin t, y = height, z = r cos t.
    pub fn to_cartesian(self) -> Vec3 {
        vec3(
            self.radius * self.theta.sin(),
            self.height,
            self.radius * self.theta.cos(),
        )
    }
}

/// Map a cylindrical point into drum-local scene axes.
///
/// The cartesian (x, y, z) output is permuted to (y, z, x): the height
/// coordinate lands on scene X (lateral lane offset) and the circle spans
/// the scene Y/Z plane, putting the drum's spin axis on X.
pub fn drum_local_position(cyl: Cylindrical) -> Vec3 {
    let p = cyl.to_cartesian();
    vec3(p.y, p.z, p.x)
}

/// Rotate a drum-local point about the X axis by `angle` radians, yielding
/// its world position for the drum's current rotation.
pub fn rotate_about_x(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    vec3(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    /// Recover (theta, height) from a drum-local position.
    fn recover(p: Vec3) -> (f32, f32) {
        // Inverse of the permutation: height sits on X, sin on Z, cos on Y.
        (p.z.atan2(p.y), p.x)
    }

    fn norm(angle: f32) -> f32 {
        angle.rem_euclid(TAU)
    }

    #[test]
    fn placement_round_trips_lane_and_angle() {
        // Spawn-time placement uses theta = -rotation + 180 degrees.
        for &rotation in &[0.0_f32, 0.73, -2.5, 7.0 * PI, -13.2] {
            for &lane in &[-5.6_f32, 0.0, 5.6] {
                let cyl = Cylindrical::new(24.5 + 1.4, -rotation + PI, lane);
                let local = drum_local_position(cyl);
                let (theta, height) = recover(local);
                assert!((height - lane).abs() < 1e-4, "lane lost for rot {rotation}");
                assert!(
                    (norm(theta) - norm(-rotation + PI)).abs() < 1e-3
                        || (norm(theta) - norm(-rotation + PI)).abs() > TAU - 1e-3,
                    "angle lost for rot {rotation}"
                );
            }
        }
    }

    #[test]
    fn drum_rotation_carries_children_around() {
        let local = drum_local_position(Cylindrical::new(24.5, PI, 0.0));
        // At 180 degrees the child is at the bottom of the drum.
        assert!(local.y < 0.0);
        // Half a revolution later it is on top.
        let world = rotate_about_x(local, PI);
        assert!(world.y > 0.0);
        assert!((world.y - 24.5).abs() < 1e-4);
    }

    #[test]
    fn rotation_preserves_radius_and_lateral() {
        let p = vec3(5.6, -10.0, 3.0);
        let r = (p.y * p.y + p.z * p.z).sqrt();
        for &angle in &[0.4_f32, 2.0, -1.1, 9.9] {
            let w = rotate_about_x(p, angle);
            assert_eq!(w.x, p.x);
            assert!(((w.y * w.y + w.z * w.z).sqrt() - r).abs() < 1e-4);
        }
    }
}
