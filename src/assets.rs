//! Asset catalog
//!
//! Lazily loads and caches the game's small fixed asset set: one sky
//! panorama per level, one procedural model per car, and the highway drum
//! model. `ensure_loaded` is the single completion signal - it returns only
//! once everything is cached, and the first failed load aborts the whole
//! operation (the game then simply does not start).

use std::collections::HashMap;
use std::fmt;

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::{load_texture, vec3, Color, FilterMode, Mat4, Texture2D, Vec3};

use crate::profile::{CarKind, CarProfile, LevelKind, DRUM_RADIUS, LANE_OFFSETS};

/// Why an asset load failed. Any one of these aborts game start.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// A sky texture failed to load
    Texture { path: String, message: String },
    /// A sound file failed to load
    Sound { path: String, message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Texture { path, message } => {
                write!(f, "failed to load texture {}: {}", path, message)
            }
            CatalogError::Sound { path, message } => {
                write!(f, "failed to load sound {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A baked triangle mesh in crate-local format: kept as plain data so it can
/// be retransformed per draw (obstacles ride the rotating drum).
pub struct ModelMesh {
    vertices: Vec<(Vec3, Color)>,
    indices: Vec<u16>,
}

impl ModelMesh {
    fn new() -> Self {
        Self { vertices: Vec::new(), indices: Vec::new() }
    }

    /// Append an axis-aligned box with per-face brightness baked in as a
    /// cheap stand-in for lighting.
    fn push_box(&mut self, center: Vec3, size: Vec3, color: Color) {
        let h = size / 2.0;
        // (normal axis, brightness) per face; tops bright, bottoms dark.
        let faces: [(Vec3, f32); 6] = [
            (vec3(0.0, 1.0, 0.0), 1.0),
            (vec3(0.0, -1.0, 0.0), 0.45),
            (vec3(0.0, 0.0, 1.0), 0.85),
            (vec3(0.0, 0.0, -1.0), 0.7),
            (vec3(1.0, 0.0, 0.0), 0.78),
            (vec3(-1.0, 0.0, 0.0), 0.78),
        ];

        for (normal, brightness) in faces {
            let shade = Color::new(
                color.r * brightness,
                color.g * brightness,
                color.b * brightness,
                color.a,
            );
            // Build two tangent axes spanning the face.
            let tangent = if normal.y.abs() > 0.5 {
                vec3(1.0, 0.0, 0.0)
            } else {
                vec3(0.0, 1.0, 0.0)
            };
            let bitangent = normal.cross(tangent);
            let base = self.vertices.len() as u16;
            let face_center = center + normal * (normal.abs().dot(h));
            let tu = tangent * tangent.abs().dot(h);
            let bv = bitangent * bitangent.abs().dot(h);

            self.vertices.push((face_center - tu - bv, shade));
            self.vertices.push((face_center + tu - bv, shade));
            self.vertices.push((face_center + tu + bv, shade));
            self.vertices.push((face_center - tu + bv, shade));
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    /// A low-poly car: body, cabin, four wheels. Origin at the base center,
    /// nose toward -Z, scaled and painted per the car profile.
    pub fn car(profile: CarProfile) -> Self {
        let s = profile.scale;
        let mut mesh = Self::new();
        let wheel = Color::new(0.06, 0.06, 0.07, 1.0);

        mesh.push_box(vec3(0.0, 0.65 * s, 0.0), vec3(2.2, 0.75, 4.6) * s, profile.body_color);
        mesh.push_box(vec3(0.0, 1.25 * s, 0.35 * s), vec3(1.8, 0.55, 2.3) * s, profile.cabin_color);
        for &x in &[-1.05, 1.05] {
            for &z in &[-1.5, 1.5] {
                mesh.push_box(
                    vec3(x * s, 0.3 * s, z * s),
                    vec3(0.3, 0.6, 0.7) * s,
                    wheel,
                );
            }
        }
        mesh
    }

    /// The highway drum: an asphalt cylinder about the X axis with grass
    /// shoulders and dashed lane dividers painted proud of the surface.
    pub fn drum() -> Self {
        const SEGMENTS: usize = 72;
        let mut mesh = Self::new();
        let asphalt = Color::new(0.22, 0.22, 0.24, 1.0);
        let asphalt_alt = Color::new(0.20, 0.20, 0.22, 1.0);
        let grass = Color::new(0.18, 0.38, 0.16, 1.0);
        let stripe = Color::new(0.85, 0.85, 0.80, 1.0);

        let road_half = LANE_OFFSETS[2] + 2.8;
        let shoulder = road_half + 14.0;
        let tau = std::f32::consts::TAU;

        let mut ring = |x0: f32, x1: f32, radius: f32, color: Color, alt: Option<Color>, dashed: bool| {
            for seg in 0..SEGMENTS {
                if dashed && seg % 2 == 0 {
                    continue;
                }
                let a0 = seg as f32 / SEGMENTS as f32 * tau;
                let a1 = (seg + 1) as f32 / SEGMENTS as f32 * tau;
                let c = if seg % 2 == 1 { alt.unwrap_or(color) } else { color };
                let base = mesh.vertices.len() as u16;
                for &(x, a) in &[(x0, a0), (x1, a0), (x1, a1), (x0, a1)] {
                    let (sin, cos) = f32::sin_cos(a);
                    mesh.vertices.push((vec3(x, radius * cos, radius * sin), c));
                }
                mesh.indices
                    .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            }
        };

        // Road bed, slightly alternating per segment so motion reads.
        ring(-road_half, road_half, DRUM_RADIUS, asphalt, Some(asphalt_alt), false);
        // Grass shoulders, a touch below the road surface.
        ring(-shoulder, -road_half, DRUM_RADIUS - 0.15, grass, None, false);
        ring(road_half, shoulder, DRUM_RADIUS - 0.15, grass, None, false);
        // Dashed dividers between the three lanes.
        for &x in &[-2.8, 2.8] {
            ring(x - 0.15, x + 0.15, DRUM_RADIUS + 0.03, stripe, None, true);
        }
        mesh
    }

    /// Draw this mesh under the given world transform, tinted by the level's
    /// ambient intensity.
    pub fn draw(&self, transform: Mat4, ambient: f32) {
        let vertices = self
            .vertices
            .iter()
            .map(|&(p, c)| {
                let w = transform.transform_point3(p);
                let lit = Color::new(
                    (c.r * ambient).min(1.0),
                    (c.g * ambient).min(1.0),
                    (c.b * ambient).min(1.0),
                    c.a,
                );
                Vertex::new(w.x, w.y, w.z, 0.0, 0.0, lit)
            })
            .collect();

        draw_mesh(&Mesh { vertices, indices: self.indices.clone(), texture: None });
    }

    #[cfg(test)]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[cfg(test)]
    fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[cfg(test)]
    fn max_index(&self) -> u16 {
        self.indices.iter().copied().max().unwrap_or(0)
    }
}

/// The loaded-and-cached asset set.
#[derive(Default)]
pub struct AssetCatalog {
    skies: HashMap<LevelKind, Texture2D>,
    cars: HashMap<CarKind, ModelMesh>,
    drum: Option<ModelMesh>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load anything not yet cached. Returns once every asset is resident;
    /// the first failure aborts with the offending path.
    pub async fn ensure_loaded(&mut self) -> Result<(), CatalogError> {
        for level in LevelKind::ALL {
            if self.skies.contains_key(&level) {
                continue;
            }
            let path = level.profile().sky_texture;
            let texture = load_texture(path).await.map_err(|e| CatalogError::Texture {
                path: path.to_string(),
                message: e.to_string(),
            })?;
            texture.set_filter(FilterMode::Linear);
            self.skies.insert(level, texture);
        }

        for car in CarKind::ALL {
            self.cars.entry(car).or_insert_with(|| ModelMesh::car(car.profile()));
        }
        if self.drum.is_none() {
            self.drum = Some(ModelMesh::drum());
        }
        Ok(())
    }

    pub fn sky(&self, level: LevelKind) -> Option<&Texture2D> {
        self.skies.get(&level)
    }

    pub fn car(&self, kind: CarKind) -> Option<&ModelMesh> {
        self.cars.get(&kind)
    }

    pub fn drum(&self) -> Option<&ModelMesh> {
        self.drum.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_mesh_is_consistent() {
        for kind in CarKind::ALL {
            let mesh = ModelMesh::car(kind.profile());
            // body + cabin + 4 wheels, 6 quads each
            assert_eq!(mesh.vertex_count(), 6 * 24);
            assert_eq!(mesh.index_count() % 3, 0);
            assert!((mesh.max_index() as usize) < mesh.vertex_count());
        }
    }

    #[test]
    fn drum_mesh_fits_u16_indices() {
        let mesh = ModelMesh::drum();
        assert!(mesh.vertex_count() <= u16::MAX as usize);
        assert_eq!(mesh.index_count() % 3, 0);
        assert!((mesh.max_index() as usize) < mesh.vertex_count());
    }
}
