// Per-particle morph state and the frame-driven interpolation step. The
// current arrays are allocated once and mutated in place every tick; target
// arrays are rebuilt wholesale on each shape switch.

use glam::Vec3;
use rand::prelude::*;

use super::constants::*;
use super::shapes::ShapeId;

#[derive(Clone, Debug)]
pub struct MorphConfig {
    pub particle_count: usize,
    pub lerp_default: f32,
    pub lerp_scatter: f32,
    pub lerp_color: f32,
    pub spawn_extent: f32,
    pub initial_color: [f32; 3],
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            lerp_default: LERP_DEFAULT,
            lerp_scatter: LERP_SCATTER,
            lerp_color: LERP_COLOR,
            spawn_extent: SPAWN_EXTENT,
            initial_color: INITIAL_COLOR,
        }
    }
}

/// Owns the particle buffers and advances them toward the active target with
/// exponential smoothing. Convergence is asymptotic; there is no "done"
/// state and the engine runs for the lifetime of the session.
pub struct MorphEngine {
    positions: Vec<f32>,
    colors: Vec<f32>,
    target_positions: Vec<f32>,
    target_colors: Vec<f32>,
    active: Option<ShapeId>,
    config: MorphConfig,
}

impl MorphEngine {
    pub fn new(config: MorphConfig, seed: u64) -> Self {
        let n = config.particle_count;
        let mut rng = StdRng::seed_from_u64(seed);
        let extent = config.spawn_extent;
        let positions = if extent > 0.0 {
            (0..n * 3).map(|_| rng.gen_range(-extent..extent)).collect()
        } else {
            vec![0.0; n * 3]
        };
        let mut colors = Vec::with_capacity(n * 3);
        for _ in 0..n {
            colors.extend_from_slice(&config.initial_color);
        }
        Self {
            positions,
            colors,
            target_positions: Vec::new(),
            target_colors: Vec::new(),
            active: None,
            config,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.config.particle_count
    }

    pub fn active_shape(&self) -> Option<ShapeId> {
        self.active
    }

    /// Flat xyz buffer, `3 * particle_count` long, for the renderer.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat rgb buffer, `3 * particle_count` long, for the renderer.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn target_positions(&self) -> &[f32] {
        &self.target_positions
    }

    pub fn target_colors(&self) -> &[f32] {
        &self.target_colors
    }

    /// Replace the target arrays. Re-targeting the active shape is a no-op,
    /// and an empty point set is refused (callers substitute a fallback
    /// shape) so particle indices never wrap modulo zero.
    pub fn set_target(&mut self, id: ShapeId, points: &[Vec3], color: [f32; 3]) {
        if self.active == Some(id) {
            return;
        }
        if points.is_empty() {
            return;
        }
        let n = self.config.particle_count;
        self.target_positions.clear();
        self.target_positions.reserve(n * 3);
        for i in 0..n {
            let p = points[i % points.len()];
            self.target_positions.extend_from_slice(&[p.x, p.y, p.z]);
        }
        self.target_colors.clear();
        self.target_colors.reserve(n * 3);
        for _ in 0..n {
            self.target_colors.extend_from_slice(&color);
        }
        self.active = Some(id);
    }

    /// Advance one frame: close a fixed fraction of the remaining distance to
    /// target, per component. Positions converge faster while scatter is
    /// active; colors use their own factor. Safe no-op before the first
    /// `set_target`.
    pub fn tick(&mut self) {
        if self.target_positions.len() != self.positions.len() {
            return;
        }
        let lerp = if self.active == Some(ShapeId::Scatter) {
            self.config.lerp_scatter
        } else {
            self.config.lerp_default
        };
        for (cur, tgt) in self.positions.iter_mut().zip(&self.target_positions) {
            *cur += (tgt - *cur) * lerp;
        }
        let color_lerp = self.config.lerp_color;
        for (cur, tgt) in self.colors.iter_mut().zip(&self.target_colors) {
            *cur += (tgt - *cur) * color_lerp;
        }
    }
}
