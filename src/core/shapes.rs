// Target shape generation: sphere, scatter, and glyph-rasterized text.
// Point counts are independent of the live particle count; the morph engine
// maps particles onto shape points modulo the shape length.

use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;
use thiserror::Error;

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Sphere,
    Hello,
    Gemini,
    Great,
    Greeting,
    Scatter,
}

impl ShapeId {
    /// Uniform particle color applied while this shape is the target.
    pub fn color(self) -> [f32; 3] {
        match self {
            ShapeId::Sphere => SPHERE_COLOR,
            ShapeId::Hello => HELLO_COLOR,
            ShapeId::Gemini => GEMINI_COLOR,
            ShapeId::Great => GREAT_COLOR,
            ShapeId::Greeting => GREETING_COLOR,
            ShapeId::Scatter => SCATTER_COLOR,
        }
    }

    /// The word a text shape rasterizes, `None` for geometric shapes.
    pub fn text(self) -> Option<&'static str> {
        match self {
            ShapeId::Hello => Some(HELLO_TEXT),
            ShapeId::Gemini => Some(GEMINI_TEXT),
            ShapeId::Great => Some(GREAT_TEXT),
            ShapeId::Greeting => Some(GREETING_TEXT),
            ShapeId::Sphere | ShapeId::Scatter => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ShapeError {
    /// The text rasterization surface could not be created or used. Distinct
    /// from an empty shape: zero sampled pixels is a valid result.
    #[error("text raster surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

/// Capability to rasterize a UTF-8 string onto a square luminance grid.
/// Implementations return `size * size` bytes, row-major, origin top-left.
/// Keeping this behind a trait lets the sampling logic run against a
/// synthetic buffer with no drawing backend.
pub trait TextRaster {
    fn rasterize(&mut self, text: &str, size: u32) -> Result<Vec<u8>, ShapeError>;
}

/// Evenly distributed sphere-surface points via the golden-spiral
/// parametrization. Deterministic for fixed inputs.
pub fn sphere_points(count: usize, radius: f32) -> Vec<Vec3> {
    let n = count as f32;
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / n).acos();
            let theta = (n * std::f32::consts::PI).sqrt() * phi;
            Vec3::new(
                radius * theta.cos() * phi.sin(),
                radius * theta.sin() * phi.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}

/// Uniform-random points in a cube of edge `range`. Callers regenerate this
/// on every selection so repeated blasts look distinct.
pub fn scatter_points(count: usize, range: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let half = range / 2.0;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

/// Sample a luminance grid at a fixed stride and emit a scene-space point for
/// every sampled pixel brighter than `threshold`. The raster origin is
/// top-left; the scene origin is the center with y up, hence the vertical
/// flip. Output length depends on glyph coverage.
pub fn points_from_luma(luma: &[u8], size: u32, stride: u32, threshold: u8, scale: f32) -> Vec<Vec3> {
    let mut points = Vec::new();
    let half = size as f32 / 2.0;
    let mut py = 0;
    while py < size {
        let mut px = 0;
        while px < size {
            let idx = (py * size + px) as usize;
            if luma.get(idx).copied().unwrap_or(0) > threshold {
                points.push(Vec3::new(
                    (px as f32 - half) * scale,
                    -(py as f32 - half) * scale,
                    0.0,
                ));
            }
            px += stride;
        }
        py += stride;
    }
    points
}

#[derive(Clone, Debug)]
pub struct ShapeConfig {
    pub point_count: usize,
    pub sphere_radius: f32,
    pub scatter_range: f32,
    pub text_size: u32,
    pub text_stride: u32,
    pub text_scale: f32,
    pub text_threshold: u8,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            point_count: PARTICLE_COUNT,
            sphere_radius: SPHERE_RADIUS,
            scatter_range: SCATTER_RANGE,
            text_size: TEXT_CANVAS_SIZE,
            text_stride: TEXT_SAMPLE_STRIDE,
            text_scale: TEXT_SCALE,
            text_threshold: TEXT_LUMA_THRESHOLD,
        }
    }
}

/// Generates and caches target point sets. Sphere and text shapes are built
/// once on first use; scatter is rebuilt on every fetch.
pub struct ShapeLibrary {
    raster: Option<Box<dyn TextRaster>>,
    cache: FnvHashMap<ShapeId, Vec<Vec3>>,
    rng: StdRng,
    config: ShapeConfig,
}

impl ShapeLibrary {
    pub fn new(raster: Option<Box<dyn TextRaster>>, config: ShapeConfig, seed: u64) -> Self {
        Self {
            raster,
            cache: FnvHashMap::default(),
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn points_for(&mut self, id: ShapeId) -> Result<&[Vec3], ShapeError> {
        if id == ShapeId::Scatter || !self.cache.contains_key(&id) {
            let points = self.generate(id)?;
            self.cache.insert(id, points);
        }
        Ok(self.cache.entry(id).or_default())
    }

    fn generate(&mut self, id: ShapeId) -> Result<Vec<Vec3>, ShapeError> {
        let c = &self.config;
        match id {
            ShapeId::Sphere => Ok(sphere_points(c.point_count, c.sphere_radius)),
            ShapeId::Scatter => Ok(scatter_points(
                c.point_count,
                c.scatter_range,
                &mut self.rng,
            )),
            ShapeId::Hello | ShapeId::Gemini | ShapeId::Great | ShapeId::Greeting => {
                let text = id.text().unwrap_or_default();
                let raster = self.raster.as_mut().ok_or_else(|| {
                    ShapeError::SurfaceUnavailable("no text rasterizer configured".into())
                })?;
                let luma = raster.rasterize(text, c.text_size)?;
                Ok(points_from_luma(
                    &luma,
                    c.text_size,
                    c.text_stride,
                    c.text_threshold,
                    c.text_scale,
                ))
            }
        }
    }
}
