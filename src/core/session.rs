// Control-flow pipeline: classifier -> throttle gate -> shape selection ->
// morph engine. One `observe` per detector frame, one `tick` per rendered
// frame; the host keeps both on the same frame-driving path.

use super::classifier::{self, Gesture, GestureResult};
use super::constants::GESTURE_SWITCH_MIN_INTERVAL_MS;
use super::landmarks::HandLandmarks;
use super::morph::{MorphConfig, MorphEngine};
use super::shapes::{ShapeConfig, ShapeId, ShapeLibrary, TextRaster};
use super::throttle::ThrottleGate;

pub struct MorphSession {
    library: ShapeLibrary,
    engine: MorphEngine,
    gate: ThrottleGate<Gesture>,
    requested: Option<ShapeId>,
    last_result: GestureResult,
}

impl MorphSession {
    pub fn new(raster: Option<Box<dyn TextRaster>>, seed: u64) -> Self {
        Self::with_config(raster, ShapeConfig::default(), MorphConfig::default(), seed)
    }

    pub fn with_config(
        raster: Option<Box<dyn TextRaster>>,
        shape_config: ShapeConfig,
        morph_config: MorphConfig,
        seed: u64,
    ) -> Self {
        Self {
            library: ShapeLibrary::new(raster, shape_config, seed),
            engine: MorphEngine::new(morph_config, seed ^ 0x9E37_79B9_7F4A_7C15),
            gate: ThrottleGate::new(GESTURE_SWITCH_MIN_INTERVAL_MS),
            requested: None,
            last_result: GestureResult::none(),
        }
    }

    /// Feed the latest detector frame (or its absence). Classification runs
    /// every call; the throttle gate decides whether the result may switch
    /// the active target shape.
    pub fn observe(&mut self, hand: Option<&HandLandmarks>) {
        let result = classifier::classify(hand);
        self.last_result = result;
        let emitted = self.gate.update(result.gesture);
        self.retarget(emitted.target_shape());
    }

    /// Timestamp-explicit variant of `observe` for host-side tests.
    pub fn observe_at(&mut self, hand: Option<&HandLandmarks>, now_ms: f64) {
        let result = classifier::classify(hand);
        self.last_result = result;
        let emitted = self.gate.update_at(result.gesture, now_ms);
        self.retarget(emitted.target_shape());
    }

    /// Advance the particle field one frame.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    fn retarget(&mut self, shape: ShapeId) {
        if self.requested == Some(shape) {
            return;
        }
        self.requested = Some(shape);
        match self.library.points_for(shape) {
            Ok(points) if !points.is_empty() => {
                self.engine.set_target(shape, points, shape.color());
                return;
            }
            Ok(_) => log::warn!("shape {shape:?} produced no points, falling back to sphere"),
            Err(e) => log::warn!("shape {shape:?} unavailable ({e}), falling back to sphere"),
        }
        if let Ok(points) = self.library.points_for(ShapeId::Sphere) {
            self.engine
                .set_target(ShapeId::Sphere, points, ShapeId::Sphere.color());
        }
    }

    pub fn positions(&self) -> &[f32] {
        self.engine.positions()
    }

    pub fn colors(&self) -> &[f32] {
        self.engine.colors()
    }

    pub fn particle_count(&self) -> usize {
        self.engine.particle_count()
    }

    pub fn active_shape(&self) -> Option<ShapeId> {
        self.engine.active_shape()
    }

    pub fn gesture(&self) -> Gesture {
        self.last_result.gesture
    }

    pub fn confidence(&self) -> f32 {
        self.last_result.confidence
    }

    pub fn label(&self) -> &'static str {
        self.last_result.gesture.label()
    }
}
