// Host-side end-to-end tests: landmarks in, moving particle buffers out.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod landmarks {
    include!("../src/core/landmarks.rs");
}
mod shapes {
    include!("../src/core/shapes.rs");
}
mod classifier {
    include!("../src/core/classifier.rs");
}
mod morph {
    include!("../src/core/morph.rs");
}
mod throttle {
    include!("../src/core/throttle.rs");
}
mod session {
    include!("../src/core/session.rs");
}

use classifier::Gesture;
use glam::Vec3;
use landmarks::*;
use morph::MorphConfig;
use session::MorphSession;
use shapes::{ShapeConfig, ShapeError, ShapeId, TextRaster};

fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> HandLandmarks {
    let mut p = [Vec3::ZERO; LANDMARK_COUNT];
    p[WRIST] = Vec3::new(0.5, 0.9, 0.0);
    let thumb_tip_y = if thumb { 0.60 } else { 0.74 };
    p[THUMB_CMC] = Vec3::new(0.42, 0.82, 0.0);
    p[THUMB_MCP] = Vec3::new(0.40, 0.78, 0.0);
    p[THUMB_IP] = Vec3::new(0.38, 0.76, 0.0);
    p[THUMB_TIP] = Vec3::new(0.37, thumb_tip_y, 0.0);
    for (mcp, x, raised) in [
        (INDEX_MCP, 0.44, index),
        (MIDDLE_MCP, 0.50, middle),
        (RING_MCP, 0.56, ring),
        (PINKY_MCP, 0.62, pinky),
    ] {
        let tip_y = if raised { 0.40 } else { 0.66 };
        p[mcp] = Vec3::new(x, 0.70, 0.0);
        p[mcp + 1] = Vec3::new(x, 0.62, 0.0);
        p[mcp + 2] = Vec3::new(x, 0.56, 0.0);
        p[mcp + 3] = Vec3::new(x, tip_y, 0.0);
    }
    HandLandmarks::new(p)
}

struct FlatRaster {
    value: u8,
}

impl TextRaster for FlatRaster {
    fn rasterize(&mut self, _text: &str, size: u32) -> Result<Vec<u8>, ShapeError> {
        Ok(vec![self.value; (size * size) as usize])
    }
}

struct BrokenRaster;

impl TextRaster for BrokenRaster {
    fn rasterize(&mut self, _text: &str, _size: u32) -> Result<Vec<u8>, ShapeError> {
        Err(ShapeError::SurfaceUnavailable("synthetic failure".into()))
    }
}

fn small_session(raster: Option<Box<dyn TextRaster>>) -> MorphSession {
    let shape_config = ShapeConfig {
        point_count: 64,
        text_size: 32,
        text_stride: 4,
        ..ShapeConfig::default()
    };
    let morph_config = MorphConfig {
        particle_count: 64,
        ..MorphConfig::default()
    };
    MorphSession::with_config(raster, shape_config, morph_config, 42)
}

#[test]
fn no_hand_defaults_to_the_sphere_shape() {
    let mut session = small_session(None);
    session.observe_at(None, 0.0);
    assert_eq!(session.gesture(), Gesture::None);
    assert_eq!(session.confidence(), 0.0);
    assert_eq!(session.label(), "No Gesture");
    assert_eq!(session.active_shape(), Some(ShapeId::Sphere));
}

#[test]
fn thumbs_up_scatters_and_particles_move_toward_target() {
    let mut session = small_session(Some(Box::new(FlatRaster { value: 255 })));
    let thumbs = hand(true, false, false, false, false);
    session.observe_at(Some(&thumbs), 0.0);
    assert_eq!(session.gesture(), Gesture::ThumbsUp);
    assert_eq!(session.active_shape(), Some(ShapeId::Scatter));

    let before = session.positions().to_vec();
    for _ in 0..10 {
        session.tick();
    }
    let after = session.positions();
    let moved: f32 = before
        .iter()
        .zip(after)
        .map(|(b, a)| (b - a).abs())
        .sum();
    assert!(moved > 0.0, "particles should move toward the scatter cloud");
}

#[test]
fn throttle_holds_shape_switches_below_the_interval() {
    let mut session = small_session(Some(Box::new(FlatRaster { value: 255 })));
    let thumbs = hand(true, false, false, false, false);
    let palm = hand(false, true, true, true, true);

    session.observe_at(Some(&thumbs), 0.0);
    assert_eq!(session.active_shape(), Some(ShapeId::Scatter));

    // Palm arrives 10 ms later: classification updates, shape does not.
    session.observe_at(Some(&palm), 10.0);
    assert_eq!(session.gesture(), Gesture::OpenPalm);
    assert_eq!(session.active_shape(), Some(ShapeId::Scatter));

    // After the interval the gate adopts the palm and the sphere takes over.
    session.observe_at(Some(&palm), 200.0);
    assert_eq!(session.active_shape(), Some(ShapeId::Sphere));
}

#[test]
fn raster_failure_falls_back_to_sphere() {
    let mut session = small_session(Some(Box::new(BrokenRaster)));
    let index = hand(false, true, false, false, false);
    session.observe_at(Some(&index), 0.0);
    assert_eq!(session.gesture(), Gesture::Index);
    assert_eq!(session.active_shape(), Some(ShapeId::Sphere));
}

#[test]
fn missing_raster_falls_back_to_sphere() {
    let mut session = small_session(None);
    let peace = hand(false, true, true, false, false);
    session.observe_at(Some(&peace), 0.0);
    assert_eq!(session.active_shape(), Some(ShapeId::Sphere));
}

#[test]
fn blank_glyph_falls_back_to_sphere() {
    let mut session = small_session(Some(Box::new(FlatRaster { value: 0 })));
    let fist = hand(false, false, false, false, false);
    session.observe_at(Some(&fist), 0.0);
    assert_eq!(session.gesture(), Gesture::Fist);
    // Greeting rasterized to nothing: a valid empty shape, sphere stands in.
    assert_eq!(session.active_shape(), Some(ShapeId::Sphere));
}

#[test]
fn repeated_gesture_does_not_rebuild_the_target() {
    let mut session = small_session(Some(Box::new(FlatRaster { value: 255 })));
    let palm = hand(false, true, true, true, true);
    session.observe_at(Some(&palm), 0.0);
    session.tick();
    let mid = session.positions().to_vec();
    // Same gesture well past the interval: same shape, engine untouched.
    session.observe_at(Some(&palm), 500.0);
    assert_eq!(session.active_shape(), Some(ShapeId::Sphere));
    assert_eq!(session.positions(), &mid[..]);
}

#[test]
fn buffers_keep_their_length_across_switches() {
    let mut session = small_session(Some(Box::new(FlatRaster { value: 255 })));
    let n = session.particle_count();
    for (t, h) in [
        (0.0, hand(true, false, false, false, false)),
        (200.0, hand(false, true, true, false, false)),
        (400.0, hand(false, false, false, false, false)),
    ] {
        session.observe_at(Some(&h), t);
        session.tick();
        assert_eq!(session.positions().len(), 3 * n);
        assert_eq!(session.colors().len(), 3 * n);
    }
}
