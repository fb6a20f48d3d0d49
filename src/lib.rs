#![cfg(target_arch = "wasm32")]
use crate::core::{classifier, HandLandmarks, MorphSession, TextRaster};
use wasm_bindgen::prelude::*;

mod core;
mod raster;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gesture-morph-web starting");
    Ok(())
}

/// Host-facing facade. The JS side owns camera capture, landmark detection
/// and the point-cloud renderer; it constructs one `MorphApp`, feeds it the
/// detector output and calls `tick` once per animation frame, then uploads
/// the position/color buffers to the scene.
#[wasm_bindgen]
pub struct MorphApp {
    session: MorphSession,
    hand: Option<HandLandmarks>,
}

impl Default for MorphApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MorphApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MorphApp {
        let text_raster: Option<Box<dyn TextRaster>> = match raster::CanvasRaster::new() {
            Ok(r) => Some(Box::new(r)),
            Err(e) => {
                log::error!("canvas raster init failed ({e}); text shapes fall back to sphere");
                None
            }
        };
        // Seed from wall time so the initial cloud and scatter differ per load.
        let seed = js_sys::Date::now() as u64 | 1;
        MorphApp {
            session: MorphSession::new(text_raster, seed),
            hand: None,
        }
    }

    /// Latest detector frame: 63 floats, 21 landmarks xyz-interleaved.
    /// Any other length is treated as "no hand."
    pub fn set_landmarks(&mut self, flat: &[f32]) {
        self.hand = HandLandmarks::from_flat(flat);
    }

    pub fn clear_landmarks(&mut self) {
        self.hand = None;
    }

    /// Advance one frame: classify, maybe switch target, interpolate.
    pub fn tick(&mut self) {
        let hand = self.hand;
        self.session.observe(hand.as_ref());
        self.session.tick();
    }

    /// Current particle positions, `3 * particle_count` floats.
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.session.positions())
    }

    /// Current particle colors, `3 * particle_count` floats.
    pub fn colors(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.session.colors())
    }

    pub fn particle_count(&self) -> usize {
        self.session.particle_count()
    }

    pub fn gesture_label(&self) -> String {
        self.session.label().to_string()
    }

    pub fn gesture_confidence(&self) -> f32 {
        self.session.confidence()
    }

    /// Normalized x of the hand center, for display-layer rotation control.
    pub fn hand_center_x(&self) -> Option<f32> {
        self.hand.as_ref().map(|h| classifier::hand_center(h).x)
    }

    /// Normalized y of the hand center.
    pub fn hand_center_y(&self) -> Option<f32> {
        self.hand.as_ref().map(|h| classifier::hand_center(h).y)
    }
}
