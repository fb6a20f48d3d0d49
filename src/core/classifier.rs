// Gesture classification: 21 landmarks in, discrete gesture + confidence out.
// Pure functions only; every call derives finger state from scratch.

use glam::Vec3;

use super::constants::OPEN_PALM_MIN_RAISED;
use super::landmarks::{
    HandLandmarks, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP,
    PINKY_TIP, RING_PIP, RING_TIP, THUMB_TIP,
};
use super::shapes::ShapeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    ThumbsUp,
    Index,
    Peace,
    ThreeFingers,
    OpenPalm,
    Fist,
    None,
}

impl Gesture {
    /// Fixed total mapping from gesture to morph target.
    pub fn target_shape(self) -> ShapeId {
        match self {
            Gesture::ThumbsUp => ShapeId::Scatter,
            Gesture::Index => ShapeId::Hello,
            Gesture::Peace => ShapeId::Gemini,
            Gesture::ThreeFingers => ShapeId::Great,
            Gesture::OpenPalm => ShapeId::Sphere,
            Gesture::Fist => ShapeId::Greeting,
            Gesture::None => ShapeId::Sphere,
        }
    }

    /// Display label for the UI layer.
    pub fn label(self) -> &'static str {
        match self {
            Gesture::ThumbsUp => "Thumbs Up",
            Gesture::Index => "Index Finger",
            Gesture::Peace => "Peace",
            Gesture::ThreeFingers => "Three Fingers",
            Gesture::OpenPalm => "Open Palm",
            Gesture::Fist => "Fist",
            Gesture::None => "No Gesture",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureResult {
    pub gesture: Gesture,
    pub confidence: f32,
}

impl GestureResult {
    pub fn none() -> Self {
        Self {
            gesture: Gesture::None,
            confidence: 0.0,
        }
    }

    fn certain(gesture: Gesture) -> Self {
        Self {
            gesture,
            confidence: 1.0,
        }
    }
}

/// Per-finger "raised" flags for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Number of raised fingers among index/middle/ring/pinky. The thumb is
    /// deliberately excluded from this count.
    pub fn raised_count(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&raised| raised)
            .count()
    }
}

/// Derive raised flags from one frame. Image coordinate convention: smaller
/// y is higher on screen, so a finger is raised when its tip sits above its
/// PIP joint. The thumb has no PIP on that chain; it is compared against the
/// index MCP instead, which is not rotation-invariant.
pub fn finger_state(hand: &HandLandmarks) -> FingerState {
    let p = hand.points();
    let raised = |tip: usize, pip: usize| p[tip].y < p[pip].y;
    FingerState {
        thumb: p[THUMB_TIP].y < p[INDEX_MCP].y,
        index: raised(INDEX_TIP, INDEX_PIP),
        middle: raised(MIDDLE_TIP, MIDDLE_PIP),
        ring: raised(RING_TIP, RING_PIP),
        pinky: raised(PINKY_TIP, PINKY_PIP),
    }
}

/// Classify one frame. Absent hand yields `{None, 0.0}`. Decision order is
/// fixed: first matching rule wins, and every match except the fallback
/// carries confidence 1.0.
pub fn classify(hand: Option<&HandLandmarks>) -> GestureResult {
    let Some(hand) = hand else {
        return GestureResult::none();
    };
    let fingers = finger_state(hand);
    let count = fingers.raised_count();

    if fingers.thumb && count == 0 {
        return GestureResult::certain(Gesture::ThumbsUp);
    }
    if fingers.index && !fingers.middle && !fingers.ring && !fingers.pinky {
        return GestureResult::certain(Gesture::Index);
    }
    if fingers.index && fingers.middle && !fingers.ring && !fingers.pinky {
        return GestureResult::certain(Gesture::Peace);
    }
    if fingers.index && fingers.middle && fingers.ring && !fingers.pinky {
        return GestureResult::certain(Gesture::ThreeFingers);
    }
    if count >= OPEN_PALM_MIN_RAISED {
        return GestureResult::certain(Gesture::OpenPalm);
    }
    if count == 0 {
        return GestureResult::certain(Gesture::Fist);
    }
    GestureResult::none()
}

/// Reference point for the hand: the middle-finger MCP. Used by the display
/// layer for rotation control, not by classification.
pub fn hand_center(hand: &HandLandmarks) -> Vec3 {
    hand.points()[MIDDLE_MCP]
}
