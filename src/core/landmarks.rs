// Hand landmark layout as delivered by the detection provider: 21 joints,
// x/y normalized to [0, 1] in image space, z relative to wrist depth.

use glam::Vec3;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// One detected hand: exactly 21 ordered joints. Anything that is not
/// 21 points is treated as "no hand" upstream, so this type never holds a
/// partial frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse the provider's flat buffer (21 * 3 floats, xyz interleaved).
    /// Any other length yields `None`.
    pub fn from_flat(flat: &[f32]) -> Option<Self> {
        if flat.len() != LANDMARK_COUNT * 3 {
            return None;
        }
        let mut points = [Vec3::ZERO; LANDMARK_COUNT];
        for (i, xyz) in flat.chunks_exact(3).enumerate() {
            points[i] = Vec3::new(xyz[0], xyz[1], xyz[2]);
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Vec3; LANDMARK_COUNT] {
        &self.points
    }

    /// Bounds-checked accessor for diagnostics and display-layer use.
    pub fn point(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }
}
