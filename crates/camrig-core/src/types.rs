//! Value types shared by the configuration and host crates

use serde::{Deserialize, Serialize};

/// How a camera is placed in the scene.
///
/// Persisted by variant name; names are matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraType {
    /// Rendered from the player's head
    FirstPerson,
    /// Parented to an arbitrary scene object
    #[default]
    Attached,
    /// Free-standing; `targetPos`/`targetRot` are authoritative
    Positionable,
}

impl CameraType {
    /// Whether this camera sees the scene from the player's eyes
    pub fn is_first_person(&self) -> bool {
        matches!(self, CameraType::FirstPerson)
    }

    /// Whether the persisted target transform drives this camera
    pub fn is_positionable(&self) -> bool {
        matches!(self, CameraType::Positionable)
    }
}

/// How walls are drawn by a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WallVisibility {
    /// Walls with their textures
    #[default]
    Visible,
    /// Wall geometry only
    Transparent,
    /// No walls at all
    Hidden,
}

/// Screen-space rectangle a camera renders into, in output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewRect {
    /// Create a rectangle from its origin and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle covering the whole output area
    pub fn full(output_width: u32, output_height: u32) -> Self {
        Self::new(0.0, 0.0, output_width as f32, output_height as f32)
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Width over height, or `None` for a degenerate rectangle
    pub fn aspect(&self) -> Option<f32> {
        if self.height > 0.0 && self.width.is_finite() {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}
