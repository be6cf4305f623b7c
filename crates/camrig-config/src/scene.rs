//! Read-only signals about the host scene

use glam::UVec2;

use crate::RenderLayers;

/// Snapshot of what the host knows about the current scene and output.
///
/// Supplied by the host on every call that needs it; never stored by a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHints {
    /// Size of the full output area in pixels
    pub output_size: UVec2,
    /// Every layer this camera class may render
    pub base_culling_mask: RenderLayers,
    /// Host feature flag: force walls opaque on wall-heavy maps
    pub auto_opaque_walls: bool,
    /// Heuristic: the current scene is probably a wall-heavy map
    pub probably_wall_map: bool,
}

impl SceneHints {
    /// Whether walls must be drawn opaque regardless of the camera's preference
    pub fn forces_opaque_walls(&self) -> bool {
        self.auto_opaque_walls && self.probably_wall_map
    }
}

impl Default for SceneHints {
    fn default() -> Self {
        Self {
            output_size: UVec2::new(1920, 1080),
            base_culling_mask: RenderLayers::from_raw(u32::MAX),
            auto_opaque_walls: false,
            probably_wall_map: false,
        }
    }
}
