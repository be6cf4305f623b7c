//! The persisted field set of one camera

use camrig_core::{CameraType, ViewRect};
use glam::{UVec2, Vec3};
use serde::Serialize;

use crate::{defaults, Extensions, VisibleObjects};

/// Every persisted value of a camera, written as one JSON document.
///
/// Key names are part of the on-disk format; the merger reads the same names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraFields {
    #[serde(rename = "type")]
    pub camera_type: CameraType,
    #[serde(rename = "showWorldCam")]
    pub show_world_cam: bool,
    #[serde(rename = "FOV")]
    pub field_of_view: f32,
    #[serde(rename = "layer")]
    pub order_index: i32,
    #[serde(rename = "antiAliasing")]
    pub anti_aliasing: i32,
    #[serde(rename = "renderScale")]
    pub render_scale: f32,
    #[serde(rename = "viewRect")]
    pub view_rect: ViewRect,
    #[serde(rename = "visibleObjects")]
    pub visible_objects: VisibleObjects,
    #[serde(rename = "targetPos")]
    pub target_position: Vec3,
    #[serde(rename = "targetRot")]
    pub target_rotation: Vec3,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl CameraFields {
    /// Fallback values for a camera rendering into an output of `output_size`
    pub fn defaults(output_size: UVec2) -> Self {
        Self {
            camera_type: CameraType::default(),
            show_world_cam: true,
            field_of_view: defaults::FIELD_OF_VIEW,
            order_index: 0,
            anti_aliasing: defaults::ANTI_ALIASING,
            render_scale: defaults::RENDER_SCALE,
            view_rect: ViewRect::full(output_size.x, output_size.y),
            visible_objects: VisibleObjects::default(),
            target_position: defaults::TARGET_POSITION,
            target_rotation: defaults::TARGET_ROTATION,
            extensions: Extensions::default(),
        }
    }

    /// Reset to defaults, keeping the order index this camera already holds
    pub fn reset(&mut self, output_size: UVec2) {
        let order_index = self.order_index;
        *self = Self::defaults(output_size);
        self.order_index = order_index;
    }
}
