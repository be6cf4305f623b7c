//! Pushing configuration onto the live camera
//!
//! Each step is independently callable and safe to repeat. A full load runs
//! them in a fixed order; see [`apply_all`].

use bitflags::bitflags;
use glam::Vec3;
use tracing::debug;

use crate::{mask, CameraFields, RenderLayers, SceneHints};

/// Parameters the backend needs to (re)allocate a camera's render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTargetDesc {
    pub width: u32,
    pub height: u32,
    /// MSAA sample count, 0 for none
    pub msaa_samples: u32,
    pub render_scale: f32,
}

impl RenderTargetDesc {
    pub fn from_fields(fields: &CameraFields) -> Self {
        let scaled = |extent: f32| (extent * fields.render_scale).round().max(1.0) as u32;
        Self {
            width: scaled(fields.view_rect.width),
            height: scaled(fields.view_rect.height),
            msaa_samples: fields.anti_aliasing.max(0) as u32,
            render_scale: fields.render_scale,
        }
    }
}

/// The live camera a configuration drives. Implemented by the rendering host.
pub trait CameraBackend {
    fn set_field_of_view(&mut self, degrees: f32);

    /// Render/compositing depth; lower draws first
    fn set_depth(&mut self, depth: i32);

    /// World position and euler angles in degrees
    fn set_transform(&mut self, position: Vec3, rotation: Vec3);

    fn world_cam_active(&self) -> bool;

    fn set_world_cam_active(&mut self, active: bool);

    /// The mask currently applied to the camera
    fn culling_mask(&self) -> RenderLayers;

    fn set_culling_mask(&mut self, mask: RenderLayers);

    fn set_aspect(&mut self, aspect: f32);

    /// Reallocate the render target with new parameters
    fn update_render_target(&mut self, desc: RenderTargetDesc);
}

bitflags! {
    /// Which steps wrote to the live camera during an operation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Reconciled: u8 {
        const FIELD_OF_VIEW = 1 << 0;
        /// Depth changed; the host should re-sort its cameras
        const DEPTH = 1 << 1;
        const TRANSFORM = 1 << 2;
        const WORLD_CAM = 1 << 3;
        const CULLING_MASK = 1 << 4;
        const VIEWPORT = 1 << 5;
    }
}

pub fn apply_field_of_view(fields: &CameraFields, camera: &mut dyn CameraBackend) -> Reconciled {
    camera.set_field_of_view(fields.field_of_view);
    Reconciled::FIELD_OF_VIEW
}

pub fn apply_depth(fields: &CameraFields, camera: &mut dyn CameraBackend) -> Reconciled {
    camera.set_depth(fields.order_index);
    Reconciled::DEPTH
}

/// Write the target transform; only positionable cameras are placed this way
pub fn apply_transform(fields: &CameraFields, camera: &mut dyn CameraBackend) -> Reconciled {
    if !fields.camera_type.is_positionable() {
        return Reconciled::empty();
    }
    camera.set_transform(fields.target_position, fields.target_rotation);
    Reconciled::TRANSFORM
}

/// Enable the world-observing camera for non-first-person cameras that want it
pub fn activate_world_cam(fields: &CameraFields, camera: &mut dyn CameraBackend) -> Reconciled {
    let wanted = fields.show_world_cam && !fields.camera_type.is_first_person();
    if camera.world_cam_active() == wanted {
        return Reconciled::empty();
    }
    camera.set_world_cam_active(wanted);
    Reconciled::WORLD_CAM
}

/// Recompute the culling mask, writing it only when it differs from the applied one
pub fn recompute_culling_mask(
    fields: &CameraFields,
    camera: &mut dyn CameraBackend,
    scene: &SceneHints,
) -> Reconciled {
    let mask = mask::culling_mask(&fields.visible_objects, fields.camera_type, scene);
    if camera.culling_mask() == mask {
        return Reconciled::empty();
    }
    debug!("Culling mask {:#x} -> {:#x}", camera.culling_mask().bits(), mask.bits());
    camera.set_culling_mask(mask);
    Reconciled::CULLING_MASK
}

/// Reapply the aspect ratio and have the backend resize the render target
pub fn reconcile_viewport(fields: &CameraFields, camera: &mut dyn CameraBackend) -> Reconciled {
    if let Some(aspect) = fields.view_rect.aspect() {
        camera.set_aspect(aspect);
    } else {
        debug!("Degenerate view rect {:?}, keeping aspect", fields.view_rect);
    }
    camera.update_render_target(RenderTargetDesc::from_fields(fields));
    Reconciled::VIEWPORT
}

/// Everything a fresh load needs, in order: field of view and depth, then
/// transform, world camera, culling mask, and finally the viewport.
pub fn apply_all(
    fields: &CameraFields,
    camera: &mut dyn CameraBackend,
    scene: &SceneHints,
) -> Reconciled {
    apply_field_of_view(fields, camera)
        | apply_depth(fields, camera)
        | apply_transform(fields, camera)
        | activate_world_cam(fields, camera)
        | recompute_culling_mask(fields, camera, scene)
        | reconcile_viewport(fields, camera)
}
