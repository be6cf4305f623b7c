//! Camera backend without a renderer
//!
//! Keeps whatever state the configuration pushes and logs each write, so the
//! host can run and report on cameras with no graphics device.

use camrig_config::{CameraBackend, RenderLayers, RenderTargetDesc};
use glam::Vec3;
use tracing::debug;

/// Live state of one camera as last applied
#[derive(Debug, Clone)]
pub struct HeadlessCamera {
    name: String,
    pub field_of_view: f32,
    pub depth: i32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub world_cam: bool,
    pub culling_mask: RenderLayers,
    pub aspect: f32,
    pub render_target: Option<RenderTargetDesc>,
    /// How many times the render target was reallocated
    pub reallocations: u32,
}

impl HeadlessCamera {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_of_view: 60.0,
            depth: 0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            world_cam: false,
            culling_mask: RenderLayers::empty(),
            aspect: 1.0,
            render_target: None,
            reallocations: 0,
        }
    }
}

impl CameraBackend for HeadlessCamera {
    fn set_field_of_view(&mut self, degrees: f32) {
        debug!("[{}] fov = {}", self.name, degrees);
        self.field_of_view = degrees;
    }

    fn set_depth(&mut self, depth: i32) {
        debug!("[{}] depth = {}", self.name, depth);
        self.depth = depth;
    }

    fn set_transform(&mut self, position: Vec3, rotation: Vec3) {
        debug!("[{}] transform = {} / {}", self.name, position, rotation);
        self.position = position;
        self.rotation = rotation;
    }

    fn world_cam_active(&self) -> bool {
        self.world_cam
    }

    fn set_world_cam_active(&mut self, active: bool) {
        debug!("[{}] world cam = {}", self.name, active);
        self.world_cam = active;
    }

    fn culling_mask(&self) -> RenderLayers {
        self.culling_mask
    }

    fn set_culling_mask(&mut self, mask: RenderLayers) {
        debug!("[{}] culling mask = {:#x}", self.name, mask.bits());
        self.culling_mask = mask;
    }

    fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    fn update_render_target(&mut self, desc: RenderTargetDesc) {
        debug!(
            "[{}] render target {}x{} msaa {}",
            self.name, desc.width, desc.height, desc.msaa_samples
        );
        self.render_target = Some(desc);
        self.reallocations += 1;
    }
}
