//! Recording camera backend for unit tests (no renderer required)

use glam::Vec3;

use crate::{CameraBackend, RenderLayers, RenderTargetDesc};

/// One call made against the backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    FieldOfView(f32),
    Depth(i32),
    Transform(Vec3, Vec3),
    WorldCam(bool),
    CullingMask(RenderLayers),
    Aspect(f32),
    RenderTarget(RenderTargetDesc),
}

impl BackendCall {
    pub fn kind(&self) -> &'static str {
        match self {
            BackendCall::FieldOfView(_) => "fov",
            BackendCall::Depth(_) => "depth",
            BackendCall::Transform(..) => "transform",
            BackendCall::WorldCam(_) => "world_cam",
            BackendCall::CullingMask(_) => "culling_mask",
            BackendCall::Aspect(_) => "aspect",
            BackendCall::RenderTarget(_) => "render_target",
        }
    }
}

/// Backend that keeps the applied state and a log of every write.
#[derive(Debug)]
pub struct RecordingCamera {
    pub calls: Vec<BackendCall>,
    pub world_cam: bool,
    pub mask: RenderLayers,
}

impl Default for RecordingCamera {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            world_cam: false,
            mask: RenderLayers::empty(),
        }
    }
}

impl RecordingCamera {
    pub fn call_kinds(&self) -> Vec<&'static str> {
        self.calls.iter().map(BackendCall::kind).collect()
    }

    pub fn mask_writes(&self) -> usize {
        self.count("culling_mask")
    }

    pub fn count(&self, kind: &str) -> usize {
        self.calls.iter().filter(|call| call.kind() == kind).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl CameraBackend for RecordingCamera {
    fn set_field_of_view(&mut self, degrees: f32) {
        self.calls.push(BackendCall::FieldOfView(degrees));
    }

    fn set_depth(&mut self, depth: i32) {
        self.calls.push(BackendCall::Depth(depth));
    }

    fn set_transform(&mut self, position: Vec3, rotation: Vec3) {
        self.calls.push(BackendCall::Transform(position, rotation));
    }

    fn world_cam_active(&self) -> bool {
        self.world_cam
    }

    fn set_world_cam_active(&mut self, active: bool) {
        self.world_cam = active;
        self.calls.push(BackendCall::WorldCam(active));
    }

    fn culling_mask(&self) -> RenderLayers {
        self.mask
    }

    fn set_culling_mask(&mut self, mask: RenderLayers) {
        self.mask = mask;
        self.calls.push(BackendCall::CullingMask(mask));
    }

    fn set_aspect(&mut self, aspect: f32) {
        self.calls.push(BackendCall::Aspect(aspect));
    }

    fn update_render_target(&mut self, desc: RenderTargetDesc) {
        self.calls.push(BackendCall::RenderTarget(desc));
    }
}
