//! The reactive configuration of one camera

use std::path::{Path, PathBuf};

use camrig_core::{CameraType, ConfigError, ViewRect, WallVisibility};
use glam::Vec3;
use tracing::debug;

use crate::applier::{self, CameraBackend, Reconciled};
use crate::{defaults, CameraFields, ConfigStore, Extensions, LoadOutcome, SceneHints, VisibleObjects};

/// A single edit to a camera's configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingChange {
    Type(CameraType),
    ShowWorldCam(bool),
    FieldOfView(f32),
    OrderIndex(i32),
    /// Clamped into `[0, 8]`
    AntiAliasing(i32),
    /// Clamped to at most 3; non-positive values are ignored
    RenderScale(f32),
    ViewRect(ViewRect),
    Walls(WallVisibility),
    Debris(bool),
    Ui(bool),
    Avatar(bool),
    Floor(bool),
    Notes(bool),
    TargetPosition(Vec3),
    TargetRotation(Vec3),
}

/// Persisted, reactive configuration owned by one camera instance.
///
/// Fields are read through accessors and changed only through [`apply`],
/// [`edit_visibility`] and [`load`], each of which pushes the dependent state
/// onto the live camera before returning.
///
/// [`apply`]: CameraSettings::apply
/// [`edit_visibility`]: CameraSettings::edit_visibility
/// [`load`]: CameraSettings::load
#[derive(Debug, Clone)]
pub struct CameraSettings {
    store: ConfigStore,
    fields: CameraFields,
    /// Set once the first load has run
    loaded: bool,
}

impl CameraSettings {
    /// Configuration backed by the file at `path`, holding defaults until loaded
    pub fn new(path: impl Into<PathBuf>, scene: &SceneHints) -> Self {
        Self {
            store: ConfigStore::new(path),
            fields: CameraFields::defaults(scene.output_size),
            loaded: false,
        }
    }

    /// Reset to defaults, restore from disk (or create the file for a fresh
    /// camera), then push everything onto `camera`.
    ///
    /// `siblings` are the order indices of the other live cameras. The first
    /// load seeds the order index from them so a file without a usable
    /// `layer` still lands below every sibling; a persisted `layer` wins.
    pub fn load(
        &mut self,
        camera: &mut dyn CameraBackend,
        scene: &SceneHints,
        siblings: &[i32],
        from_file: bool,
    ) -> LoadOutcome {
        if !self.loaded {
            self.fields.order_index = defaults::next_order_index(siblings);
            self.loaded = true;
        }
        let outcome = self
            .store
            .load_into(&mut self.fields, from_file, scene.output_size, siblings);
        applier::apply_all(&self.fields, camera, scene);
        outcome
    }

    /// Write the complete field set to the backing file
    pub fn save(&self) -> Result<(), ConfigError> {
        self.store.save(&self.fields)
    }

    /// Store one change and reconcile exactly the camera state that depends on it
    pub fn apply(
        &mut self,
        change: SettingChange,
        camera: &mut dyn CameraBackend,
        scene: &SceneHints,
    ) -> Reconciled {
        let fields = &mut self.fields;
        match change {
            SettingChange::Type(camera_type) => {
                fields.camera_type = camera_type;
                applier::apply_transform(fields, camera)
                    | applier::activate_world_cam(fields, camera)
                    | applier::recompute_culling_mask(fields, camera, scene)
            }
            SettingChange::ShowWorldCam(show) => {
                fields.show_world_cam = show;
                applier::activate_world_cam(fields, camera)
            }
            SettingChange::FieldOfView(degrees) => {
                if !degrees.is_finite() {
                    debug!("Ignoring non-finite field of view");
                    return Reconciled::empty();
                }
                fields.field_of_view = degrees;
                applier::apply_field_of_view(fields, camera)
            }
            SettingChange::OrderIndex(order_index) => {
                fields.order_index = order_index;
                applier::apply_depth(fields, camera)
            }
            SettingChange::AntiAliasing(samples) => {
                fields.anti_aliasing = defaults::clamp_anti_aliasing(samples);
                applier::reconcile_viewport(fields, camera)
            }
            SettingChange::RenderScale(scale) => {
                let Some(scale) = defaults::clamp_render_scale(scale) else {
                    debug!("Ignoring render scale {}", scale);
                    return Reconciled::empty();
                };
                if scale == fields.render_scale {
                    return Reconciled::empty();
                }
                fields.render_scale = scale;
                applier::reconcile_viewport(fields, camera)
            }
            SettingChange::ViewRect(rect) => {
                if !rect.is_finite() {
                    debug!("Ignoring non-finite view rect {:?}", rect);
                    return Reconciled::empty();
                }
                fields.view_rect = rect;
                applier::reconcile_viewport(fields, camera)
            }
            SettingChange::Walls(walls) => {
                self.edit_visibility(camera, scene, |objects| objects.walls = walls)
            }
            SettingChange::Debris(show) => {
                self.edit_visibility(camera, scene, |objects| objects.debris = show)
            }
            SettingChange::Ui(show) => self.edit_visibility(camera, scene, |objects| objects.ui = show),
            SettingChange::Avatar(show) => {
                self.edit_visibility(camera, scene, |objects| objects.avatar = show)
            }
            SettingChange::Floor(show) => {
                self.edit_visibility(camera, scene, |objects| objects.floor = show)
            }
            SettingChange::Notes(show) => {
                self.edit_visibility(camera, scene, |objects| objects.notes = show)
            }
            SettingChange::TargetPosition(position) => {
                fields.target_position = position;
                applier::apply_transform(fields, camera)
            }
            SettingChange::TargetRotation(rotation) => {
                fields.target_rotation = rotation;
                applier::apply_transform(fields, camera)
            }
        }
    }

    /// Edit any number of visibility preferences, then recompute the mask once
    pub fn edit_visibility(
        &mut self,
        camera: &mut dyn CameraBackend,
        scene: &SceneHints,
        edit: impl FnOnce(&mut VisibleObjects),
    ) -> Reconciled {
        edit(&mut self.fields.visible_objects);
        applier::recompute_culling_mask(&self.fields, camera, scene)
    }

    /// Recompute the mask after the scene hints changed
    pub fn refresh_culling_mask(
        &self,
        camera: &mut dyn CameraBackend,
        scene: &SceneHints,
    ) -> Reconciled {
        applier::recompute_culling_mask(&self.fields, camera, scene)
    }

    /// Mutable access to the pass-through sub-feature blocks
    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.fields.extensions
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn fields(&self) -> &CameraFields {
        &self.fields
    }

    pub fn camera_type(&self) -> CameraType {
        self.fields.camera_type
    }

    pub fn show_world_cam(&self) -> bool {
        self.fields.show_world_cam
    }

    pub fn field_of_view(&self) -> f32 {
        self.fields.field_of_view
    }

    pub fn order_index(&self) -> i32 {
        self.fields.order_index
    }

    pub fn anti_aliasing(&self) -> i32 {
        self.fields.anti_aliasing
    }

    pub fn render_scale(&self) -> f32 {
        self.fields.render_scale
    }

    pub fn view_rect(&self) -> ViewRect {
        self.fields.view_rect
    }

    pub fn visible_objects(&self) -> &VisibleObjects {
        &self.fields.visible_objects
    }

    pub fn target_position(&self) -> Vec3 {
        self.fields.target_position
    }

    pub fn target_rotation(&self) -> Vec3 {
        self.fields.target_rotation
    }

    pub fn extensions(&self) -> &Extensions {
        &self.fields.extensions
    }
}
