//! Tolerant overlay of a persisted document onto a camera's fields
//!
//! Every field is extracted on its own. A value of the wrong shape is logged,
//! recorded as skipped, and the field keeps whatever it held before. Absent
//! keys, `null` values and unknown keys leave the target untouched.

use glam::Vec3;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::{defaults, CameraFields};

/// Field-by-field reader over one JSON object.
pub struct TolerantMerge<'a> {
    document: &'a Map<String, Value>,
    prefix: String,
    skipped: Vec<String>,
}

impl<'a> TolerantMerge<'a> {
    pub fn new(document: &'a Map<String, Value>) -> Self {
        Self {
            document,
            prefix: String::new(),
            skipped: Vec::new(),
        }
    }

    fn qualified(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn skip(&mut self, key: &str, reason: impl std::fmt::Display) {
        let key = self.qualified(key);
        warn!("Skipping camera setting '{}': {}", key, reason);
        self.skipped.push(key);
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.document.get(key).filter(|value| !value.is_null())
    }

    /// Typed value for `key`, or `None` when absent or of the wrong shape
    pub fn extract<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let value = self.present(key)?;
        match T::deserialize(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.skip(key, e);
                None
            }
        }
    }

    /// Replace `target` with the value under `key` if it extracts cleanly
    pub fn overlay<T: DeserializeOwned>(&mut self, key: &str, target: &mut T) {
        if let Some(value) = self.extract(key) {
            *target = value;
        }
    }

    /// Nested object under `key`, or `None` when absent or not an object
    pub fn object(&mut self, key: &str) -> Option<&'a Map<String, Value>> {
        let value = self.present(key)?;
        match value.as_object() {
            Some(map) => Some(map),
            None => {
                self.skip(key, "expected an object");
                None
            }
        }
    }

    /// Run `merge` against the object under `key`, collecting its skipped keys
    pub fn section(&mut self, key: &str, merge: impl FnOnce(&mut TolerantMerge<'a>)) {
        let Some(document) = self.object(key) else {
            return;
        };
        let mut nested = TolerantMerge {
            document,
            prefix: format!("{}.", self.qualified(key)),
            skipped: Vec::new(),
        };
        merge(&mut nested);
        self.skipped.append(&mut nested.skipped);
    }

    /// Keys that were present but could not be applied
    pub fn into_skipped(self) -> Vec<String> {
        self.skipped
    }
}

/// Vectors are written as `[x, y, z]`; hand-edited files may use objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum VectorRepr {
    Array([f32; 3]),
    Object { x: f32, y: f32, z: f32 },
}

impl From<VectorRepr> for Vec3 {
    fn from(repr: VectorRepr) -> Self {
        match repr {
            VectorRepr::Array([x, y, z]) => Vec3::new(x, y, z),
            VectorRepr::Object { x, y, z } => Vec3::new(x, y, z),
        }
    }
}

/// Overlay `document` onto `fields`, returning the keys that were skipped.
pub fn overlay_document(fields: &mut CameraFields, document: &Map<String, Value>) -> Vec<String> {
    let mut merge = TolerantMerge::new(document);

    merge.overlay("type", &mut fields.camera_type);
    merge.overlay("showWorldCam", &mut fields.show_world_cam);
    merge.overlay("FOV", &mut fields.field_of_view);
    merge.overlay("layer", &mut fields.order_index);

    if let Some(samples) = merge.extract::<i32>("antiAliasing") {
        fields.anti_aliasing = defaults::clamp_anti_aliasing(samples);
    }
    if let Some(scale) = merge.extract::<f32>("renderScale") {
        match defaults::clamp_render_scale(scale) {
            Some(scale) => fields.render_scale = scale,
            None => merge.skip("renderScale", "not a positive scale"),
        }
    }

    merge.overlay("viewRect", &mut fields.view_rect);

    let objects = &mut fields.visible_objects;
    merge.section("visibleObjects", |section| {
        section.overlay("Walls", &mut objects.walls);
        section.overlay("Debris", &mut objects.debris);
        section.overlay("UI", &mut objects.ui);
        section.overlay("Avatar", &mut objects.avatar);
        section.overlay("Floor", &mut objects.floor);
        section.overlay("Notes", &mut objects.notes);
    });

    if let Some(position) = merge.extract::<VectorRepr>("targetPos") {
        fields.target_position = position.into();
    }
    if let Some(rotation) = merge.extract::<VectorRepr>("targetRot") {
        fields.target_rotation = rotation.into();
    }

    for (key, block) in fields.extensions.blocks_mut() {
        if let Some(persisted) = merge.object(key) {
            block.merge_from(persisted);
        }
    }

    merge.into_skipped()
}
