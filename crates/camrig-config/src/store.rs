//! Reading and writing a camera's backing file

use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use camrig_core::ConfigError;
use glam::UVec2;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{defaults, merge, CameraFields};

/// What a load did, for hosts that want to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and overlaid; `skipped` lists keys that could not be applied
    Restored { skipped: Vec<String> },
    /// The file exists but could not be read or parsed; defaults stand
    Degraded,
    /// No file (or file reading disabled): a fresh camera was set up
    FirstRun {
        order_index: i32,
        /// Whether the fresh configuration made it to disk
        persisted: bool,
    },
}

/// Result of reading the backing file.
enum Document {
    Missing,
    Malformed,
    Parsed(Map<String, Value>),
}

/// The backing file of one camera.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Document {
        let content = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Document::Missing,
            Err(e) => {
                warn!("Failed to read camera config {:?}: {}", self.path, e);
                return Document::Malformed;
            }
        };

        match serde_json::from_slice::<Value>(&content) {
            Ok(Value::Object(document)) => Document::Parsed(document),
            Ok(_) => {
                warn!("Camera config {:?} is not a JSON object", self.path);
                Document::Malformed
            }
            Err(e) => {
                warn!("Failed to parse camera config {:?}: {}", self.path, e);
                Document::Malformed
            }
        }
    }

    /// Write the full field set, replacing whatever the file held
    pub fn save(&self, fields: &CameraFields) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
        }

        let content = ascii_json(&serde_json::to_string_pretty(fields)?);
        fs::write(&self.path, content).map_err(|e| ConfigError::io(&self.path, e))?;
        info!("Saved camera config to {:?}", self.path);
        Ok(())
    }

    /// Reset `fields` to defaults, then restore them from disk or set up a
    /// fresh camera. Never fails; problems are logged and absorbed.
    pub fn load_into(
        &self,
        fields: &mut CameraFields,
        from_file: bool,
        output_size: UVec2,
        siblings: &[i32],
    ) -> LoadOutcome {
        fields.reset(output_size);

        let document = if from_file {
            self.read()
        } else {
            Document::Missing
        };

        match document {
            Document::Parsed(document) => {
                let skipped = merge::overlay_document(fields, &document);
                info!("Loaded camera config from {:?}", self.path);
                LoadOutcome::Restored { skipped }
            }
            Document::Malformed => LoadOutcome::Degraded,
            Document::Missing => {
                fields.order_index = defaults::next_order_index(siblings);
                let persisted = match self.save(fields) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Failed to create camera config: {}", e);
                        false
                    }
                };
                LoadOutcome::FirstRun {
                    order_index: fields.order_index,
                    persisted,
                }
            }
        }
    }
}

/// Escape every non-ASCII character so the document stays ASCII on disk.
///
/// Outside strings JSON is ASCII already, so escaping is always valid.
fn ascii_json(json: &str) -> String {
    if json.is_ascii() {
        return json.to_owned();
    }
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{:04x}", unit);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use camrig_core::{CameraType, WallVisibility};
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    const OUTPUT: UVec2 = UVec2::new(1920, 1080);

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join("Main.json"))
    }

    #[test]
    fn test_first_run_with_no_siblings() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut fields = CameraFields::defaults(OUTPUT);

        let outcome = store.load_into(&mut fields, true, OUTPUT, &[]);

        assert_eq!(
            outcome,
            LoadOutcome::FirstRun {
                order_index: -1000,
                persisted: true
            }
        );
        assert!(store.path().exists());
    }

    #[test]
    fn test_first_run_goes_below_siblings() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut fields = CameraFields::defaults(OUTPUT);

        store.load_into(&mut fields, true, OUTPUT, &[5, 2, 9]);
        assert_eq!(fields.order_index, 1);
    }

    #[test]
    fn test_disabled_file_read_behaves_like_first_run() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{ "FOV": 30 }"#).unwrap();
        let mut fields = CameraFields::defaults(OUTPUT);

        let outcome = store.load_into(&mut fields, false, OUTPUT, &[4]);

        assert!(matches!(outcome, LoadOutcome::FirstRun { order_index: 3, .. }));
        assert_eq!(fields.field_of_view, 90.0);
    }

    #[test]
    fn test_malformed_document_degrades_to_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ \"FOV\": 30, ").unwrap();
        let mut fields = CameraFields::defaults(OUTPUT);
        fields.field_of_view = 12.0;
        fields.order_index = 7;

        let outcome = store.load_into(&mut fields, true, OUTPUT, &[]);

        assert_eq!(outcome, LoadOutcome::Degraded);
        assert_eq!(fields.field_of_view, 90.0);
        assert_eq!(fields.order_index, 7);
        // A broken file is left for the user to fix, not overwritten
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ \"FOV\": 30, ");
    }

    #[test]
    fn test_non_object_document_degrades() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[1, 2, 3]").unwrap();
        let mut fields = CameraFields::defaults(OUTPUT);

        assert_eq!(store.load_into(&mut fields, true, OUTPUT, &[]), LoadOutcome::Degraded);
    }

    #[test]
    fn test_round_trip_restores_every_field() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut fields = CameraFields::defaults(OUTPUT);
        fields.camera_type = CameraType::Positionable;
        fields.show_world_cam = false;
        fields.field_of_view = 72.5;
        fields.order_index = -4;
        fields.anti_aliasing = 4;
        fields.render_scale = 1.5;
        fields.view_rect = camrig_core::ViewRect::new(10.0, 20.0, 640.0, 360.0);
        fields.visible_objects.walls = WallVisibility::Transparent;
        fields.visible_objects.debris = false;
        fields.visible_objects.avatar = false;
        fields.target_position = glam::Vec3::new(1.0, 2.0, -3.0);
        fields.target_rotation = glam::Vec3::new(15.0, 90.0, 0.0);
        fields
            .extensions
            .follow_360
            .merge_from(json!({ "enabled": true }).as_object().unwrap());
        store.save(&fields).unwrap();

        let mut restored = CameraFields::defaults(UVec2::new(100, 100));
        let outcome = store.load_into(&mut restored, true, UVec2::new(100, 100), &[]);

        assert_eq!(outcome, LoadOutcome::Restored { skipped: vec![] });
        assert_eq!(restored, fields);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{ "type": "FirstPerson", "visibleObjects": { "Walls": false, "UI": false } }"#,
        )
        .unwrap();
        let mut fields = CameraFields::defaults(OUTPUT);

        let outcome = store.load_into(&mut fields, true, OUTPUT, &[]);

        assert_eq!(
            outcome,
            LoadOutcome::Restored {
                skipped: vec!["visibleObjects.Walls".to_string()]
            }
        );
        assert_eq!(fields.camera_type, CameraType::FirstPerson);
        assert_eq!(fields.visible_objects.walls, WallVisibility::Visible);
        assert!(!fields.visible_objects.ui);
        assert_eq!(fields.field_of_view, 90.0);
        assert_eq!(fields.view_rect, camrig_core::ViewRect::full(1920, 1080));
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("cameras").join("Side.json"));
        store.save(&CameraFields::defaults(OUTPUT)).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_surfaces_io_failure() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be
        let store = ConfigStore::new(dir.path());
        let err = store.save(&CameraFields::defaults(OUTPUT)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_saved_document_is_ascii() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut fields = CameraFields::defaults(OUTPUT);
        fields
            .extensions
            .map_extensions
            .merge_from(json!({ "label": "Kamera für 360°" }).as_object().unwrap());
        store.save(&fields).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.is_ascii());

        let mut restored = CameraFields::defaults(OUTPUT);
        store.load_into(&mut restored, true, OUTPUT, &[]);
        assert_eq!(
            restored.extensions.map_extensions.get("label"),
            Some(&json!("Kamera für 360°"))
        );
    }
}
