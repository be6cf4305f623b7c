//! Registry of live camera instances
//!
//! Owns every camera, derives order indices for new ones from their siblings,
//! and keeps the instance list in compositing order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use camrig_config::{CameraSettings, LoadOutcome, Reconciled, SceneHints, SettingChange};
use tracing::{info, warn};

use crate::headless::HeadlessCamera;

/// Camera created when the cameras directory is empty
pub const DEFAULT_CAMERA: &str = "Main";

/// One camera: its configuration and the live camera it drives
#[derive(Debug)]
pub struct CameraInstance {
    pub name: String,
    pub settings: CameraSettings,
    pub camera: HeadlessCamera,
}

/// All live cameras, sorted by order index
pub struct CameraRig {
    cameras_dir: PathBuf,
    scene: SceneHints,
    instances: Vec<CameraInstance>,
}

impl CameraRig {
    pub fn new(cameras_dir: impl Into<PathBuf>, scene: SceneHints) -> Self {
        Self {
            cameras_dir: cameras_dir.into(),
            scene,
            instances: Vec::new(),
        }
    }

    pub fn cameras_dir(&self) -> &Path {
        &self.cameras_dir
    }

    /// Instances in compositing order (lowest order index first)
    pub fn instances(&self) -> &[CameraInstance] {
        &self.instances
    }

    pub fn get(&self, name: &str) -> Option<&CameraInstance> {
        self.instances.iter().find(|instance| instance.name == name)
    }

    /// Order indices of every live camera
    pub fn order_indices(&self) -> Vec<i32> {
        self.instances
            .iter()
            .map(|instance| instance.settings.order_index())
            .collect()
    }

    fn config_path(&self, name: &str) -> PathBuf {
        self.cameras_dir.join(format!("{}.json", sanitize_name(name)))
    }

    /// Create and load a camera. A camera without a file is created below
    /// every existing one.
    pub fn spawn(&mut self, name: &str) -> Result<&CameraInstance> {
        if self.get(name).is_some() {
            anyhow::bail!("Camera '{}' already exists", name);
        }

        let path = self.config_path(name);
        if let Some(owner) = self
            .instances
            .iter()
            .find(|instance| instance.settings.path() == path.as_path())
        {
            anyhow::bail!(
                "Camera '{}' would share {:?} with camera '{}'",
                name,
                path,
                owner.name
            );
        }

        let siblings = self.order_indices();
        let mut settings = CameraSettings::new(path, &self.scene);
        let mut camera = HeadlessCamera::new(name);

        match settings.load(&mut camera, &self.scene, &siblings, true) {
            LoadOutcome::Restored { skipped } if skipped.is_empty() => {
                info!("Camera '{}' restored", name);
            }
            LoadOutcome::Restored { skipped } => {
                warn!("Camera '{}' restored without: {}", name, skipped.join(", "));
            }
            LoadOutcome::Degraded => {
                warn!("Camera '{}' config unreadable, running on defaults", name);
            }
            LoadOutcome::FirstRun {
                order_index,
                persisted,
            } => {
                info!(
                    "Camera '{}' created at order index {} (saved: {})",
                    name, order_index, persisted
                );
            }
        }

        self.instances.push(CameraInstance {
            name: name.to_string(),
            settings,
            camera,
        });
        self.apply_viewport_layers();

        self.get(name)
            .context("Camera vanished right after it was spawned")
    }

    /// Spawn a camera for every `*.json` file in the cameras directory, or the
    /// default camera when there are none. Returns how many were spawned.
    pub fn discover(&mut self) -> Result<usize> {
        fs::create_dir_all(&self.cameras_dir).context("Failed to create cameras directory")?;

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.cameras_dir).context("Failed to read cameras directory")? {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();

        if names.is_empty() {
            names.push(DEFAULT_CAMERA.to_string());
        }

        let mut spawned = 0;
        for name in &names {
            if self.get(name).is_none() {
                self.spawn(name)?;
                spawned += 1;
            }
        }
        Ok(spawned)
    }

    /// Apply one change to a camera, re-sorting when its depth moved
    pub fn apply(&mut self, name: &str, change: SettingChange) -> Result<Reconciled> {
        let scene = self.scene;
        let instance = self
            .instances
            .iter_mut()
            .find(|instance| instance.name == name)
            .with_context(|| format!("No camera named '{}'", name))?;

        let done = instance
            .settings
            .apply(change, &mut instance.camera, &scene);
        if done.contains(Reconciled::DEPTH) {
            self.apply_viewport_layers();
        }
        Ok(done)
    }

    /// Persist one camera's configuration
    pub fn save(&self, name: &str) -> Result<()> {
        let instance = self
            .get(name)
            .with_context(|| format!("No camera named '{}'", name))?;
        instance
            .settings
            .save()
            .with_context(|| format!("Failed to save camera '{}'", name))
    }

    /// Persist every camera, stopping at the first failure
    pub fn save_all(&self) -> Result<()> {
        for instance in &self.instances {
            self.save(&instance.name)?;
        }
        Ok(())
    }

    /// Swap in new scene signals and refresh every camera's culling mask
    pub fn set_scene(&mut self, scene: SceneHints) {
        self.scene = scene;
        for instance in &mut self.instances {
            instance
                .settings
                .refresh_culling_mask(&mut instance.camera, &scene);
        }
    }

    fn apply_viewport_layers(&mut self) {
        self.instances
            .sort_by_key(|instance| instance.settings.order_index());
    }
}

/// Make a camera name safe to use as a file name
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' { c } else { '_' })
        .collect()
}
