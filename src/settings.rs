//! Host settings with persistence
//!
//! Settings are saved to `~/.config/camrig/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use camrig_config::{RenderLayers, SceneHints};
use glam::UVec2;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All host settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub output: OutputSettings,
    pub scene: SceneSettings,
    pub cameras: CameraDirSettings,
}

impl AppSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("camrig"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, or return defaults if missing or broken
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Directory holding one JSON file per camera
    pub fn cameras_dir(&self) -> PathBuf {
        self.cameras
            .directory
            .clone()
            .or_else(|| Self::config_dir().map(|p| p.join("cameras")))
            .unwrap_or_else(|| PathBuf::from("cameras"))
    }

    /// The scene signals every camera's culling mask is derived against
    pub fn scene_hints(&self) -> SceneHints {
        SceneHints {
            output_size: UVec2::new(self.output.width, self.output.height),
            base_culling_mask: RenderLayers::from_raw(self.scene.base_culling_mask),
            auto_opaque_walls: self.scene.auto_opaque_walls,
            probably_wall_map: self.scene.probably_wall_map,
        }
    }
}

/// Output surface the cameras render into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Scene-wide signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Force walls opaque when the scene looks wall-heavy
    pub auto_opaque_walls: bool,
    /// Whether the current scene is probably a wall-heavy map
    pub probably_wall_map: bool,
    /// Every layer a camera may render
    pub base_culling_mask: u32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            auto_opaque_walls: false,
            probably_wall_map: false,
            base_culling_mask: u32::MAX,
        }
    }
}

/// Where camera configurations live
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDirSettings {
    /// Overrides the default `<config dir>/camrig/cameras`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}
