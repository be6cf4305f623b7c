//! Command-line interface for camrig.

use anyhow::{Context, Result};
use camrig_config::SettingChange;
use camrig_core::{CameraType, ViewRect, WallVisibility};
use glam::Vec3;
use serde::de::DeserializeOwned;

/// What the command line asked for
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Treat the current scene as a wall-heavy map
    pub wall_map: bool,
    /// Cameras to create alongside the discovered ones
    pub cameras: Vec<String>,
    /// Edits to apply, by camera name, in order
    pub changes: Vec<(String, SettingChange)>,
}

impl CliArgs {
    /// Parse the process arguments.
    ///
    /// Supported forms:
    /// - `--wall-map` - the scene is probably a wall-heavy map
    /// - `<camera>` - create the camera if it does not exist
    /// - `<camera>:<key>=<value>` - apply one change, e.g. `Main:FOV=70`,
    ///   `Side:Walls=Hidden`, `Side:targetPos=0,2,-3`
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();

        for arg in args {
            if arg == "--wall-map" {
                parsed.wall_map = true;
                continue;
            }

            match arg.split_once(':') {
                Some((camera, assignment)) => {
                    let (key, value) = assignment
                        .split_once('=')
                        .with_context(|| format!("Expected <key>=<value> in '{}'", arg))?;
                    let change = parse_change(key, value)
                        .with_context(|| format!("Invalid setting '{}'", arg))?;
                    parsed.changes.push((camera.to_string(), change));
                }
                None => parsed.cameras.push(arg),
            }
        }

        Ok(parsed)
    }
}

/// Map a persisted key and a textual value to a change
fn parse_change(key: &str, value: &str) -> Result<SettingChange> {
    let change = match key {
        "type" => SettingChange::Type(parse_name::<CameraType>(value)?),
        "showWorldCam" => SettingChange::ShowWorldCam(value.parse()?),
        "FOV" => SettingChange::FieldOfView(value.parse()?),
        "layer" => SettingChange::OrderIndex(value.parse()?),
        "antiAliasing" => SettingChange::AntiAliasing(value.parse()?),
        "renderScale" => SettingChange::RenderScale(value.parse()?),
        "viewRect" => {
            let [x, y, width, height] = parse_floats::<4>(value)?;
            SettingChange::ViewRect(ViewRect::new(x, y, width, height))
        }
        "Walls" => SettingChange::Walls(parse_name::<WallVisibility>(value)?),
        "Debris" => SettingChange::Debris(value.parse()?),
        "UI" => SettingChange::Ui(value.parse()?),
        "Avatar" => SettingChange::Avatar(value.parse()?),
        "Floor" => SettingChange::Floor(value.parse()?),
        "Notes" => SettingChange::Notes(value.parse()?),
        "targetPos" => SettingChange::TargetPosition(Vec3::from_array(parse_floats::<3>(value)?)),
        "targetRot" => SettingChange::TargetRotation(Vec3::from_array(parse_floats::<3>(value)?)),
        _ => anyhow::bail!("Unknown camera setting '{}'", key),
    };
    Ok(change)
}

/// Enum values use the same case-sensitive names as the camera files
fn parse_name<T: DeserializeOwned>(value: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .with_context(|| format!("Unknown name '{}'", value))
}

fn parse_floats<const N: usize>(value: &str) -> Result<[f32; N]> {
    let floats = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    floats
        .try_into()
        .map_err(|floats: Vec<f32>| anyhow::anyhow!("Expected {} numbers, got {}", N, floats.len()))
}
