//! Per-camera visibility preferences

use camrig_core::WallVisibility;
use serde::Serialize;

/// Which categories of scene content a camera wants to see.
///
/// A camera only hands this out by shared reference; edits go through
/// [`CameraSettings::edit_visibility`](crate::CameraSettings::edit_visibility)
/// or [`SettingChange`](crate::SettingChange) so the culling mask follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleObjects {
    #[serde(rename = "Walls")]
    pub walls: WallVisibility,
    #[serde(rename = "Debris")]
    pub debris: bool,
    #[serde(rename = "UI")]
    pub ui: bool,
    #[serde(rename = "Avatar")]
    pub avatar: bool,
    #[serde(rename = "Floor")]
    pub floor: bool,
    #[serde(rename = "Notes")]
    pub notes: bool,
}

impl Default for VisibleObjects {
    fn default() -> Self {
        Self {
            walls: WallVisibility::Visible,
            debris: true,
            ui: true,
            avatar: true,
            floor: true,
            notes: true,
        }
    }
}
