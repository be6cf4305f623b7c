//! Sub-feature configuration blocks persisted alongside a camera
//!
//! Smoothing, FPS limiting, 360° framing and map heuristics are owned by
//! other systems. A camera stores and writes them back verbatim without
//! interpreting any key.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// An opaque nested document with its own defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ExtensionBlock(Map<String, Value>);

impl ExtensionBlock {
    fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Overlay persisted keys onto this block, keeping defaults for keys the
    /// document lacks and keys this block has never heard of.
    pub fn merge_from(&mut self, persisted: &Map<String, Value>) {
        for (key, value) in persisted {
            if !value.is_null() {
                self.0.insert(key.clone(), value.clone());
            }
        }
    }

    /// Raw value for a key, for the system that owns this block
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All keys and values
    pub fn entries(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// The four sub-feature blocks of a camera.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extensions {
    #[serde(rename = "FPSLimiter")]
    pub fps_limiter: ExtensionBlock,
    #[serde(rename = "Smoothfollow")]
    pub smooth_follow: ExtensionBlock,
    #[serde(rename = "ModmapExtensions")]
    pub map_extensions: ExtensionBlock,
    #[serde(rename = "Follow360")]
    pub follow_360: ExtensionBlock,
}

impl Extensions {
    /// Persisted key of each block, paired with the block itself
    pub fn blocks_mut(&mut self) -> [(&'static str, &mut ExtensionBlock); 4] {
        [
            ("FPSLimiter", &mut self.fps_limiter),
            ("Smoothfollow", &mut self.smooth_follow),
            ("ModmapExtensions", &mut self.map_extensions),
            ("Follow360", &mut self.follow_360),
        ]
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            // 0 = unlimited
            fps_limiter: ExtensionBlock::from_json(json!({ "fpsLimit": 0 })),
            smooth_follow: ExtensionBlock::from_json(json!({
                "position": 10.0,
                "rotation": 4.0,
                "forceUpright": false,
                "followReplayPosition": true,
            })),
            map_extensions: ExtensionBlock::from_json(json!({ "moveWithMap": true })),
            follow_360: ExtensionBlock::from_json(json!({
                "enabled": false,
                "smoothing": 2.0,
            })),
        }
    }
}
