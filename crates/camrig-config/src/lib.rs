//! Camrig Config - Persisted, reactive configuration of a virtual camera
//!
//! One [`CameraSettings`] per camera instance. It restores itself from a JSON
//! document while tolerating missing, stale and malformed fields, derives the
//! camera's culling mask from its visibility preferences, and pushes every
//! change onto the live camera through the [`CameraBackend`] trait in a fixed
//! order.

pub mod applier;
pub mod defaults;
mod extensions;
mod fields;
mod layers;
pub mod mask;
pub mod merge;
mod scene;
mod settings;
mod store;
mod visible_objects;

#[cfg(test)]
mod testing;

pub use applier::{CameraBackend, Reconciled, RenderTargetDesc};
pub use extensions::{ExtensionBlock, Extensions};
pub use fields::CameraFields;
pub use layers::RenderLayers;
pub use mask::culling_mask;
pub use scene::SceneHints;
pub use settings::{CameraSettings, SettingChange};
pub use store::{ConfigStore, LoadOutcome};
pub use visible_objects::VisibleObjects;
