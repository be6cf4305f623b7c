//! Camrig Core - Shared types for the camrig camera configuration crates
//!
//! This crate provides the value types every other crate speaks in:
//! - Camera kinds and wall visibility modes (persisted by name)
//! - The view rectangle and its derived aspect ratio
//! - The configuration error type

pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{CameraType, ViewRect, WallVisibility};
