//! Hard-coded fallback values used whenever persisted data is absent or invalid

use glam::Vec3;

/// Field of view every load starts from, in degrees
pub const FIELD_OF_VIEW: f32 = 90.0;

/// MSAA sample count for a fresh camera
pub const ANTI_ALIASING: i32 = 1;

/// Upper bound for the MSAA sample count
pub const MAX_ANTI_ALIASING: i32 = 8;

/// Render scale for a fresh camera
pub const RENDER_SCALE: f32 = 1.0;

/// Upper bound for the render scale
pub const MAX_RENDER_SCALE: f32 = 3.0;

/// Order index of the very first camera
pub const FIRST_ORDER_INDEX: i32 = -1000;

/// Where a positionable camera sits until told otherwise
pub const TARGET_POSITION: Vec3 = Vec3::new(0.0, 1.5, -1.5);

/// Euler angles (degrees) of a positionable camera until told otherwise
pub const TARGET_ROTATION: Vec3 = Vec3::new(3.0, 0.0, 0.0);

/// Clamp an anti-aliasing sample count into `[0, MAX_ANTI_ALIASING]`
pub fn clamp_anti_aliasing(samples: i32) -> i32 {
    samples.clamp(0, MAX_ANTI_ALIASING)
}

/// Clamp a render scale to at most `MAX_RENDER_SCALE`.
///
/// Returns `None` for values that can never be a scale (NaN, zero, negative).
pub fn clamp_render_scale(scale: f32) -> Option<f32> {
    if scale.is_nan() || scale <= 0.0 {
        return None;
    }
    Some(scale.min(MAX_RENDER_SCALE))
}

/// Order index for a camera created next to `siblings`: one below the lowest,
/// or `FIRST_ORDER_INDEX` when there are none.
pub fn next_order_index(siblings: &[i32]) -> i32 {
    siblings
        .iter()
        .min()
        .map_or(FIRST_ORDER_INDEX, |lowest| lowest.saturating_sub(1))
}
