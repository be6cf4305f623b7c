//! Culling mask derivation

use camrig_core::{CameraType, WallVisibility};

use crate::{RenderLayers, SceneHints, VisibleObjects};

/// Derive the culling mask for a camera.
///
/// Starts from the scene's base mask with every visibility bit cleared, then
/// adds bits back from the preferences. Pure: the same inputs always give the
/// same mask.
pub fn culling_mask(
    objects: &VisibleObjects,
    camera_type: CameraType,
    scene: &SceneHints,
) -> RenderLayers {
    let mut mask = scene.base_culling_mask - RenderLayers::VISIBILITY;

    if objects.walls == WallVisibility::Visible || scene.forces_opaque_walls() {
        mask |= RenderLayers::WALLS | RenderLayers::WALL_TEXTURES;
    } else if objects.walls == WallVisibility::Transparent {
        mask |= RenderLayers::WALLS;
    }

    mask.set(RenderLayers::FLOOR, objects.floor);
    mask.set(RenderLayers::NOTES, objects.notes);
    mask.set(RenderLayers::DEBRIS, objects.debris);
    mask.set(RenderLayers::UI, objects.ui);
    mask.set(RenderLayers::AVATAR, objects.avatar);

    mask |= if camera_type.is_first_person() {
        RenderLayers::FIRST_PERSON
    } else {
        RenderLayers::THIRD_PERSON
    };

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST_BITS: u32 = 0b111;

    fn scene() -> SceneHints {
        SceneHints {
            base_culling_mask: RenderLayers::from_raw(HOST_BITS) | RenderLayers::VISIBILITY,
            ..SceneHints::default()
        }
    }

    fn base() -> RenderLayers {
        RenderLayers::from_raw(HOST_BITS)
    }

    #[test]
    fn test_visible_walls_first_person() {
        let objects = VisibleObjects {
            walls: WallVisibility::Visible,
            floor: true,
            notes: false,
            debris: false,
            ui: false,
            avatar: false,
        };
        let mask = culling_mask(&objects, CameraType::FirstPerson, &scene());
        assert_eq!(
            mask,
            base()
                | RenderLayers::WALLS
                | RenderLayers::WALL_TEXTURES
                | RenderLayers::FLOOR
                | RenderLayers::FIRST_PERSON
        );
    }

    #[test]
    fn test_hidden_walls_third_person() {
        let objects = VisibleObjects {
            walls: WallVisibility::Hidden,
            ..VisibleObjects::default()
        };
        let mask = culling_mask(&objects, CameraType::Positionable, &scene());
        assert_eq!(
            mask,
            base()
                | RenderLayers::FLOOR
                | RenderLayers::NOTES
                | RenderLayers::DEBRIS
                | RenderLayers::UI
                | RenderLayers::AVATAR
                | RenderLayers::THIRD_PERSON
        );
    }

    #[test]
    fn test_transparent_walls_skip_textures() {
        let objects = VisibleObjects {
            walls: WallVisibility::Transparent,
            ..VisibleObjects::default()
        };
        let mask = culling_mask(&objects, CameraType::Attached, &scene());
        assert!(mask.contains(RenderLayers::WALLS));
        assert!(!mask.contains(RenderLayers::WALL_TEXTURES));
    }

    #[test]
    fn test_wall_map_forces_opaque_walls_only_with_flag() {
        let objects = VisibleObjects {
            walls: WallVisibility::Hidden,
            ..VisibleObjects::default()
        };
        let mut hints = SceneHints {
            probably_wall_map: true,
            ..scene()
        };
        let mask = culling_mask(&objects, CameraType::Attached, &hints);
        assert!(!mask.intersects(RenderLayers::WALLS | RenderLayers::WALL_TEXTURES));

        hints.auto_opaque_walls = true;
        let mask = culling_mask(&objects, CameraType::Attached, &hints);
        assert!(mask.contains(RenderLayers::WALLS | RenderLayers::WALL_TEXTURES));
    }

    #[test]
    fn test_notes_flip_changes_exactly_one_bit() {
        let before = VisibleObjects::default();
        let after = VisibleObjects {
            notes: false,
            ..before
        };
        let a = culling_mask(&before, CameraType::FirstPerson, &scene());
        let b = culling_mask(&after, CameraType::FirstPerson, &scene());
        assert_eq!(a ^ b, RenderLayers::NOTES);
    }

    #[test]
    fn test_exactly_one_perspective_bit() {
        let objects = VisibleObjects::default();
        for camera_type in [
            CameraType::FirstPerson,
            CameraType::Attached,
            CameraType::Positionable,
        ] {
            let mask = culling_mask(&objects, camera_type, &scene());
            let perspective = mask & (RenderLayers::FIRST_PERSON | RenderLayers::THIRD_PERSON);
            assert_eq!(perspective.bits().count_ones(), 1);
        }
    }

    #[test]
    fn test_base_mask_limits_nothing_it_does_not_own() {
        let hints = SceneHints {
            base_culling_mask: RenderLayers::from_raw(HOST_BITS),
            ..SceneHints::default()
        };
        let mask = culling_mask(&VisibleObjects::default(), CameraType::FirstPerson, &hints);
        assert!(mask.contains(RenderLayers::FLOOR | RenderLayers::FIRST_PERSON));
        assert_eq!(mask - RenderLayers::VISIBILITY, base());
    }
}
