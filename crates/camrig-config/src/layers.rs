//! Render layer bits a camera can cull

use bitflags::bitflags;

bitflags! {
    /// Culling mask of a camera. Each bit enables one category of scene content.
    ///
    /// Bits outside the named set belong to the host and pass through untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderLayers: u32 {
        const THIRD_PERSON = 1 << 3;
        const UI = 1 << 5;
        const FIRST_PERSON = 1 << 6;
        const NOTES = 1 << 8;
        const DEBRIS = 1 << 9;
        const AVATAR = 1 << 10;
        const WALLS = 1 << 11;
        const WALL_TEXTURES = 1 << 12;
        const FLOOR = 1 << 13;
    }
}

impl RenderLayers {
    /// Every bit owned by the visibility preferences; cleared before a mask is rebuilt
    pub const VISIBILITY: Self = Self::all();

    /// Wrap a raw host mask, keeping bits that have no name here
    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}
