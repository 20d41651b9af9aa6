/// Mask selecting the 24 RGB bits of a packed colour.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Unpacks `0xRRGGBB`. Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_packed_rgb(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }
}
