use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::data::colour::{Colour, RGB_MASK};
use crate::core::data::iteration_result::IterationResult;

pub const BAND_BASE_RGB: u32 = 0b0110_1110_0001_1001_0110_1000;
pub const BAND_MASK: u32 = 0b0000_0000_0000_0101_0111_0111;
pub const ITERATIONS_PER_BAND: u32 = 13;
pub const PACKED_RGB_BITS: u32 = 24;

/// Banded pseudo-colour: every 13 iterations the mask moves up one bit and is
/// OR-ed over a fixed base colour. Bounded points are black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BandedColourMap {
    max_iterations: u32,
}

impl BandedColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn colour_for_count(&self, count: u32) -> Colour {
        self.map(IterationResult::from_count(count, self.max_iterations))
    }
}

#[must_use]
pub fn banded_rgb(count: u32) -> u32 {
    let shift = (count / ITERATIONS_PER_BAND) % PACKED_RGB_BITS;

    BAND_BASE_RGB | ((BAND_MASK << shift) & RGB_MASK)
}

impl ColourMap for BandedColourMap {
    fn map(&self, result: IterationResult) -> Colour {
        match result {
            IterationResult::Bounded => Colour::BLACK,
            IterationResult::Escaped(count) => Colour::from_packed_rgb(banded_rgb(count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_is_black() {
        let colour_map = BandedColourMap::new(100);

        assert_eq!(colour_map.map(IterationResult::Bounded), Colour::BLACK);
    }

    #[test]
    fn test_count_at_limit_is_black_for_any_limit() {
        for max_iterations in [1, 13, 100, 5000] {
            let colour_map = BandedColourMap::new(max_iterations);
            assert_eq!(colour_map.colour_for_count(max_iterations), Colour::BLACK);
        }
    }

    #[test]
    fn test_first_band_is_base_or_mask() {
        let colour_map = BandedColourMap::new(100);

        // 0x6E1968 | 0x000577
        assert_eq!(
            colour_map.map(IterationResult::Escaped(0)),
            Colour { r: 0x6E, g: 0x1D, b: 0x7F }
        );
        assert_eq!(
            colour_map.map(IterationResult::Escaped(12)),
            colour_map.map(IterationResult::Escaped(0))
        );
    }

    #[test]
    fn test_bands_change_every_thirteen_iterations() {
        assert_eq!(banded_rgb(13), BAND_BASE_RGB | (BAND_MASK << 1));
        assert_eq!(banded_rgb(26), BAND_BASE_RGB | (BAND_MASK << 2));
        assert_ne!(banded_rgb(12), banded_rgb(13));
    }

    #[test]
    fn test_last_band_below_default_limit() {
        // 99 / 13 = 7, shifted mask still fits in 24 bits
        assert_eq!(banded_rgb(99), BAND_BASE_RGB | 0x02_BB80);
    }

    #[test]
    fn test_shift_is_truncated_to_24_bits() {
        // band 14 pushes the mask's top bit to bit 24, which is dropped
        assert_eq!(banded_rgb(14 * 13), BAND_BASE_RGB | ((BAND_MASK << 14) & RGB_MASK));
        assert!(banded_rgb(23 * 13) <= RGB_MASK);
    }

    #[test]
    fn test_shift_wraps_after_24_bands() {
        assert_eq!(banded_rgb(24 * 13), banded_rgb(0));
        assert_eq!(banded_rgb(25 * 13), banded_rgb(13));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let colour_map = BandedColourMap::new(100);

        for count in 0..100 {
            assert_eq!(
                colour_map.colour_for_count(count),
                colour_map.colour_for_count(count)
            );
        }
    }

    #[test]
    fn test_escaped_colours_are_never_black() {
        let colour_map = BandedColourMap::new(1000);

        for count in 0..1000 {
            assert_ne!(colour_map.colour_for_count(count), Colour::BLACK);
        }
    }
}
