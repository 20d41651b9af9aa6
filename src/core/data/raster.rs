use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    #[error("pixel at x:{}, y:{} outside of {}x{} raster", .pixel.x, .pixel.y, .pixel_rect.width(), .pixel_rect.height())]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
}

/// Row-major RGB frame, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixel_rect: PixelRect,
    buffer: Vec<u8>,
}

impl Raster {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), RasterError> {
        let index = self.index_of(pixel).ok_or(RasterError::PixelOutsideBounds {
            pixel,
            pixel_rect: self.pixel_rect,
        })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let row = pixel.y as usize * self.pixel_rect.width() as usize;
        Some((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let raster = Raster::new(create_pixel_rect(10, 10));

        assert_eq!(raster.buffer().len(), 300);
        assert!(raster.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_is_row_major() {
        let mut raster = Raster::new(create_pixel_rect(3, 3));
        let red = Colour { r: 255, g: 0, b: 0 };

        raster.set_pixel(Point::new(2, 1), red).unwrap();

        // row 1, column 2 => pixel index 5
        assert_eq!(&raster.buffer()[15..18], &[255, 0, 0]);
        assert_eq!(raster.pixel(Point::new(2, 1)), Some(red));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut raster = Raster::new(pixel_rect);

        let result = raster.set_pixel(Point::new(3, 0), Colour::BLACK);

        assert_eq!(
            result,
            Err(RasterError::PixelOutsideBounds {
                pixel: Point::new(3, 0),
                pixel_rect
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let raster = Raster::new(create_pixel_rect(3, 3));

        assert_eq!(raster.pixel(Point::new(-1, 0)), None);
        assert_eq!(raster.pixel(Point::new(0, 3)), None);
    }
}
