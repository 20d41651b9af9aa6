use crate::core::data::point::Point;
use crate::core::errors::ConfigurationError;

/// Fixed raster extent, anchored at pixel (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidRasterSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Integer half extent, the pixel the viewport recentres on after a zoom.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(600, 400).unwrap();

        assert_eq!(rect.width(), 600);
        assert_eq!(rect.height(), 400);
        assert_eq!(rect.size(), 240_000);
    }

    #[test]
    fn test_pixel_rect_single_pixel_is_valid() {
        assert!(PixelRect::new(1, 1).is_ok());
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(ConfigurationError::InvalidRasterSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            PixelRect::new(10, 0),
            Err(ConfigurationError::InvalidRasterSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_pixel_rect_center_uses_integer_halving() {
        assert_eq!(PixelRect::new(600, 600).unwrap().center(), Point::new(300, 300));
        assert_eq!(PixelRect::new(5, 3).unwrap().center(), Point::new(2, 1));
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(100, 50).unwrap();

        assert!(rect.contains_point(Point::new(0, 0)));
        assert!(rect.contains_point(Point::new(99, 49)));
        assert!(!rect.contains_point(Point::new(100, 10)));
        assert!(!rect.contains_point(Point::new(10, 50)));
        assert!(!rect.contains_point(Point::new(-1, 10)));
    }
}
