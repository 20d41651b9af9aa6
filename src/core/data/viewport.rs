use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::errors::ConfigurationError;

pub const DEFAULT_ZOOM: f64 = 100.0;
pub const DEFAULT_TOP_LEFT_REAL: f64 = -3.0;
pub const DEFAULT_TOP_LEFT_IMAG: f64 = 3.0;

fn validate_zoom(zoom: f64) -> Result<f64, ConfigurationError> {
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(ConfigurationError::NonPositiveZoom { zoom });
    }

    Ok(zoom)
}

/// Affine mapping from raster pixels to the complex plane.
///
/// `zoom` is pixels per unit of the complex plane. A pixel `(x, y)` maps to
/// `(x / zoom + top_left_real, y / zoom - top_left_imag)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    top_left_real: f64,
    top_left_imag: f64,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            top_left_real: DEFAULT_TOP_LEFT_REAL,
            top_left_imag: DEFAULT_TOP_LEFT_IMAG,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    pub fn new(
        top_left_real: f64,
        top_left_imag: f64,
        zoom: f64,
    ) -> Result<Self, ConfigurationError> {
        if !top_left_real.is_finite() || !top_left_imag.is_finite() {
            return Err(ConfigurationError::NonFiniteCoordinate {
                real: top_left_real,
                imag: top_left_imag,
            });
        }

        Ok(Self {
            top_left_real,
            top_left_imag,
            zoom: validate_zoom(zoom)?,
        })
    }

    #[must_use]
    pub fn top_left_real(&self) -> f64 {
        self.top_left_real
    }

    #[must_use]
    pub fn top_left_imag(&self) -> f64 {
        self.top_left_imag
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Out-of-raster pixels extrapolate along the same mapping.
    #[must_use]
    pub fn to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: pixel.x as f64 / self.zoom + self.top_left_real,
            imag: pixel.y as f64 / self.zoom - self.top_left_imag,
        }
    }

    /// Shifts the top-left corner. A step that would leave either coordinate
    /// non-finite is rejected and the viewport is untouched.
    pub fn pan_by(&mut self, delta_real: f64, delta_imag: f64) -> Result<(), ConfigurationError> {
        self.set_top_left(
            self.top_left_real + delta_real,
            self.top_left_imag + delta_imag,
        )
    }

    /// Moves the point under `anchor` to the raster centre and rescales to
    /// `new_zoom`. The viewport is untouched when `new_zoom` or the resulting
    /// top-left corner is rejected.
    pub fn zoom_at(
        &mut self,
        anchor: Point,
        new_zoom: f64,
        pixel_rect: PixelRect,
    ) -> Result<(), ConfigurationError> {
        let new_zoom = validate_zoom(new_zoom)?;
        let center = pixel_rect.center();

        let anchor_real = self.top_left_real + anchor.x as f64 / self.zoom;
        let anchor_imag = self.top_left_imag - anchor.y as f64 / self.zoom;

        self.set_top_left(
            anchor_real - center.x as f64 / new_zoom,
            anchor_imag + center.y as f64 / new_zoom,
        )?;
        self.zoom = new_zoom;

        Ok(())
    }

    fn set_top_left(&mut self, real: f64, imag: f64) -> Result<(), ConfigurationError> {
        if !real.is_finite() || !imag.is_finite() {
            return Err(ConfigurationError::NonFiniteCoordinate { real, imag });
        }

        self.top_left_real = real;
        self.top_left_imag = imag;

        Ok(())
    }
}
