use std::time::Instant;

use log::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::actions::render_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::actions::render_raster::render_raster_parallel_rayon::{
    render_raster_parallel_rayon, render_raster_parallel_rayon_cancelable,
};
use crate::core::actions::render_raster::render_raster_serial::render_raster_serial;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigurationError;
use crate::core::fractals::mandelbrot::algorithm::EscapeTimeEvaluator;
use crate::core::fractals::mandelbrot::colour_map::BandedColourMap;

/// Renders full frames for a fixed raster size.
///
/// The viewport is borrowed immutably for the whole pass, so every pixel of a
/// frame sees the same mapping.
#[derive(Debug, Clone)]
pub struct FractalRenderer<A = EscapeTimeEvaluator, M = BandedColourMap> {
    pixel_rect: PixelRect,
    algorithm: A,
    colour_map: M,
}

impl FractalRenderer {
    pub fn new(pixel_rect: PixelRect, max_iterations: u32) -> Result<Self, ConfigurationError> {
        let algorithm = EscapeTimeEvaluator::new(max_iterations)?;

        Ok(Self::with_parts(
            pixel_rect,
            algorithm,
            BandedColourMap::new(max_iterations),
        ))
    }
}

impl<A, M> FractalRenderer<A, M>
where
    A: EscapeTimeAlgorithm,
    M: ColourMap,
{
    #[must_use]
    pub fn with_parts(pixel_rect: PixelRect, algorithm: A, colour_map: M) -> Self {
        Self {
            pixel_rect,
            algorithm,
            colour_map,
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.algorithm.max_iterations()
    }

    #[must_use]
    pub fn colour_map(&self) -> &M {
        &self.colour_map
    }

    #[must_use]
    pub fn render(&self, viewport: &Viewport) -> Raster {
        let start = Instant::now();
        let raster =
            render_raster_parallel_rayon(self.pixel_rect, viewport, &self.algorithm, &self.colour_map);

        debug!(
            "rendered {}x{} frame in {:?}",
            self.pixel_rect.width(),
            self.pixel_rect.height(),
            start.elapsed()
        );

        raster
    }

    pub fn render_cancelable<C: CancelToken + ?Sized>(
        &self,
        viewport: &Viewport,
        cancel: &C,
    ) -> Result<Raster, Cancelled> {
        render_raster_parallel_rayon_cancelable(
            self.pixel_rect,
            viewport,
            &self.algorithm,
            &self.colour_map,
            cancel,
        )
    }

    #[must_use]
    pub fn render_serial(&self, viewport: &Viewport) -> Raster {
        render_raster_serial(self.pixel_rect, viewport, &self.algorithm, &self.colour_map)
    }

    #[must_use]
    pub fn iteration_at(&self, viewport: &Viewport, pixel: Point) -> IterationResult {
        self.algorithm.iterate(viewport.to_complex(pixel))
    }
}

/// One-shot render with the default evaluator and banded colours.
pub fn render(
    viewport: &Viewport,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Result<Raster, ConfigurationError> {
    let renderer = FractalRenderer::new(PixelRect::new(width, height)?, max_iterations)?;

    Ok(renderer.render(viewport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn default_renderer() -> FractalRenderer {
        FractalRenderer::new(PixelRect::new(600, 600).unwrap(), 100).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        let result = FractalRenderer::new(PixelRect::new(10, 10).unwrap(), 0);

        assert!(matches!(result, Err(ConfigurationError::ZeroMaxIterations)));
    }

    #[test]
    fn test_render_rejects_empty_raster() {
        let result = render(&Viewport::default(), 0, 600, 100);

        assert_eq!(
            result,
            Err(ConfigurationError::InvalidRasterSize {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_render_twice_is_bit_identical() {
        let renderer = FractalRenderer::new(PixelRect::new(120, 90).unwrap(), 100).unwrap();
        let viewport = Viewport::new(-2.5, 1.2, 40.0).unwrap();

        let first = renderer.render(&viewport);
        let second = renderer.render(&viewport);

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_parallel_render_matches_serial_render() {
        let renderer = FractalRenderer::new(PixelRect::new(97, 41).unwrap(), 64).unwrap();
        let viewport = Viewport::new(-2.2, 1.0, 35.0).unwrap();

        assert_eq!(renderer.render(&viewport), renderer.render_serial(&viewport));
    }

    #[test]
    fn test_known_interior_point_is_black_end_to_end() {
        let renderer = default_renderer();
        let viewport = Viewport::default();
        let pixel = Point::new(200, 300);

        let raster = renderer.render(&viewport);

        assert_eq!(viewport.to_complex(pixel).real, -1.0);
        assert_eq!(viewport.to_complex(pixel).imag, 0.0);
        assert_eq!(renderer.iteration_at(&viewport, pixel), IterationResult::Bounded);
        assert_eq!(
            renderer.iteration_at(&viewport, pixel).count_or_max(100),
            100
        );
        assert_eq!(raster.pixel(pixel), Some(Colour::BLACK));
    }

    #[test]
    fn test_far_corner_is_coloured() {
        let renderer = default_renderer();
        let viewport = Viewport::default();

        let raster = renderer.render(&viewport);

        // (-3, -3) escapes on the first step
        assert_eq!(
            raster.pixel(Point::new(0, 0)),
            Some(renderer.colour_map().colour_for_count(0))
        );
    }

    #[test]
    fn test_render_replaces_whole_frame_after_viewport_change() {
        let renderer = FractalRenderer::new(PixelRect::new(50, 50).unwrap(), 50).unwrap();
        let mut viewport = Viewport::new(-2.0, 1.25, 20.0).unwrap();

        let before = renderer.render(&viewport);
        viewport.pan_by(0.5, 0.0).unwrap();
        let after = renderer.render(&viewport);

        assert_ne!(before.buffer(), after.buffer());
        assert_eq!(after, renderer.render_serial(&viewport));
    }

    #[test]
    fn test_render_cancelable_honours_token() {
        let renderer = FractalRenderer::new(PixelRect::new(20, 20).unwrap(), 50).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        assert_eq!(
            renderer.render_cancelable(&Viewport::default(), &cancel_token),
            Err(Cancelled)
        );
    }

    #[test]
    fn test_render_function_uses_requested_size() {
        let raster = render(&Viewport::default(), 30, 20, 10).unwrap();

        assert_eq!(raster.pixel_rect().width(), 30);
        assert_eq!(raster.pixel_rect().height(), 20);
        assert_eq!(raster.buffer().len(), 30 * 20 * 3);
    }
}
