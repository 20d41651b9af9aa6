use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::actions::render_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::actions::render_raster::shade_pixel;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster::{BYTES_PER_PIXEL, Raster};
use crate::core::data::viewport::Viewport;

/// Renders every pixel on rayon's work-stealing pool.
///
/// For cancel-aware rendering, use [`render_raster_parallel_rayon_cancelable`].
pub fn render_raster_parallel_rayon<A, M>(
    pixel_rect: PixelRect,
    viewport: &Viewport,
    algorithm: &A,
    colour_map: &M,
) -> Raster
where
    A: EscapeTimeAlgorithm + ?Sized,
    M: ColourMap + ?Sized,
{
    match render_raster_parallel_rayon_cancelable(
        pixel_rect,
        viewport,
        algorithm,
        colour_map,
        &NeverCancel,
    ) {
        Ok(raster) => raster,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Renders rows in parallel, each row owning a disjoint slice of one
/// preallocated buffer. The token is polled at the start of every row and
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
///
/// Cancellation is expected control flow, not a failure to report.
pub fn render_raster_parallel_rayon_cancelable<A, M, C>(
    pixel_rect: PixelRect,
    viewport: &Viewport,
    algorithm: &A,
    colour_map: &M,
    cancel: &C,
) -> Result<Raster, Cancelled>
where
    A: EscapeTimeAlgorithm + ?Sized,
    M: ColourMap + ?Sized,
    C: CancelToken + ?Sized,
{
    let mut raster = Raster::new(pixel_rect);
    let row_bytes = pixel_rect.width() as usize * BYTES_PER_PIXEL;

    raster
        .buffer_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                let point = Point {
                    x: x as i32,
                    y: y as i32,
                };
                let Colour { r, g, b } = shade_pixel(viewport, algorithm, colour_map, point);

                pixel.copy_from_slice(&[r, g, b]);
            }

            Ok(())
        })?;

    Ok(raster)
}
