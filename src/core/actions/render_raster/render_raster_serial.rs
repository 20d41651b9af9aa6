use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::actions::render_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::actions::render_raster::shade_pixel;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster::{BYTES_PER_PIXEL, Raster};
use crate::core::data::viewport::Viewport;

/// Single-threaded reference render, row by row.
pub fn render_raster_serial<A, M>(
    pixel_rect: PixelRect,
    viewport: &Viewport,
    algorithm: &A,
    colour_map: &M,
) -> Raster
where
    A: EscapeTimeAlgorithm + ?Sized,
    M: ColourMap + ?Sized,
{
    let mut raster = Raster::new(pixel_rect);
    let width = pixel_rect.width() as usize;

    for (index, pixel) in raster
        .buffer_mut()
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .enumerate()
    {
        let point = Point {
            x: (index % width) as i32,
            y: (index / width) as i32,
        };
        let Colour { r, g, b } = shade_pixel(viewport, algorithm, colour_map, point);

        pixel.copy_from_slice(&[r, g, b]);
    }

    raster
}
