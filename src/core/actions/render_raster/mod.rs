pub mod ports;
pub mod render_raster_parallel_rayon;
pub mod render_raster_serial;

use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::actions::render_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[inline]
pub(crate) fn shade_pixel<A, M>(
    viewport: &Viewport,
    algorithm: &A,
    colour_map: &M,
    pixel: Point,
) -> Colour
where
    A: EscapeTimeAlgorithm + ?Sized,
    M: ColourMap + ?Sized,
{
    colour_map.map(algorithm.iterate(viewport.to_complex(pixel)))
}
