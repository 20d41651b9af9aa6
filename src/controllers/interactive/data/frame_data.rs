use std::time::Duration;

use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub viewport: Viewport,
    pub raster: Raster,
    pub render_duration: Duration,
}
