use log::{debug, warn};

use crate::config::ExplorerConfig;
use crate::controllers::navigation::commands::{NavigationCommand, PanDirection, ZoomFactor};
use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::actions::render_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::Viewport;
use crate::core::errors::ConfigurationError;
use crate::core::fractals::mandelbrot::algorithm::EscapeTimeEvaluator;
use crate::core::fractals::mandelbrot::colour_map::BandedColourMap;
use crate::core::renderer::FractalRenderer;

/// Owns the session's viewport and its latest frame.
///
/// Every intent takes `&mut self` and re-renders before returning, so intents
/// are applied one at a time and the frame always matches the viewport.
#[derive(Debug)]
pub struct NavigationController<A = EscapeTimeEvaluator, M = BandedColourMap> {
    renderer: FractalRenderer<A, M>,
    initial_viewport: Viewport,
    viewport: Viewport,
    raster: Raster,
}

impl NavigationController {
    pub fn from_config(config: &ExplorerConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        Ok(Self::new(config.renderer()?, config.initial_viewport()?))
    }
}

impl<A, M> NavigationController<A, M>
where
    A: EscapeTimeAlgorithm,
    M: ColourMap,
{
    pub fn new(renderer: FractalRenderer<A, M>, viewport: Viewport) -> Self {
        let raster = renderer.render(&viewport);

        Self {
            renderer,
            initial_viewport: viewport,
            viewport,
            raster,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[must_use]
    pub fn renderer(&self) -> &FractalRenderer<A, M> {
        &self.renderer
    }

    pub fn dispatch(&mut self, command: NavigationCommand) -> Result<&Raster, ConfigurationError> {
        match command {
            NavigationCommand::Pan(direction) => self.pan(direction),
            NavigationCommand::Zoom { anchor, factor } => self.zoom(anchor, factor),
            NavigationCommand::Reset => Ok(self.reset()),
        }
    }

    /// On rejection the viewport and frame stay as they were.
    pub fn pan(&mut self, direction: PanDirection) -> Result<&Raster, ConfigurationError> {
        let (delta_real, delta_imag) =
            direction.delta(self.viewport.zoom(), self.renderer.pixel_rect());

        if let Err(err) = self.viewport.pan_by(delta_real, delta_imag) {
            warn!("pan {:?} rejected: {}", direction, err);
            return Err(err);
        }

        debug!("pan {:?} -> {:?}", direction, self.viewport);

        Ok(self.rerender())
    }

    pub fn pan_up(&mut self) -> Result<&Raster, ConfigurationError> {
        self.pan(PanDirection::Up)
    }

    pub fn pan_down(&mut self) -> Result<&Raster, ConfigurationError> {
        self.pan(PanDirection::Down)
    }

    pub fn pan_left(&mut self) -> Result<&Raster, ConfigurationError> {
        self.pan(PanDirection::Left)
    }

    pub fn pan_right(&mut self) -> Result<&Raster, ConfigurationError> {
        self.pan(PanDirection::Right)
    }

    /// On rejection the viewport and frame stay as they were.
    pub fn zoom(&mut self, anchor: Point, factor: ZoomFactor) -> Result<&Raster, ConfigurationError> {
        let new_zoom = factor.apply(self.viewport.zoom());

        if let Err(err) = self
            .viewport
            .zoom_at(anchor, new_zoom, self.renderer.pixel_rect())
        {
            warn!("zoom {:?} at ({}, {}) rejected: {}", factor, anchor.x, anchor.y, err);
            return Err(err);
        }

        debug!("zoom {:?} at ({}, {}) -> {:?}", factor, anchor.x, anchor.y, self.viewport);

        Ok(self.rerender())
    }

    pub fn zoom_in(&mut self, anchor: Point) -> Result<&Raster, ConfigurationError> {
        self.zoom(anchor, ZoomFactor::In)
    }

    pub fn zoom_out(&mut self, anchor: Point) -> Result<&Raster, ConfigurationError> {
        self.zoom(anchor, ZoomFactor::Out)
    }

    pub fn reset(&mut self) -> &Raster {
        self.viewport = self.initial_viewport;
        debug!("reset -> {:?}", self.viewport);

        self.rerender()
    }

    fn rerender(&mut self) -> &Raster {
        self.raster = self.renderer.render(&self.viewport);
        &self.raster
    }
}
