pub mod config;
pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::config::{ConfigError, ExplorerConfig};
pub use crate::controllers::interactive::{FrameData, InteractiveController, InteractiveControllerPresenterPort};
pub use crate::controllers::navigation::{
    CommandParseError, NavigationCommand, NavigationController, PanDirection, ZoomFactor,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_result::IterationResult;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::data::point::Point;
pub use crate::core::data::raster::Raster;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::ConfigurationError;
pub use crate::core::fractals::mandelbrot::algorithm::EscapeTimeEvaluator;
pub use crate::core::fractals::mandelbrot::colour_map::BandedColourMap;
pub use crate::core::renderer::{FractalRenderer, render};
pub use crate::presenters::file::ppm::PpmFilePresenter;
