//! Construction constants for a navigation session.
//!
//! Every field has a default, so a JSON file only needs the values it changes.
//! Only the starting constants live here; the current view is never written
//! back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::{
    DEFAULT_TOP_LEFT_IMAG, DEFAULT_TOP_LEFT_REAL, DEFAULT_ZOOM, Viewport,
};
use crate::core::errors::ConfigurationError;
use crate::core::fractals::mandelbrot::algorithm::DEFAULT_MAX_ITERATIONS;
use crate::core::renderer::FractalRenderer;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigurationError),
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub initial_zoom: f64,
    pub initial_top_left_real: f64,
    pub initial_top_left_imag: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_zoom: DEFAULT_ZOOM,
            initial_top_left_real: DEFAULT_TOP_LEFT_REAL,
            initial_top_left_imag: DEFAULT_TOP_LEFT_IMAG,
        }
    }
}

impl ExplorerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.pixel_rect()?;
        self.initial_viewport()?;

        if self.max_iterations == 0 {
            return Err(ConfigurationError::ZeroMaxIterations);
        }

        Ok(())
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, ConfigurationError> {
        PixelRect::new(self.width, self.height)
    }

    pub fn initial_viewport(&self) -> Result<Viewport, ConfigurationError> {
        Viewport::new(
            self.initial_top_left_real,
            self.initial_top_left_imag,
            self.initial_zoom,
        )
    }

    pub fn renderer(&self) -> Result<FractalRenderer, ConfigurationError> {
        FractalRenderer::new(self.pixel_rect()?, self.max_iterations)
    }
}
