use thiserror::Error;

/// Rejected construction or mutation parameters for the numeric core.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("zoom must be a finite value greater than zero, got {zoom}")]
    NonPositiveZoom { zoom: f64 },

    #[error("viewport coordinates must be finite, got ({real}, {imag})")]
    NonFiniteCoordinate { real: f64, imag: f64 },

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("raster size must be positive: {width}x{height}")]
    InvalidRasterSize { width: u32, height: u32 },
}
