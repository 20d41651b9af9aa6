use std::ops::ControlFlow;

use crate::core::actions::render_raster::ports::escape_time::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::errors::ConfigurationError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time evaluator for `z' = z² + c`, starting from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTimeEvaluator {
    max_iterations: u32,
}

impl Default for EscapeTimeEvaluator {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EscapeTimeEvaluator {
    pub fn new(max_iterations: u32) -> Result<Self, ConfigurationError> {
        if max_iterations == 0 {
            return Err(ConfigurationError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeTimeAlgorithm for EscapeTimeEvaluator {
    fn iterate(&self, c: Complex) -> IterationResult {
        let outcome = (0..self.max_iterations).try_fold(Complex::ZERO, |z, step| {
            let next = z.square() + c;
            let magnitude_squared = next.magnitude_squared();

            // NaN never compares greater than the bound, so check finiteness first.
            if !magnitude_squared.is_finite() || magnitude_squared > ESCAPE_RADIUS_SQUARED {
                ControlFlow::Break(step)
            } else {
                ControlFlow::Continue(next)
            }
        });

        match outcome {
            ControlFlow::Break(step) => IterationResult::Escaped(step),
            ControlFlow::Continue(_) => IterationResult::Bounded,
        }
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
