use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;

pub trait EscapeTimeAlgorithm: Send + Sync {
    fn iterate(&self, c: Complex) -> IterationResult;

    fn max_iterations(&self) -> u32;
}
