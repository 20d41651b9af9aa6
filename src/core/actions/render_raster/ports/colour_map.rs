use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

pub trait ColourMap: Send + Sync {
    fn map(&self, result: IterationResult) -> Colour;
}
