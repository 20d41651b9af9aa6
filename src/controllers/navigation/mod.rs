//! Synchronous navigation over a single owned viewport.

pub mod commands;
mod controller;

pub use commands::{CommandParseError, NavigationCommand, PanDirection, ZoomFactor};
pub use controller::NavigationController;
