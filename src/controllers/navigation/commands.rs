use std::str::FromStr;

use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// A pan moves the view by this fraction of the visible extent.
pub const PAN_STEP_DIVISOR: f64 = 16.0;

pub const ZOOM_STEP: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Offset added to the viewport's top-left corner, as `(real, imag)`.
    #[must_use]
    pub fn delta(self, zoom: f64, pixel_rect: PixelRect) -> (f64, f64) {
        let horizontal = pixel_rect.width() as f64 / zoom / PAN_STEP_DIVISOR;
        let vertical = pixel_rect.height() as f64 / zoom / PAN_STEP_DIVISOR;

        match self {
            Self::Up => (0.0, vertical),
            Self::Down => (0.0, -vertical),
            Self::Left => (-horizontal, 0.0),
            Self::Right => (horizontal, 0.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ZoomFactor {
    In,
    Out,
}

impl ZoomFactor {
    #[must_use]
    pub fn apply(self, zoom: f64) -> f64 {
        match self {
            Self::In => zoom * ZOOM_STEP,
            Self::Out => zoom / ZOOM_STEP,
        }
    }
}

/// Discrete user intents the shell forwards to the navigation controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    Pan(PanDirection),
    Zoom { anchor: Point, factor: ZoomFactor },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown navigation command `{0}`")]
    UnknownCommand(String),

    #[error("invalid zoom anchor `{0}`, expected X,Y")]
    InvalidAnchor(String),
}

fn parse_anchor(text: &str) -> Result<Point, CommandParseError> {
    let invalid = || CommandParseError::InvalidAnchor(text.to_string());
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;

    Ok(Point {
        x: x.trim().parse().map_err(|_| invalid())?,
        y: y.trim().parse().map_err(|_| invalid())?,
    })
}

/// Parses `up`, `down`, `left`, `right`, `reset`, `in:X,Y` and `out:X,Y`.
impl FromStr for NavigationCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();

        if let Some((verb, anchor)) = text.split_once(':') {
            let factor = match verb {
                "in" => ZoomFactor::In,
                "out" => ZoomFactor::Out,
                _ => return Err(CommandParseError::UnknownCommand(s.to_string())),
            };

            return Ok(Self::Zoom {
                anchor: parse_anchor(anchor)?,
                factor,
            });
        }

        match text.as_str() {
            "up" => Ok(Self::Pan(PanDirection::Up)),
            "down" => Ok(Self::Pan(PanDirection::Down)),
            "left" => Ok(Self::Pan(PanDirection::Left)),
            "right" => Ok(Self::Pan(PanDirection::Right)),
            "reset" => Ok(Self::Reset),
            _ => Err(CommandParseError::UnknownCommand(s.to_string())),
        }
    }
}
