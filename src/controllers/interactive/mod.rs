//! Background rendering for interactive shells.
//!
//! The shell submits viewport snapshots; a single worker thread renders the
//! newest one and hands finished frames to a presenter port. A newer
//! submission cancels the render in flight, and cancelled work is dropped
//! silently.

mod controller;
pub mod data;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use ports::presenter::InteractiveControllerPresenterPort;
