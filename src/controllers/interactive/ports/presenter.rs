use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives completed frames from the render worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}
