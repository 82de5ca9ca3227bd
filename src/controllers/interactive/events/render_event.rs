use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;

/// Outcome of one render or automaton pass, as handed to the presenter.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}

impl RenderEvent {
    /// Generation the pass was started for.
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(error) => error.generation,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameData> {
        match self {
            Self::Frame(frame) => Some(frame),
            Self::Error(_) => None,
        }
    }
}
