use std::{error::Error, fmt};

/// A render or automaton pass that failed; the previous frame stays published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation {} failed: {}", self.generation, self.message)
    }
}

impl Error for RenderError {}
