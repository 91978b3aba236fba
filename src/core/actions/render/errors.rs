use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    ResolutionMismatch {
        renderer: Resolution,
        buffer: Resolution,
    },
    ThreadPool { reason: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolutionMismatch { renderer, buffer } => {
                write!(
                    f,
                    "renderer is configured for {} but the buffer is {}",
                    renderer, buffer
                )
            }
            Self::ThreadPool { reason } => {
                write!(f, "could not start render workers: {}", reason)
            }
        }
    }
}

impl Error for RenderError {}

impl From<rayon::ThreadPoolBuildError> for RenderError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool {
            reason: err.to_string(),
        }
    }
}
