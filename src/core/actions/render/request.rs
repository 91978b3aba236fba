use crate::core::backends::kinds::Backend;
use crate::core::colour_mapping::kinds::Gradient;
use crate::core::data::precision::Precision;
use std::time::Duration;

/// Per-frame choices made by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderRequest {
    pub backend: Backend,
    pub threaded: bool,
    pub gradient: Gradient,
}

/// What a finished pass actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub precision: Precision,
    pub backend: Backend,
    /// Workers that ran; one per strip.
    pub threads: usize,
    pub strips: usize,
    pub elapsed: Duration,
}
