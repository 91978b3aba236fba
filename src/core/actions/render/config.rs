use crate::core::data::precision::DOUBLE_PRECISION_THRESHOLD;
use crate::core::data::resolution::Resolution;
use std::num::NonZeroUsize;

/// Upper bound on workers for the wide backend.
pub const DEFAULT_WIDE_THREAD_CAP: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(cap) => cap,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub resolution: Resolution,
    /// Viewport heights below this switch rendering to f64.
    pub double_precision_threshold: f64,
    pub wide_thread_cap: NonZeroUsize,
    /// Replaces the detected core count when set.
    pub thread_override: Option<NonZeroUsize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            double_precision_threshold: DOUBLE_PRECISION_THRESHOLD,
            wide_thread_cap: DEFAULT_WIDE_THREAD_CAP,
            thread_override: None,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }
}
