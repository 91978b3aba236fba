use crate::core::data::viewport::Viewport;
use std::fmt;

/// Vertical extent below which single precision can no longer resolve neighbouring pixels.
pub const DOUBLE_PRECISION_THRESHOLD: f64 = 1e-4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    #[must_use]
    pub fn for_viewport(viewport: &Viewport, threshold: f64) -> Self {
        if viewport.height() < threshold {
            Self::Double
        } else {
            Self::Single
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("f32"),
            Self::Double => f.write_str("f64"),
        }
    }
}
