use num_traits::Float;
use std::fmt::Debug;

/// Floating-point element type a lane can hold: `f32` or `f64`.
pub trait Real: Float + Default + Debug + Send + Sync + 'static {
    /// Converts a literal or a pixel coordinate computed in `f64`.
    fn from_f64(value: f64) -> Self;
}

impl Real for f32 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }
}
