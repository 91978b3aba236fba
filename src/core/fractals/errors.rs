use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractalError {
    MultibrotOrderTooLow { order: u32 },
    MultibrotOrderTooHigh { order: u32, max: u32 },
    UnknownKind { name: String },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultibrotOrderTooLow { order } => {
                write!(f, "multibrot order must be at least 2, got {}", order)
            }
            Self::MultibrotOrderTooHigh { order, max } => {
                write!(f, "multibrot order must be at most {}, got {}", max, order)
            }
            Self::UnknownKind { name } => {
                write!(
                    f,
                    "unknown fractal '{}', expected one of: \
                     mandelbrot, burning-ship, multibrot, nova, phoenix",
                    name
                )
            }
        }
    }
}

impl Error for FractalError {}
