use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use std::error::Error;
use std::fmt;

/// Scale applied to both axes by one zoom step.
pub const ZOOM_FACTOR: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFinite {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite: x [{}, {}], y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The rectangle of the complex plane currently mapped onto the output image.
///
/// Row 0 of the image corresponds to `y_min`, column 0 to `x_min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(ViewportError::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// For compile-time default rectangles; callers guarantee the invariants.
    pub(crate) const fn from_trusted_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.x_max + self.x_min) / 2.0,
            imag: (self.y_max + self.y_min) / 2.0,
        }
    }

    /// Complex-plane distance between neighbouring pixel centres, per axis.
    #[must_use]
    pub fn pixel_step(&self, resolution: Resolution) -> (f64, f64) {
        (
            self.width() / f64::from(resolution.width()),
            self.height() / f64::from(resolution.height()),
        )
    }

    /// Scales both axes around the centre by [`ZOOM_FACTOR`].
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let center = self.center();

        let (half_width, half_height) = match direction {
            ZoomDirection::In => (
                self.width() / ZOOM_FACTOR / 2.0,
                self.height() / ZOOM_FACTOR / 2.0,
            ),
            ZoomDirection::Out => (
                self.width() * ZOOM_FACTOR / 2.0,
                self.height() * ZOOM_FACTOR / 2.0,
            ),
        };

        self.recenter(center, half_width, half_height);
    }

    /// Recentres the rectangle on the complex coordinate under `target`,
    /// keeping the current extents.
    pub fn pan(
        &mut self,
        target: Point,
        resolution: Resolution,
    ) -> Result<(), PixelToComplexCoordsError> {
        let center = pixel_to_complex_coords(target, resolution, self)?;

        self.recenter(center, self.width() / 2.0, self.height() / 2.0);
        Ok(())
    }

    fn recenter(&mut self, center: Complex, half_width: f64, half_height: f64) {
        let x_min = center.real - half_width;
        let x_max = center.real + half_width;
        let y_min = center.imag - half_height;
        let y_max = center.imag + half_height;

        // Past the limit of f64 the rectangle would collapse; keep the last valid one.
        if x_min < x_max
            && y_min < y_max
            && x_min.is_finite()
            && x_max.is_finite()
            && y_min.is_finite()
            && y_max.is_finite()
        {
            self.x_min = x_min;
            self.x_max = x_max;
            self.y_min = y_min;
            self.y_max = y_max;
        } else {
            log::warn!(
                "viewport transform to centre ({}, {}) would be degenerate; keeping current bounds",
                center.real,
                center.imag
            );
        }
    }
}
