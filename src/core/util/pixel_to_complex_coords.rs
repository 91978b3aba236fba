use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideResolution { point: Point, resolution: Resolution },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideResolution { point, resolution } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {} image",
                    point.x, point.y, resolution
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to its complex coordinate; the renderer walks pixels with the same formula.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    resolution: Resolution,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !resolution.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideResolution {
            point: pixel_position,
            resolution,
        });
    }

    let (dx, dy) = viewport.pixel_step(resolution);

    Ok(Complex {
        real: viewport.x_min() + f64::from(pixel_position.x) * dx,
        imag: viewport.y_min() + f64::from(pixel_position.y) * dy,
    })
}
