use crate::core::data::colour::Rgba;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match buffer size {}",
                    resolution_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major, top-to-bottom RGBA pixels sized exactly `width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![Rgba::default(); resolution.pixel_count()],
        }
    }

    pub fn from_data(resolution: Resolution, pixels: Vec<Rgba>) -> Result<Self, PixelBufferError> {
        if resolution.pixel_count() != pixels.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size: resolution.pixel_count(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { resolution, pixels })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Drops the alpha channel, producing packed `r, g, b` bytes.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| [pixel.r, pixel.g, pixel.b])
            .collect()
    }
}
