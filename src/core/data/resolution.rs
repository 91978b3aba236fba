use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "resolution must be at least 1x1: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Output image size in pixels, fixed for the lifetime of a renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0
            || height == 0
            || i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
        {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_new_valid() {
        let resolution = Resolution::new(120, 80).unwrap();

        assert_eq!(resolution.width(), 120);
        assert_eq!(resolution.height(), 80);
        assert_eq!(resolution.pixel_count(), 9600);
    }

    #[test]
    fn test_resolution_dimensions_must_be_positive() {
        assert_eq!(
            Resolution::new(0, 10),
            Err(ResolutionError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            Resolution::new(10, 0),
            Err(ResolutionError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_resolution_single_pixel_is_valid() {
        assert!(Resolution::new(1, 1).is_ok());
    }

    #[test]
    fn test_default_matches_window_size() {
        let resolution = Resolution::default();

        assert_eq!(resolution.width(), 900);
        assert_eq!(resolution.height(), 600);
    }

    #[test]
    fn test_resolution_contains_point() {
        let resolution = Resolution::new(100, 50).unwrap();

        assert!(resolution.contains_point(Point { x: 0, y: 0 }));
        assert!(resolution.contains_point(Point { x: 99, y: 49 }));
        assert!(!resolution.contains_point(Point { x: 100, y: 10 }));
        assert!(!resolution.contains_point(Point { x: 10, y: 50 }));
        assert!(!resolution.contains_point(Point { x: -1, y: 10 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::new(640, 480).unwrap().to_string(), "640x480");
    }
}
