use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::{burning_ship, mandelbrot, multibrot, nova, phoenix};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    BurningShip,
    Multibrot,
    Nova,
    Phoenix,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::BurningShip,
        Self::Multibrot,
        Self::Nova,
        Self::Phoenix,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
            Self::Multibrot => "Multibrot",
            Self::Nova => "Nova",
            Self::Phoenix => "Phoenix",
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::BurningShip => "burning-ship",
            Self::Multibrot => "multibrot",
            Self::Nova => "nova",
            Self::Phoenix => "phoenix",
        }
    }

    /// The region shown when this family is selected.
    #[must_use]
    pub const fn default_viewport(self) -> Viewport {
        match self {
            Self::Mandelbrot => mandelbrot::DEFAULT_VIEWPORT,
            Self::BurningShip => burning_ship::DEFAULT_VIEWPORT,
            Self::Multibrot => multibrot::DEFAULT_VIEWPORT,
            Self::Nova => nova::DEFAULT_VIEWPORT,
            Self::Phoenix => phoenix::DEFAULT_VIEWPORT,
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.identifier() == wanted)
            .ok_or_else(|| FractalError::UnknownKind {
                name: s.to_string(),
            })
    }
}
