use crate::core::data::viewport::Viewport;
use crate::core::fractals::burning_ship::BurningShip;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::formula::LaneComplex;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::mandelbrot::Mandelbrot;
use crate::core::fractals::multibrot::Multibrot;
use crate::core::fractals::nova::Nova;
use crate::core::fractals::phoenix::Phoenix;
use crate::core::lanes::Real;

/// A selected fractal family together with its parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fractal {
    Mandelbrot(Mandelbrot),
    BurningShip(BurningShip),
    Multibrot(Multibrot),
    Nova(Nova),
    Phoenix(Phoenix),
}

impl Fractal {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot(_) => FractalKind::Mandelbrot,
            Self::BurningShip(_) => FractalKind::BurningShip,
            Self::Multibrot(_) => FractalKind::Multibrot,
            Self::Nova(_) => FractalKind::Nova,
            Self::Phoenix(_) => FractalKind::Phoenix,
        }
    }

    #[must_use]
    pub fn default_viewport(&self) -> Viewport {
        self.kind().default_viewport()
    }

    /// Escape counts for `N` points at once.
    ///
    /// The family is matched once per lane group; each arm runs a loop
    /// monomorphised for that formula.
    #[inline]
    #[must_use]
    pub fn escape_time<T: Real, const N: usize>(&self, c: LaneComplex<T, N>) -> [u32; N] {
        match self {
            Self::Mandelbrot(formula) => escape_time(formula, c),
            Self::BurningShip(formula) => escape_time(formula, c),
            Self::Multibrot(formula) => escape_time(formula, c),
            Self::Nova(formula) => escape_time(formula, c),
            Self::Phoenix(formula) => escape_time(formula, c),
        }
    }
}

impl From<FractalKind> for Fractal {
    fn from(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Mandelbrot => Self::Mandelbrot(Mandelbrot),
            FractalKind::BurningShip => Self::BurningShip(BurningShip),
            FractalKind::Multibrot => Self::Multibrot(Multibrot::default()),
            FractalKind::Nova => Self::Nova(Nova),
            FractalKind::Phoenix => Self::Phoenix(Phoenix),
        }
    }
}

impl Default for Fractal {
    fn default() -> Self {
        FractalKind::default().into()
    }
}
