use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::formula::{EscapeFormula, LaneComplex, Orbit};
use crate::core::lanes::Real;

pub(crate) const DEFAULT_VIEWPORT: Viewport = Viewport::from_trusted_bounds(-1.5, 1.5, -1.5, 1.5);

pub const DEFAULT_ORDER: u32 = 5;

/// Each step costs `order - 1` complex multiplications.
pub const MAX_ORDER: u32 = 64;

/// `z_{k+1} = z_k^order + c`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Multibrot {
    order: u32,
}

impl Multibrot {
    pub fn new(order: u32) -> Result<Self, FractalError> {
        if order < 2 {
            return Err(FractalError::MultibrotOrderTooLow { order });
        }
        if order > MAX_ORDER {
            return Err(FractalError::MultibrotOrderTooHigh {
                order,
                max: MAX_ORDER,
            });
        }

        Ok(Self { order })
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }
}

impl Default for Multibrot {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

impl EscapeFormula for Multibrot {
    #[inline(always)]
    fn step<T: Real, const N: usize>(
        &self,
        orbit: &Orbit<T, N>,
        c: LaneComplex<T, N>,
    ) -> LaneComplex<T, N> {
        let z = orbit.z;
        let mut power = z;

        for _ in 1..self.order {
            power = power * z;
        }

        power + c
    }
}
