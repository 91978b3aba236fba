use crate::core::data::viewport::Viewport;
use crate::core::fractals::formula::{EscapeFormula, LaneComplex, Orbit};
use crate::core::lanes::Real;

pub(crate) const DEFAULT_VIEWPORT: Viewport = Viewport::from_trusted_bounds(-2.2, 1.4, -2.1, 0.9);

/// `z_{k+1} = (|Re z_k| + i|Im z_k|)² + c`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BurningShip;

impl EscapeFormula for BurningShip {
    #[inline(always)]
    fn step<T: Real, const N: usize>(
        &self,
        orbit: &Orbit<T, N>,
        c: LaneComplex<T, N>,
    ) -> LaneComplex<T, N> {
        let folded = LaneComplex {
            re: orbit.z.re.abs(),
            im: orbit.z.im.abs(),
        };

        folded.square() + c
    }
}
