use crate::core::data::viewport::Viewport;
use crate::core::fractals::formula::{EscapeFormula, LaneComplex, Orbit};
use crate::core::lanes::Real;

pub(crate) const DEFAULT_VIEWPORT: Viewport = Viewport::from_trusted_bounds(-2.0, 1.0, -1.5, 1.5);

/// `z_{k+1} = z_k² + c_r + c_i · z_{k-1}`, with `z_{-1} = 0`.
///
/// The real part of the pixel coordinate is the additive constant and the
/// imaginary part scales the feedback from the previous-but-one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Phoenix;

impl EscapeFormula for Phoenix {
    #[inline(always)]
    fn step<T: Real, const N: usize>(
        &self,
        orbit: &Orbit<T, N>,
        c: LaneComplex<T, N>,
    ) -> LaneComplex<T, N> {
        let squared = orbit.z.square();

        LaneComplex {
            re: squared.re + c.re + c.im * orbit.previous.re,
            im: squared.im + c.im * orbit.previous.im,
        }
    }
}
