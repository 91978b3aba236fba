use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::R_MAX;
use crate::core::fractals::formula::{EscapeFormula, LaneComplex, Orbit};
use crate::core::lanes::{Pack, Real};

pub(crate) const DEFAULT_VIEWPORT: Viewport = Viewport::from_trusted_bounds(-1.5, 1.5, -1.5, 1.5);

/// Below this `|p'(z)|²` the Newton correction is taken as zero.
pub const DERIVATIVE_EPSILON: f64 = 1e-12;

/// Relaxed Newton-Raphson on `p(z) = z³ - 1` driven by `c`:
/// `z_{k+1} = z_k - R_MAX · p(z_k) / p'(z_k) + c`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Nova;

impl EscapeFormula for Nova {
    #[inline(always)]
    fn step<T: Real, const N: usize>(
        &self,
        orbit: &Orbit<T, N>,
        c: LaneComplex<T, N>,
    ) -> LaneComplex<T, N> {
        let one = Pack::splat(T::one());
        let three = Pack::splat(T::from_f64(3.0));
        let six = Pack::splat(T::from_f64(6.0));
        let relaxation = Pack::splat(T::from_f64(R_MAX));
        let epsilon = Pack::splat(T::from_f64(DERIVATIVE_EPSILON));
        let zero = Pack::splat(T::zero());

        let LaneComplex { re: x, im: y } = orbit.z;
        let x2 = x * x;
        let x3 = x2 * x;
        let y2 = y * y;
        let y3 = y2 * y;

        let f_re = x3 - three * x * y2 - one;
        let f_im = three * x2 * y - y3;
        let df_re = three * (x2 - y2);
        let df_im = six * x * y;

        let denominator = df_re * df_re + df_im * df_im;
        // Lanes with a vanishing derivative divide by ~0; their quotient is discarded.
        let usable = denominator.simd_ge(epsilon);
        let div_re = Pack::select(usable, (f_re * df_re + f_im * df_im) / denominator, zero);
        let div_im = Pack::select(usable, (df_re * f_im - f_re * df_im) / denominator, zero);

        LaneComplex {
            re: x - relaxation * div_re + c.re,
            im: y - relaxation * div_im + c.im,
        }
    }
}
