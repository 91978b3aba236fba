use crate::core::fractals::formula::{EscapeFormula, LaneComplex, Orbit};
use crate::core::lanes::{Mask, Pack, Real};

/// Iteration cap; a lane that reaches it is treated as inside the set.
pub const MAX_ITER: u32 = 10_000;

/// Escape threshold on `|z|²`.
pub const R_MAX: f64 = 4.0;

/// Runs `formula` from `z_0 = 0` for every lane of `c` in lock-step.
///
/// A lane's count is the number of steps whose result stayed inside the escape
/// radius: the step producing `z_{k+1}` with `|z_{k+1}|² >= R_MAX` ends the lane
/// with count `k`. Lanes that never escape end with [`MAX_ITER`]. Retired lanes
/// stop counting and stop moving, so a slow neighbour can't alter their result;
/// the loop exits as soon as no lane is active.
#[inline(always)]
pub fn escape_time<F, T, const N: usize>(formula: &F, c: LaneComplex<T, N>) -> [u32; N]
where
    F: EscapeFormula,
    T: Real,
{
    let escape_radius = Pack::splat(T::from_f64(R_MAX));
    let mut orbit = Orbit::origin();
    let mut active = Mask::splat(true);
    let mut counts = [0u32; N];

    for _ in 0..MAX_ITER {
        let next = formula.step(&orbit, c);
        let escaped = next.magnitude_squared().simd_ge(escape_radius);

        active = active.and_not(escaped);

        if !active.any() {
            break;
        }

        active.increment(&mut counts);
        orbit.advance(active, next);
    }

    counts
}
