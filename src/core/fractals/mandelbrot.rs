use crate::core::data::viewport::Viewport;
use crate::core::fractals::formula::{EscapeFormula, LaneComplex, Orbit};
use crate::core::lanes::Real;

pub(crate) const DEFAULT_VIEWPORT: Viewport = Viewport::from_trusted_bounds(-2.5, 1.5, -1.5, 1.5);

/// The classical quadratic map `z_{k+1} = z_k² + c`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Mandelbrot;

impl EscapeFormula for Mandelbrot {
    #[inline(always)]
    fn step<T: Real, const N: usize>(
        &self,
        orbit: &Orbit<T, N>,
        c: LaneComplex<T, N>,
    ) -> LaneComplex<T, N> {
        orbit.z.square() + c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::{MAX_ITER, escape_time};

    fn single(cr: f64, ci: f64) -> u32 {
        escape_time(&Mandelbrot, LaneComplex::from_arrays([cr], [ci]))[0]
    }

    fn reference(cr: f64, ci: f64) -> u32 {
        let (mut x, mut y) = (0.0f64, 0.0f64);

        for k in 0..MAX_ITER {
            let next_x = x * x - y * y + cr;
            let next_y = (x * y) + (x * y) + ci;
            if next_x * next_x + next_y * next_y >= 4.0 {
                return k;
            }
            x = next_x;
            y = next_y;
        }

        MAX_ITER
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(single(0.0, 0.0), MAX_ITER);
    }

    #[test]
    fn test_point_outside_radius_two_escapes_immediately() {
        assert_eq!(single(2.0, 2.0), 0);
        assert_eq!(single(-2.5, 0.0), 0);
    }

    #[test]
    fn test_known_escape_count() {
        // 0.6 → 0.96 → 1.5216 → 2.915...
        assert_eq!(single(0.6, 0.0), 3);
    }

    #[test]
    fn test_matches_plain_loop() {
        for &(cr, ci) in &[(-0.75, 0.1), (0.3, 0.5), (-1.25, 0.02), (0.26, 0.0), (-2.0, 0.0)] {
            assert_eq!(single(cr, ci), reference(cr, ci), "c = {} + {}i", cr, ci);
        }
    }
}
