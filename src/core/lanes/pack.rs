use crate::core::lanes::mask::Mask;
use crate::core::lanes::real::Real;
use std::array;
use std::ops::{Add, Div, Mul, Sub};

/// `N` floating-point lanes stepped in lock-step.
///
/// Every operation is element-wise over a fixed-size array, so the optimiser
/// lowers it to SIMD registers of the matching width (4/8 × f32 or 2/4 × f64
/// on SSE/AVX targets) while `Pack<T, 1>` stays plain scalar code. Because each
/// lane sees exactly the same sequence of IEEE operations, results are identical
/// across widths.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pack<T: Real, const N: usize>([T; N]);

impl<T: Real, const N: usize> Pack<T, N> {
    #[inline(always)]
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    #[must_use]
    pub fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    #[must_use]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(array::from_fn(f))
    }

    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline(always)]
    #[must_use]
    pub fn abs(self) -> Self {
        Self(array::from_fn(|i| self.0[i].abs()))
    }

    #[inline(always)]
    #[must_use]
    pub fn simd_ge(self, other: Self) -> Mask<N> {
        Mask::from_array(array::from_fn(|i| self.0[i] >= other.0[i]))
    }

    /// Picks `if_true` where `mask` is set, `if_false` elsewhere.
    #[inline(always)]
    #[must_use]
    pub fn select(mask: Mask<N>, if_true: Self, if_false: Self) -> Self {
        let mask = mask.to_array();
        Self(array::from_fn(|i| if mask[i] { if_true.0[i] } else { if_false.0[i] }))
    }
}

macro_rules! impl_lane_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Real, const N: usize> $trait for Pack<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, other: Self) -> Self {
                Self(array::from_fn(|i| self.0[i] $op other.0[i]))
            }
        }
    };
}

impl_lane_op!(Add, add, +);
impl_lane_op!(Sub, sub, -);
impl_lane_op!(Mul, mul, *);
impl_lane_op!(Div, div, /);
