use crate::core::lanes::{Mask, Pack, Real};
use std::ops::{Add, Mul};

/// `N` complex numbers, real and imaginary parts in separate lanes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LaneComplex<T: Real, const N: usize> {
    pub re: Pack<T, N>,
    pub im: Pack<T, N>,
}

impl<T: Real, const N: usize> LaneComplex<T, N> {
    #[inline(always)]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            re: Pack::splat(T::zero()),
            im: Pack::splat(T::zero()),
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn from_arrays(re: [T; N], im: [T; N]) -> Self {
        Self {
            re: Pack::from_array(re),
            im: Pack::from_array(im),
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn magnitude_squared(self) -> Pack<T, N> {
        self.re * self.re + self.im * self.im
    }

    #[inline(always)]
    #[must_use]
    pub fn square(self) -> Self {
        let cross = self.re * self.im;

        Self {
            re: self.re * self.re - self.im * self.im,
            im: cross + cross,
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn select(mask: Mask<N>, if_true: Self, if_false: Self) -> Self {
        Self {
            re: Pack::select(mask, if_true.re, if_false.re),
            im: Pack::select(mask, if_true.im, if_false.im),
        }
    }
}

impl<T: Real, const N: usize> Add for LaneComplex<T, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Real, const N: usize> Mul for LaneComplex<T, N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

/// Recurrence state: the current point and the one before it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orbit<T: Real, const N: usize> {
    pub z: LaneComplex<T, N>,
    pub previous: LaneComplex<T, N>,
}

impl<T: Real, const N: usize> Orbit<T, N> {
    #[inline(always)]
    #[must_use]
    pub fn origin() -> Self {
        Self {
            z: LaneComplex::zero(),
            previous: LaneComplex::zero(),
        }
    }

    /// Moves active lanes one step along the orbit; retired lanes keep their last state.
    #[inline(always)]
    pub fn advance(&mut self, active: Mask<N>, next: LaneComplex<T, N>) {
        self.previous = LaneComplex::select(active, self.z, self.previous);
        self.z = LaneComplex::select(active, next, self.z);
    }
}

/// One fractal family's recurrence `z_{k+1} = f(z_k, z_{k-1}, c)`.
pub trait EscapeFormula {
    fn step<T: Real, const N: usize>(
        &self,
        orbit: &Orbit<T, N>,
        c: LaneComplex<T, N>,
    ) -> LaneComplex<T, N>;
}
