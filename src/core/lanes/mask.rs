use std::array;

/// Per-lane boolean produced by lane comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mask<const N: usize>([bool; N]);

impl<const N: usize> Mask<N> {
    #[inline(always)]
    #[must_use]
    pub fn splat(value: bool) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    #[must_use]
    pub fn from_array(lanes: [bool; N]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [bool; N] {
        self.0
    }

    /// `self & !other`
    #[inline(always)]
    #[must_use]
    pub fn and_not(self, other: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] & !other.0[i]))
    }

    #[inline(always)]
    #[must_use]
    pub fn any(self) -> bool {
        self.0.iter().any(|&lane| lane)
    }

    /// Adds one to each counter whose lane is set.
    #[inline(always)]
    pub fn increment(self, counters: &mut [u32; N]) {
        for (counter, &lane) in counters.iter_mut().zip(self.0.iter()) {
            *counter += u32::from(lane);
        }
    }
}
