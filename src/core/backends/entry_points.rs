//! Typed entry points, one per backend width and precision.
//!
//! All six run the same escape loop; only the lane count differs, so a point
//! gets the same count whichever entry point evaluates it at a given precision.

use crate::core::fractals::formula::LaneComplex;
use crate::core::fractals::fractal::Fractal;

pub const NARROW_F32_LANES: usize = 4;
pub const NARROW_F64_LANES: usize = 2;
pub const WIDE_F32_LANES: usize = 8;
pub const WIDE_F64_LANES: usize = 4;

#[must_use]
pub fn scalar_f32(fractal: &Fractal, cr: f32, ci: f32) -> u32 {
    fractal.escape_time(LaneComplex::from_arrays([cr], [ci]))[0]
}

#[must_use]
pub fn scalar_f64(fractal: &Fractal, cr: f64, ci: f64) -> u32 {
    fractal.escape_time(LaneComplex::from_arrays([cr], [ci]))[0]
}

#[must_use]
pub fn narrow_f32(
    fractal: &Fractal,
    cr: [f32; NARROW_F32_LANES],
    ci: [f32; NARROW_F32_LANES],
) -> [u32; NARROW_F32_LANES] {
    fractal.escape_time(LaneComplex::from_arrays(cr, ci))
}

#[must_use]
pub fn narrow_f64(
    fractal: &Fractal,
    cr: [f64; NARROW_F64_LANES],
    ci: [f64; NARROW_F64_LANES],
) -> [u32; NARROW_F64_LANES] {
    fractal.escape_time(LaneComplex::from_arrays(cr, ci))
}

#[must_use]
pub fn wide_f32(
    fractal: &Fractal,
    cr: [f32; WIDE_F32_LANES],
    ci: [f32; WIDE_F32_LANES],
) -> [u32; WIDE_F32_LANES] {
    fractal.escape_time(LaneComplex::from_arrays(cr, ci))
}

#[must_use]
pub fn wide_f64(
    fractal: &Fractal,
    cr: [f64; WIDE_F64_LANES],
    ci: [f64; WIDE_F64_LANES],
) -> [u32; WIDE_F64_LANES] {
    fractal.escape_time(LaneComplex::from_arrays(cr, ci))
}
