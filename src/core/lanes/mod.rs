//! Lane abstraction shared by every numeric backend.
//!
//! The escape loop is written once against [`Pack`] and [`Mask`]; the backends
//! only pick the lane count.

pub mod mask;
pub mod pack;
pub mod real;

pub use mask::Mask;
pub use pack::Pack;
pub use real::Real;
