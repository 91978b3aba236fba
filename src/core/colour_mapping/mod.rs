pub mod errors;
pub mod gradients;
pub mod kinds;
pub mod map;
