pub mod actions;
pub mod backends;
pub mod colour_mapping;
pub mod data;
pub mod fractals;
pub mod lanes;
pub mod util;
