pub mod entry_points;
pub mod errors;
pub mod kinds;
