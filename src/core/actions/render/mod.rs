pub mod config;
pub mod errors;
pub mod renderer;
pub mod request;
pub mod walk_rows;
