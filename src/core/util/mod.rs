pub mod calculate_strips_for_height;
pub mod calculate_threads_for_render;
pub mod pixel_to_complex_coords;
