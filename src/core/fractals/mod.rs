pub mod burning_ship;
pub mod errors;
pub mod escape_time;
pub mod formula;
pub mod fractal;
pub mod fractal_kinds;
pub mod mandelbrot;
pub mod multibrot;
pub mod nova;
pub mod phoenix;
