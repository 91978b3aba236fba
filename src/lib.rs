mod controllers;
mod core;
mod presenters;

pub use controllers::explorer::Explorer;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render::config::{DEFAULT_WIDE_THREAD_CAP, RenderConfig};
pub use crate::core::actions::render::errors::RenderError;
pub use crate::core::actions::render::renderer::Renderer;
pub use crate::core::actions::render::request::{RenderReport, RenderRequest};
pub use crate::core::backends::entry_points::{
    NARROW_F32_LANES, NARROW_F64_LANES, WIDE_F32_LANES, WIDE_F64_LANES, narrow_f32, narrow_f64,
    scalar_f32, scalar_f64, wide_f32, wide_f64,
};
pub use crate::core::backends::errors::BackendError;
pub use crate::core::backends::kinds::Backend;
pub use crate::core::colour_mapping::errors::GradientError;
pub use crate::core::colour_mapping::kinds::Gradient;
pub use crate::core::colour_mapping::map::ColourMap;
pub use crate::core::data::colour::Rgba;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::precision::{DOUBLE_PRECISION_THRESHOLD, Precision};
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::viewport::{Viewport, ViewportError, ZOOM_FACTOR, ZoomDirection};
pub use crate::core::fractals::burning_ship::BurningShip;
pub use crate::core::fractals::errors::FractalError;
pub use crate::core::fractals::escape_time::{MAX_ITER, R_MAX};
pub use crate::core::fractals::fractal::Fractal;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::mandelbrot::Mandelbrot;
pub use crate::core::fractals::multibrot::{
    DEFAULT_ORDER as DEFAULT_MULTIBROT_ORDER, MAX_ORDER as MAX_MULTIBROT_ORDER, Multibrot,
};
pub use crate::core::fractals::nova::Nova;
pub use crate::core::fractals::phoenix::Phoenix;
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
pub use presenters::file::ppm::PpmFilePresenter;
