use crate::core::colour_mapping::map::ColourMap;
use crate::core::data::colour::Rgba;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::formula::LaneComplex;
use crate::core::fractals::fractal::Fractal;
use crate::core::lanes::{Pack, Real};

/// Where pixel `(x, y)` lands in the complex plane for one pass:
/// `(x_min + x·dx, y_min + y·dy)`, evaluated in f64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PixelGrid {
    x_min: f64,
    y_min: f64,
    dx: f64,
    dy: f64,
    width: usize,
}

impl PixelGrid {
    pub(crate) fn new(viewport: &Viewport, resolution: Resolution) -> Self {
        let (dx, dy) = viewport.pixel_step(resolution);

        Self {
            x_min: viewport.x_min(),
            y_min: viewport.y_min(),
            dx,
            dy,
            width: resolution.width() as usize,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }
}

/// Colours every pixel of a run of whole rows starting at image row `first_row`,
/// `N` pixels per escape loop.
///
/// When the width isn't a multiple of `N` the trailing group repeats the last
/// column in its spare lanes; those results are dropped.
pub(crate) fn walk_rows<T: Real, const N: usize, C: ColourMap>(
    fractal: &Fractal,
    colour_map: &C,
    grid: &PixelGrid,
    first_row: usize,
    pixels: &mut [Rgba],
) {
    let last_column = grid.width - 1;

    for (offset, row) in pixels.chunks_exact_mut(grid.width).enumerate() {
        let y = (first_row + offset) as f64;
        let im = Pack::splat(T::from_f64(grid.y_min + y * grid.dy));

        for (group_index, group) in row.chunks_mut(N).enumerate() {
            let first_column = group_index * N;
            let re: Pack<T, N> = Pack::from_fn(|lane| {
                let x = (first_column + lane).min(last_column) as f64;
                T::from_f64(grid.x_min + x * grid.dx)
            });

            let counts = fractal.escape_time::<T, N>(LaneComplex { re, im });

            for (pixel, &count) in group.iter_mut().zip(counts.iter()) {
                *pixel = colour_map.map(count);
            }
        }
    }
}
