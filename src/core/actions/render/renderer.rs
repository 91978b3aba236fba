use crate::core::actions::render::config::RenderConfig;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::request::{RenderReport, RenderRequest};
use crate::core::actions::render::walk_rows::{PixelGrid, walk_rows};
use crate::core::backends::entry_points::{
    NARROW_F32_LANES, NARROW_F64_LANES, WIDE_F32_LANES, WIDE_F64_LANES,
};
use crate::core::backends::kinds::Backend;
use crate::core::colour_mapping::kinds::Gradient;
use crate::core::data::colour::Rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::precision::Precision;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal::Fractal;
use crate::core::util::calculate_strips_for_height::{calculate_strips_for_height, strip_rows};
use crate::core::util::calculate_threads_for_render::calculate_threads_for_render;
use std::mem;
use std::time::Instant;

type StripWalker = fn(&Fractal, &Gradient, &PixelGrid, usize, &mut [Rgba]);

fn strip_walker(backend: Backend, precision: Precision) -> StripWalker {
    match (backend, precision) {
        (Backend::Scalar, Precision::Single) => walk_rows::<f32, 1, Gradient>,
        (Backend::Scalar, Precision::Double) => walk_rows::<f64, 1, Gradient>,
        (Backend::Narrow, Precision::Single) => walk_rows::<f32, NARROW_F32_LANES, Gradient>,
        (Backend::Narrow, Precision::Double) => walk_rows::<f64, NARROW_F64_LANES, Gradient>,
        (Backend::Wide, Precision::Single) => walk_rows::<f32, WIDE_F32_LANES, Gradient>,
        (Backend::Wide, Precision::Double) => walk_rows::<f64, WIDE_F64_LANES, Gradient>,
    }
}

/// Fills caller-owned pixel buffers of one fixed resolution.
///
/// A pass overwrites every pixel. Threaded passes split the rows into
/// contiguous strips, one worker each, and return only after every strip
/// is done.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(
        &self,
        buffer: &mut PixelBuffer,
        viewport: &Viewport,
        fractal: &Fractal,
        request: &RenderRequest,
    ) -> Result<RenderReport, RenderError> {
        let resolution = self.config.resolution;

        if buffer.resolution() != resolution {
            return Err(RenderError::ResolutionMismatch {
                renderer: resolution,
                buffer: buffer.resolution(),
            });
        }

        let started = Instant::now();
        let precision = Precision::for_viewport(viewport, self.config.double_precision_threshold);
        let walker = strip_walker(request.backend, precision);
        let grid = PixelGrid::new(viewport, resolution);

        log::debug!(
            "rendering {} at {} with {} lanes of {} (viewport height {:e})",
            fractal.kind(),
            resolution,
            request.backend.lanes(precision),
            precision,
            viewport.height()
        );

        let (threads, strips) = if request.threaded {
            let threads = calculate_threads_for_render(
                request.backend,
                self.config.thread_override,
                self.config.wide_thread_cap,
            );
            let strips = calculate_strips_for_height(threads, resolution.height());

            log::debug!("{} strips for {} available workers", strips, threads);

            render_strips(
                buffer.pixels_mut(),
                &grid,
                strips,
                walker,
                fractal,
                &request.gradient,
            )?;
            (strips, strips)
        } else {
            walker(fractal, &request.gradient, &grid, 0, buffer.pixels_mut());
            (1, 1)
        };

        Ok(RenderReport {
            precision,
            backend: request.backend,
            threads,
            strips,
            elapsed: started.elapsed(),
        })
    }
}

fn render_strips(
    pixels: &mut [Rgba],
    grid: &PixelGrid,
    total_strips: usize,
    walker: StripWalker,
    fractal: &Fractal,
    gradient: &Gradient,
) -> Result<(), RenderError> {
    let width = grid.width();
    let height = (pixels.len() / width) as u32;

    let mut rest = pixels;
    let mut strips = Vec::with_capacity(total_strips);

    for strip_num in 0..total_strips {
        let (first_row, row_count) = strip_rows(strip_num, total_strips, height);
        let (strip, tail) = mem::take(&mut rest).split_at_mut(row_count * width);
        strips.push((first_row, strip));
        rest = tail;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(total_strips)
        .thread_name(|index| format!("render-strip-{}", index))
        .build()?;

    pool.scope(|scope| {
        for (first_row, strip) in strips {
            scope.spawn(move |_| {
                log::trace!("strip from row {} ({} rows)", first_row, strip.len() / width);
                walker(fractal, gradient, grid, first_row, strip);
            });
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use std::num::NonZeroUsize;

    fn renderer(width: u32, height: u32, threads: usize) -> Renderer {
        Renderer::new(RenderConfig {
            thread_override: NonZeroUsize::new(threads),
            ..RenderConfig::with_resolution(Resolution::new(width, height).unwrap())
        })
    }

    fn request(backend: Backend, threaded: bool) -> RenderRequest {
        RenderRequest {
            backend,
            threaded,
            gradient: Gradient::Ember,
        }
    }

    fn render_frame(
        renderer: &Renderer,
        kind: FractalKind,
        request: &RenderRequest,
    ) -> (PixelBuffer, RenderReport) {
        let mut buffer = PixelBuffer::new(renderer.config().resolution);
        let fractal = Fractal::from(kind);
        let report = renderer
            .render(&mut buffer, &kind.default_viewport(), &fractal, request)
            .unwrap();

        (buffer, report)
    }

    #[test]
    fn test_buffer_of_other_resolution_is_rejected() {
        let renderer = renderer(20, 10, 2);
        let mut buffer = PixelBuffer::new(Resolution::new(10, 20).unwrap());

        let result = renderer.render(
            &mut buffer,
            &FractalKind::Mandelbrot.default_viewport(),
            &Fractal::default(),
            &RenderRequest::default(),
        );

        assert!(matches!(result, Err(RenderError::ResolutionMismatch { .. })));
    }

    #[test]
    fn test_every_pixel_is_overwritten() {
        let renderer = renderer(13, 7, 3);
        let sentinel = Rgba {
            r: 1,
            g: 2,
            b: 3,
            a: 255,
        };

        for threaded in [false, true] {
            let mut buffer =
                PixelBuffer::from_data(renderer.config().resolution, vec![sentinel; 13 * 7])
                    .unwrap();

            renderer
                .render(
                    &mut buffer,
                    &FractalKind::Nova.default_viewport(),
                    &Fractal::from(FractalKind::Nova),
                    &request(Backend::Wide, threaded),
                )
                .unwrap();

            assert!(buffer.pixels().iter().all(|pixel| pixel.a == 0));
        }
    }

    #[test]
    fn test_threaded_matches_single_threaded_for_every_backend() {
        let renderer = renderer(21, 11, 4);

        for &backend in Backend::ALL {
            let (serial, _) =
                render_frame(&renderer, FractalKind::Phoenix, &request(backend, false));
            let (threaded, report) =
                render_frame(&renderer, FractalKind::Phoenix, &request(backend, true));

            assert_eq!(threaded, serial, "{}", backend);
            assert_eq!(report.strips, 4);
        }
    }

    #[test]
    fn test_backends_agree_when_width_is_not_a_lane_multiple() {
        let renderer = renderer(19, 6, 2);
        let kind = FractalKind::BurningShip;
        let (scalar, _) = render_frame(&renderer, kind, &request(Backend::Scalar, false));
        let (narrow, _) = render_frame(&renderer, kind, &request(Backend::Narrow, false));
        let (wide, _) = render_frame(&renderer, kind, &request(Backend::Wide, true));

        assert_eq!(narrow, scalar);
        assert_eq!(wide, scalar);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = renderer(16, 9, 3);
        let request = request(Backend::Narrow, true);

        let (first, _) = render_frame(&renderer, FractalKind::Multibrot, &request);
        let mut second = first.clone();
        renderer
            .render(
                &mut second,
                &FractalKind::Multibrot.default_viewport(),
                &Fractal::from(FractalKind::Multibrot),
                &request,
            )
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_strips_never_exceed_rows() {
        let renderer = renderer(10, 3, 8);

        let (_, report) =
            render_frame(&renderer, FractalKind::Mandelbrot, &request(Backend::Scalar, true));

        assert_eq!(report.strips, 3);
    }

    #[test]
    fn test_reported_threads_are_the_workers_that_ran() {
        let renderer = renderer(10, 3, 8);
        let mut buffer = PixelBuffer::new(renderer.config().resolution);
        let fractal = Fractal::from(FractalKind::Mandelbrot);

        let report = renderer
            .render(
                &mut buffer,
                &FractalKind::Mandelbrot.default_viewport(),
                &fractal,
                &request(Backend::Scalar, true),
            )
            .unwrap();

        assert_eq!(report.threads, 3);
        assert_eq!(report.threads, report.strips);
    }

    #[test]
    fn test_wide_thread_cap_applies() {
        let renderer = Renderer::new(RenderConfig {
            thread_override: NonZeroUsize::new(16),
            wide_thread_cap: NonZeroUsize::new(2).unwrap(),
            ..RenderConfig::with_resolution(Resolution::new(8, 8).unwrap())
        });

        let (_, report) =
            render_frame(&renderer, FractalKind::Mandelbrot, &request(Backend::Wide, true));

        assert_eq!(report.threads, 2);
        assert_eq!(report.strips, 2);
    }

    #[test]
    fn test_single_threaded_pass_reports_one_strip() {
        let renderer = renderer(8, 8, 4);

        let (_, report) =
            render_frame(&renderer, FractalKind::Mandelbrot, &request(Backend::Wide, false));

        assert_eq!(report.threads, 1);
        assert_eq!(report.strips, 1);
        assert_eq!(report.backend, Backend::Wide);
        assert_eq!(report.precision, Precision::Single);
    }

    #[test]
    fn test_deep_viewport_switches_to_double_precision() {
        let renderer = renderer(8, 4, 1);
        let mut buffer = PixelBuffer::new(renderer.config().resolution);
        let viewport = Viewport::new(-0.75, -0.75 + 1e-5, 0.1, 0.1 + 5e-5).unwrap();

        let report = renderer
            .render(
                &mut buffer,
                &viewport,
                &Fractal::default(),
                &request(Backend::Narrow, false),
            )
            .unwrap();

        assert_eq!(report.precision, Precision::Double);
    }
}
