use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::config::RenderConfig;
use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::renderer::Renderer;
use crate::core::actions::render::request::{RenderReport, RenderRequest};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::{Viewport, ZoomDirection};
use crate::core::fractals::fractal::Fractal;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// Session state for exploring one fractal at a time: which family is shown,
/// where the viewport sits, and the most recent frame.
pub struct Explorer<P: FilePresenterPort> {
    presenter: P,
    renderer: Renderer,
    fractal: Fractal,
    viewport: Viewport,
    buffer: PixelBuffer,
    last_report: Option<RenderReport>,
}

impl<P: FilePresenterPort> Explorer<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        let fractal = Fractal::default();

        Self {
            presenter,
            buffer: PixelBuffer::new(config.resolution),
            renderer: Renderer::new(config),
            viewport: fractal.default_viewport(),
            fractal,
            last_report: None,
        }
    }

    #[must_use]
    pub fn fractal(&self) -> &Fractal {
        &self.fractal
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.renderer.config().resolution
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&RenderReport> {
        self.last_report.as_ref()
    }

    /// Switches family and jumps to its default viewport.
    pub fn select_fractal(&mut self, kind: FractalKind) {
        self.set_fractal(Fractal::from(kind));
    }

    /// Like [`Self::select_fractal`] but keeps caller-chosen parameters.
    pub fn set_fractal(&mut self, fractal: Fractal) {
        log::debug!("switching to {}", fractal.kind());

        self.fractal = fractal;
        self.reset_view();
    }

    pub fn reset_view(&mut self) {
        self.viewport = self.fractal.default_viewport();
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.viewport.zoom(direction);
    }

    /// Centres the view on the complex point under `target`.
    pub fn pan(&mut self, target: Point) -> Result<(), PixelToComplexCoordsError> {
        let resolution = self.resolution();

        self.viewport.pan(target, resolution)
    }

    pub fn render(&mut self, request: &RenderRequest) -> Result<RenderReport, RenderError> {
        let report = self
            .renderer
            .render(&mut self.buffer, &self.viewport, &self.fractal, request)?;

        log::info!(
            "{} frame in {:?} ({} backend, {}, {} strip(s) on {} thread(s))",
            self.fractal.kind(),
            report.elapsed,
            report.backend,
            report.precision,
            report.strips,
            report.threads
        );

        self.last_report = Some(report);
        Ok(report)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        self.presenter.present(&self.buffer, filepath)
    }
}
