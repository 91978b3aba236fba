use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (`P6`); the alpha channel is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        self.encode(buffer, &mut file)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(&self, buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
        let resolution = buffer.resolution();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", resolution.width(), resolution.height())?;
        writeln!(out, "255")?;
        out.write_all(&buffer.to_rgb_bytes())
    }
}
