use std::error::Error;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use escape_time::{
    Backend, DEFAULT_MULTIBROT_ORDER, Explorer, Fractal, FractalKind, Gradient, Multibrot, Point,
    PpmFilePresenter, RenderConfig, RenderRequest, Resolution, ZoomDirection,
};

/// Render one escape-time fractal frame to a PPM file.
///
/// View changes apply in order: every pan, then zooms in, then zooms out.
#[derive(Parser, Debug)]
#[command(name = "escape-time", version)]
struct Cli {
    /// mandelbrot, burning-ship, multibrot, nova or phoenix
    #[arg(long, default_value = "mandelbrot")]
    fractal: FractalKind,

    /// Exponent for the multibrot family, 2 to 64
    #[arg(long, default_value_t = DEFAULT_MULTIBROT_ORDER)]
    order: u32,

    /// scalar, narrow or wide
    #[arg(long, default_value = "wide")]
    backend: Backend,

    /// Split the frame into row strips rendered on separate threads
    #[arg(long)]
    threaded: bool,

    /// Worker count for --threaded instead of the detected core count
    #[arg(long)]
    threads: Option<NonZeroUsize>,

    /// Colour scheme, 1 to 7
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=7))]
    gradient: u8,

    #[arg(long, default_value_t = Resolution::default().width())]
    width: u32,

    #[arg(long, default_value_t = Resolution::default().height())]
    height: u32,

    /// Pixel to recentre on, as X,Y; repeatable
    #[arg(long, value_parser = parse_pixel)]
    pan: Vec<Point>,

    #[arg(long, default_value_t = 0)]
    zoom_in: u32,

    #[arg(long, default_value_t = 0)]
    zoom_out: u32,

    #[arg(long, short, default_value = "fractal.ppm")]
    output: PathBuf,
}

fn parse_pixel(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad X in '{}': {}", value, e))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad Y in '{}': {}", value, e))?;

    Ok(Point { x, y })
}

fn fractal_for(cli: &Cli) -> Result<Fractal, Box<dyn Error>> {
    Ok(match cli.fractal {
        FractalKind::Multibrot => Fractal::Multibrot(Multibrot::new(cli.order)?),
        kind => Fractal::from(kind),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = RenderConfig {
        thread_override: cli.threads,
        ..RenderConfig::with_resolution(Resolution::new(cli.width, cli.height)?)
    };

    let mut explorer = Explorer::new(PpmFilePresenter::new(), config);
    explorer.set_fractal(fractal_for(&cli)?);

    for &target in &cli.pan {
        explorer.pan(target)?;
    }
    for _ in 0..cli.zoom_in {
        explorer.zoom(ZoomDirection::In);
    }
    for _ in 0..cli.zoom_out {
        explorer.zoom(ZoomDirection::Out);
    }

    let request = RenderRequest {
        backend: cli.backend,
        threaded: cli.threaded,
        gradient: Gradient::from_id(cli.gradient)?,
    };

    explorer.render(&request)?;
    explorer.write(&cli.output)?;
    log::info!("saved to {}", cli.output.display());

    Ok(())
}
