use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use escape_time::{
    Backend, Fractal, FractalKind, Gradient, PixelBuffer, RenderConfig, RenderRequest, Renderer,
    Resolution, Viewport, narrow_f32, scalar_f32, wide_f32,
};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 200;

fn bench_backends(c: &mut Criterion) {
    let renderer = Renderer::new(RenderConfig::with_resolution(
        Resolution::new(WIDTH, HEIGHT).expect("bench resolution is valid"),
    ));
    let fractal = Fractal::from(FractalKind::Mandelbrot);
    let viewport = FractalKind::Mandelbrot.default_viewport();
    let mut buffer = PixelBuffer::new(renderer.config().resolution);

    let mut group = c.benchmark_group("render_mandelbrot");
    group.sample_size(10);

    for &backend in Backend::ALL {
        for threaded in [false, true] {
            let request = RenderRequest {
                backend,
                threaded,
                gradient: Gradient::default(),
            };
            let label = if threaded { "threaded" } else { "single" };

            let id = BenchmarkId::new(backend.to_string(), label);

            group.bench_with_input(id, &request, |b, request| {
                b.iter(|| {
                    renderer
                        .render(&mut buffer, &viewport, &fractal, request)
                        .expect("render succeeds");
                })
            });
        }
    }

    group.finish();
}

fn bench_double_precision(c: &mut Criterion) {
    let renderer = Renderer::new(RenderConfig::with_resolution(
        Resolution::new(WIDTH, HEIGHT).expect("bench resolution is valid"),
    ));
    let fractal = Fractal::from(FractalKind::Mandelbrot);
    let viewport =
        Viewport::new(-0.7436, -0.7435, 0.1318, 0.13185).expect("deep viewport is valid");
    let mut buffer = PixelBuffer::new(renderer.config().resolution);
    let request = RenderRequest {
        backend: Backend::Wide,
        threaded: true,
        gradient: Gradient::default(),
    };

    let mut group = c.benchmark_group("render_deep_zoom");
    group.sample_size(10);
    group.bench_function("wide_f64_threaded", |b| {
        b.iter(|| {
            renderer
                .render(&mut buffer, &viewport, &fractal, &request)
                .expect("render succeeds");
        })
    });
    group.finish();
}

fn bench_lane_groups(c: &mut Criterion) {
    let fractal = Fractal::from(FractalKind::BurningShip);
    let cr = [-1.76, -1.75, -1.74, -1.73, -1.72, -1.71, -1.70, -1.69];
    let ci = [-0.03; 8];

    c.bench_function("scalar_f32_x8", |b| {
        b.iter(|| {
            for i in 0..8 {
                black_box(scalar_f32(&fractal, black_box(cr[i]), black_box(ci[i])));
            }
        })
    });

    c.bench_function("narrow_f32_x2", |b| {
        b.iter(|| {
            black_box(narrow_f32(&fractal, black_box([cr[0], cr[1], cr[2], cr[3]]), [ci[0]; 4]));
            black_box(narrow_f32(&fractal, black_box([cr[4], cr[5], cr[6], cr[7]]), [ci[0]; 4]));
        })
    });

    c.bench_function("wide_f32_x1", |b| {
        b.iter(|| black_box(wide_f32(&fractal, black_box(cr), black_box(ci))))
    });
}

criterion_group!(benches, bench_backends, bench_double_precision, bench_lane_groups);
criterion_main!(benches);
