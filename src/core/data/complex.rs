/// A point in the complex plane, always f64 regardless of render precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}
