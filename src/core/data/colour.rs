/// One output pixel. Alpha is carried for layout compatibility with 32-bit
/// framebuffers and is always written as 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[repr(C, align(4))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0 }
    }
}
