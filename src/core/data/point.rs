/// A pixel position, `x` to the right and `y` downwards from the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
