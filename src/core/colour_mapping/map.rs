use crate::core::data::colour::Rgba;

/// Turns an escape count into a pixel colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Rgba;

    fn display_name(&self) -> &str;
}
