use crate::Result;
use image::{DynamicImage, Rgba};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A 2D drawing surface, modelled on the HTML canvas.
///
/// Text is positioned by its alphabetic baseline, with `x` interpreted
/// according to the current [`TextAlign`].
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: Rgba<u8>);

    /// Draws `image` scaled to fill the given rectangle.
    fn draw_image(&mut self, image: &DynamicImage, x: i64, y: i64, width: u32, height: u32);

    /// Selects a previously registered font family at the given pixel size.
    fn set_font(&mut self, size: f32, family: &str) -> Result<()>;

    fn set_text_align(&mut self, align: TextAlign);

    /// Draws `text`, horizontally condensed to fit `max_width` if given.
    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        colour: Rgba<u8>,
        max_width: Option<f32>,
    ) -> Result<()>;

    /// Serializes the surface as a `data:image/png;base64,` URL.
    fn to_data_url(&self) -> Result<String>;
}
