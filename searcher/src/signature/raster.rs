use super::{Canvas, TextAlign};
use crate::{Error, Result};
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// DejaVu Sans, used when no font file is configured.
pub fn bundled_font() -> Result<FontArc> {
    FontArc::try_from_slice(BUNDLED_FONT).map_err(|e| Error::FontLoadError(e.to_string()))
}

/// Reads a TrueType / OpenType font from disk.
pub fn load_font(path: &Path) -> Result<FontArc> {
    let data = std::fs::read(path)
        .map_err(|e| Error::FontLoadError(format!("{}: {}", path.display(), e)))?;

    FontArc::try_from_vec(data)
        .map_err(|e| Error::FontLoadError(format!("{}: {}", path.display(), e)))
}

/// [`Canvas`] backed by an in-memory RGBA buffer.
pub struct RasterCanvas {
    buffer: RgbaImage,
    fonts: HashMap<String, FontArc>,
    font: Option<(FontArc, PxScale)>,
    align: TextAlign,
}

impl RasterCanvas {
    /// Creates a fully transparent canvas with no fonts registered.
    pub fn new(width: u32, height: u32) -> RasterCanvas {
        RasterCanvas {
            buffer: RgbaImage::new(width, height),
            fonts: HashMap::new(),
            font: None,
            align: TextAlign::default(),
        }
    }

    pub fn with_font(mut self, family: impl Into<String>, font: FontArc) -> RasterCanvas {
        self.fonts.insert(family.into(), font);
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.buffer
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: Rgba<u8>) {
        if width == 0 || height == 0 {
            return;
        }

        draw_filled_rect_mut(&mut self.buffer, Rect::at(x, y).of_size(width, height), colour);
    }

    fn draw_image(&mut self, image: &DynamicImage, x: i64, y: i64, width: u32, height: u32) {
        let scaled = imageops::resize(&image.to_rgba8(), width, height, FilterType::Triangle);
        imageops::overlay(&mut self.buffer, &scaled, x, y);
    }

    fn set_font(&mut self, size: f32, family: &str) -> Result<()> {
        let font = self
            .fonts
            .get(family)
            .ok_or_else(|| Error::FontLoadError(format!("font family {} is not registered", family)))?;

        self.font = Some((font.clone(), PxScale::from(size)));
        Ok(())
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        colour: Rgba<u8>,
        max_width: Option<f32>,
    ) -> Result<()> {
        let (font, mut scale) = self
            .font
            .clone()
            .ok_or_else(|| Error::FontLoadError("no font selected".to_string()))?;

        let mut width = text_size(scale, &font, text).0 as f32;
        if let Some(max_width) = max_width {
            if width > max_width && width > 0.0 {
                scale.x *= max_width / width;
                width = text_size(scale, &font, text).0 as f32;
            }
        }

        let left = match self.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let top = y - font.as_scaled(scale).ascent();

        draw_text_mut(
            &mut self.buffer,
            colour,
            left.round() as i32,
            top.round() as i32,
            scale,
            &font,
            text,
        );
        Ok(())
    }

    fn to_data_url(&self) -> Result<String> {
        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(self.to_png()?)
        ))
    }
}
