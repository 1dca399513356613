use super::{Canvas, TextAlign};
use crate::Result;
use image::{DynamicImage, Rgba};

pub const SIGNATURE_WIDTH: u32 = 800;
pub const SIGNATURE_HEIGHT: u32 = 200;

pub const BACKGROUND_COLOUR: Rgba<u8> = Rgba([0x36, 0x39, 0x3F, 0xFF]);
pub const TEXT_COLOUR: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

pub const FONT_FAMILY: &str = "sans-serif";
pub const WATERMARK: &str = "https://discordsearcher.pw";

const PADDING: u32 = 10;
const AVATAR_WIDTH: u32 = 180;
const WATERMARK_FONT_SIZE: f32 = 16.0;
const ID_FONT_SIZE: f32 = 32.0;
const USERNAME_MAX_WIDTH: f32 = 550.0;
/// Text is centred on the space right of the avatar.
const TEXT_OFFSET_X: f32 = 95.0;
const ID_OFFSET_Y: f32 = 30.0;

/// Font size for a username, judged by the part before any `#discriminator`.
pub fn username_font_size(username: &str) -> f32 {
    let name = username.split_once('#').map_or(username, |(name, _)| name);

    match name.chars().count() {
        0..=10 => 64.0,
        11..=18 => 48.0,
        19..=26 => 32.0,
        _ => 24.0,
    }
}

/// Paints a signature onto `canvas`. Nothing is drawn after the first error.
pub fn draw_signature<C: Canvas + ?Sized>(
    canvas: &mut C,
    avatar: &DynamicImage,
    id: &str,
    username: &str,
) -> Result<()> {
    let (width, height) = (canvas.width(), canvas.height());

    canvas.fill_rect(0, 0, width, height, BACKGROUND_COLOUR);
    canvas.draw_image(
        avatar,
        PADDING as i64,
        PADDING as i64,
        AVATAR_WIDTH,
        height.saturating_sub(PADDING * 2),
    );

    canvas.set_text_align(TextAlign::Right);
    canvas.set_font(WATERMARK_FONT_SIZE, FONT_FAMILY)?;
    canvas.fill_text(
        WATERMARK,
        (width - PADDING) as f32,
        (height - PADDING) as f32,
        TEXT_COLOUR,
        None,
    )?;

    let text_x = width as f32 / 2.0 + TEXT_OFFSET_X;
    let text_y = height as f32 / 2.0;

    canvas.set_text_align(TextAlign::Center);
    canvas.set_font(username_font_size(username), FONT_FAMILY)?;
    canvas.fill_text(username, text_x, text_y, TEXT_COLOUR, Some(USERNAME_MAX_WIDTH))?;

    canvas.set_font(ID_FONT_SIZE, FONT_FAMILY)?;
    canvas.fill_text(id, text_x, text_y + ID_OFFSET_Y, TEXT_COLOUR, None)?;

    Ok(())
}
