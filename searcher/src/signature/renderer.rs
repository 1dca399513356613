use super::{bundled_font, draw_signature, load_font, Canvas, RasterCanvas, FONT_FAMILY};
use super::{SIGNATURE_HEIGHT, SIGNATURE_WIDTH};
use crate::{Config, Error, Result};
use ab_glyph::FontArc;
use image::DynamicImage;
use tracing::{debug, warn};

/// Downloads and decodes a raster image. Anything the decoder does not
/// recognise, such as SVG or an HTML error page, is an [`Error::ImageLoadError`].
pub async fn load_avatar(http_client: &reqwest::Client, url: &str) -> Result<DynamicImage> {
    let load_error = |reason: String| {
        warn!(%url, %reason, "Failed to load avatar");
        Error::ImageLoadError {
            url: url.to_string(),
            reason,
        }
    };

    let res = http_client
        .get(url)
        .send()
        .await
        .map_err(|e| load_error(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(load_error(format!("server returned {}", status)));
    }

    let bytes = res.bytes().await.map_err(|e| load_error(e.to_string()))?;
    debug!(%url, len = bytes.len(), "Downloaded avatar");

    image::load_from_memory(&bytes).map_err(|e| load_error(e.to_string()))
}

#[derive(Clone)]
pub struct SignatureRenderer {
    http_client: reqwest::Client,
    font: FontArc,
}

impl SignatureRenderer {
    pub fn new(http_client: reqwest::Client, font: FontArc) -> SignatureRenderer {
        SignatureRenderer { http_client, font }
    }

    /// Loads the font named by `FONT_PATH`, or the bundled one if unset.
    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Result<SignatureRenderer> {
        let font = match &config.font_path {
            Some(path) => load_font(path)?,
            None => bundled_font()?,
        };

        Ok(Self::new(http_client, font))
    }

    pub async fn render_canvas(
        &self,
        avatar_url: &str,
        id: &str,
        username: &str,
    ) -> Result<RasterCanvas> {
        let avatar = load_avatar(&self.http_client, avatar_url).await?;

        let mut canvas = RasterCanvas::new(SIGNATURE_WIDTH, SIGNATURE_HEIGHT)
            .with_font(FONT_FAMILY, self.font.clone());
        draw_signature(&mut canvas, &avatar, id, username)?;

        Ok(canvas)
    }

    /// Renders a signature and returns it as a PNG data URL.
    pub async fn render(&self, avatar_url: &str, id: &str, username: &str) -> Result<String> {
        self.render_canvas(avatar_url, id, username)
            .await?
            .to_data_url()
    }
}
