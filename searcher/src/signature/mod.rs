//! Renders an 800x200 "signature" card from a user's avatar, tag and ID.

mod canvas;
pub use canvas::{Canvas, TextAlign};

mod raster;
pub use raster::{bundled_font, load_font, RasterCanvas};

mod layout;
pub use layout::*;

mod renderer;
pub use renderer::{load_avatar, SignatureRenderer};
