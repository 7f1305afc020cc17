use crate::colour::Colour;
use crate::error::HandwriteError;
use crate::rect::Rect;
use image::RgbaImage;
use tiny_skia::{FillRule, Paint, Path, Pixmap, Transform};

/// The raster surface a single page is written on. It is exclusively owned by the
/// page being rendered and turned into an [`RgbaImage`] once the page is done.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a canvas filled with the background colour
    pub fn new(width: u32, height: u32, background: Colour) -> Result<Canvas, HandwriteError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(HandwriteError::Canvas { width, height })?;
        pixmap.fill(background.into());
        Ok(Canvas { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill a path (in canvas coordinates before `transform`) with a solid colour
    pub fn fill_path(&mut self, path: &Path, colour: Colour, transform: Transform) {
        self.pixmap.fill_path(
            path,
            &paint(colour),
            FillRule::Winding,
            transform,
            None,
        );
    }

    /// Fill a rectangle with a solid colour. Empty rectangles draw nothing.
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour, transform: Transform) {
        if let Some(rect) = rect.to_skia() {
            self.pixmap.fill_rect(rect, &paint(colour), transform, None);
        }
    }

    /// Convert the premultiplied surface into a straight-alpha image
    pub fn into_image(self) -> Result<RgbaImage, HandwriteError> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(width, height, data).ok_or(HandwriteError::Canvas { width, height })
    }
}

fn paint(colour: Colour) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(colour.r, colour.g, colour.b, colour.a);
    paint.anti_alias = true;
    paint
}
