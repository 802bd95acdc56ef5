//! Drawing cards into pixels and saving them as PNG images.

use crate::colour::Colour;
use crate::measure::TextOutliner;
use crate::rect::Rect;
use crate::render::{FontRole, Renderer, TextStyle};
use crate::units::Px;
use crate::CardError;
use image::{ImageFormat, RgbaImage};
use log::debug;
use owned_ttf_parser::OutlineBuilder;
use std::io::Cursor;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Control point distance for approximating a quarter circle with a cubic curve
const KAPPA: f32 = 0.552_284_8;

/// Width of the debug guides
const GUIDE_WIDTH: f32 = 2.0;

/// The fonts that a card's lines are drawn with. These must be the same fonts the card
/// was laid out with.
#[derive(Copy, Clone)]
pub struct CardFonts<'f> {
    pub title: &'f dyn TextOutliner,
    pub caption: &'f dyn TextOutliner,
}

impl<'f> CardFonts<'f> {
    fn get(&self, role: FontRole) -> &'f dyn TextOutliner {
        match role {
            FontRole::Title => self.title,
            FontRole::Caption => self.caption,
        }
    }
}

/// A [Renderer] that rasterises into an RGBA pixmap, tracing every line of text from the
/// glyph outlines of the fonts it was laid out with
pub struct PixmapRenderer<'f> {
    pixmap: Pixmap,
    fonts: CardFonts<'f>,
    style: TextStyle,
}

impl<'f> PixmapRenderer<'f> {
    /// Create a transparent `width` by `height` canvas
    pub fn new(width: u32, height: u32, fonts: CardFonts<'f>) -> Result<Self, CardError> {
        let pixmap = Pixmap::new(width, height).ok_or(CardError::Canvas { width, height })?;
        Ok(PixmapRenderer {
            pixmap,
            fonts,
            style: TextStyle::default(),
        })
    }

    /// The pixels drawn so far, with straight (not premultiplied) alpha
    pub fn to_image(&self) -> RgbaImage {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut image = RgbaImage::new(width, height);
        for (pixel, source) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let colour = source.demultiply();
            pixel.0 = [colour.red(), colour.green(), colour.blue(), colour.alpha()];
        }
        image
    }

    /// Encode the canvas as a PNG image
    pub fn encode_png(&self) -> Result<Vec<u8>, CardError> {
        let mut bytes = Vec::new();
        self.to_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        debug!("encoded {} bytes of PNG", bytes.len());
        Ok(bytes)
    }

    /// Encode the canvas as a PNG image and write it to `path`
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), CardError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn paint(colour: Colour, opacity: f32) -> Paint<'static> {
    let [r, g, b] = colour.to_rgb_bytes();
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, alpha);
    paint.anti_alias = true;
    paint
}

/// Places a line's outline on the canvas: glyphs are traced with y pointing up from the
/// baseline, the canvas has y pointing down
struct CanvasPen<'b> {
    builder: &'b mut PathBuilder,
    x: f32,
    y: f32,
}

impl OutlineBuilder for CanvasPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x + x1, self.y - y1, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x + x1,
            self.y - y1,
            self.x + x2,
            self.y - y2,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

impl Renderer for PixmapRenderer<'_> {
    fn set_style(&mut self, style: &TextStyle) {
        self.style = *style;
    }

    fn draw_line(&mut self, text: &str, x: Px, y: Px) {
        let mut builder = PathBuilder::new();
        let mut pen = CanvasPen {
            builder: &mut builder,
            x: x.0,
            y: y.0,
        };
        self.fonts
            .get(self.style.font)
            .outline(text, self.style.size, &mut pen);

        // nothing but whitespace
        let Some(path) = builder.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(self.style.colour, self.style.opacity),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn fill_background(&mut self, colour: Colour) {
        let [r, g, b] = colour.to_rgb_bytes();
        self.pixmap.fill(Color::from_rgba8(r, g, b, 255));
    }

    fn fill_panel(&mut self, rect: Rect, radius: Px, colour: Colour, opacity: f32) {
        let Rect { x1, y1, x2, y2 } = rect;
        let (x1, y1, x2, y2) = (x1.0, y1.0, x2.0, y2.0);
        let r = radius.0.min((x2 - x1) / 2.0).min(y2 - y1).max(0.0);
        let k = r * KAPPA;

        // square bottom corners, rounded top corners
        let mut builder = PathBuilder::new();
        builder.move_to(x1, y2);
        builder.line_to(x2, y2);
        builder.line_to(x2, y1 + r);
        builder.cubic_to(x2, y1 + r - k, x2 - r + k, y1, x2 - r, y1);
        builder.line_to(x1 + r, y1);
        builder.cubic_to(x1 + r - k, y1, x1, y1 + r - k, x1, y1 + r);
        builder.close();

        let Some(path) = builder.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(colour, opacity),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_guide(&mut self, y: Px, colour: Colour) {
        let mut builder = PathBuilder::new();
        builder.move_to(0.0, y.0);
        builder.line_to(self.pixmap.width() as f32, y.0);
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = Stroke {
            width: GUIDE_WIDTH,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(colour, 1.0),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}
