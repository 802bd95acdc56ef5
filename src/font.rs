use crate::measure::{TextExtent, TextMeasurer, TextOutliner};
use crate::{CardError, Px};
use log::debug;
use owned_ttf_parser::{AsFaceRef, GlyphId, OutlineBuilder, OwnedFace};
use std::path::{Path, PathBuf};

/// Font files that are commonly installed, searched in order when no font is given and
/// there is no bundled font next to the working directory
pub const DEFAULT_SYSTEM_FONTS: &[&str] = &[
    "/System/Library/Fonts/SFCompact.ttf",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/System/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Where a bundled font is looked for, relative to the working directory
pub const LOCAL_FONT: &str = "fonts/OpenSans-Bold.ttf";

/// A parsed TrueType or OpenType font face, used to measure and draw text.
///
/// Fonts are immutable once loaded and can be shared between threads, but each render
/// should still be handed its own measurer.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, CardError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Font, CardError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CardError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} bytes of font data from {}", bytes.len(), path.display());
        Font::load(bytes)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: f32) -> f32 {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: f32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: f32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().descender() as f32)
    }

    /// The glyph used to draw `ch`. Characters missing from the font are drawn (and
    /// measured) as the replacement character, or as `?` if even that is missing.
    fn glyph(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Horizontal advance of a glyph, in font units
    fn advance(&self, glyph: GlyphId) -> f32 {
        self.face
            .as_face_ref()
            .glyph_hor_advance(glyph)
            .unwrap_or_default() as f32
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: f32) -> Px {
        let scaling = self.scaling(size);
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|gid| Px(scaling * self.advance(gid)))
            .sum()
    }

    /// The vertical ink extent of `text`: from the highest point of any glyph down to the
    /// lowest (or the baseline, when nothing descends). Falls back to ascent minus descent
    /// when none of the glyphs have outlines.
    pub fn height_of_text(&self, text: &str, size: f32) -> Px {
        let face = self.face.as_face_ref();
        let bounds = text
            .chars()
            .filter_map(|ch| self.glyph(ch))
            .filter_map(|gid| face.glyph_bounding_box(gid))
            .fold(None, |acc: Option<(i16, i16)>, bbox| match acc {
                Some((top, bottom)) => Some((top.max(bbox.y_max), bottom.min(bbox.y_min))),
                None => Some((bbox.y_max, bbox.y_min.min(0))),
            });

        match bounds {
            Some((top, bottom)) => Px(self.scaling(size) * (top as f32 - bottom as f32)),
            None => self.ascent(size) - self.descent(size),
        }
    }
}

impl TextMeasurer for Font {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        TextExtent {
            width: self.width_of_text(text, size),
            height: self.height_of_text(text, size),
        }
    }
}

impl TextOutliner for Font {
    fn outline(&self, text: &str, size: f32, pen: &mut dyn OutlineBuilder) {
        let face = self.face.as_face_ref();
        let mut pen = ScaledPen {
            pen,
            scaling: self.scaling(size),
            x: 0.0,
        };
        for glyph in text.chars().filter_map(|ch| self.glyph(ch)) {
            // spaces advance the pen but have no outline
            face.outline_glyph(glyph, &mut pen);
            pen.x += pen.scaling * self.advance(glyph);
        }
    }
}

/// Forwards a glyph outline given in font units to `pen`, scaled to pixels and shifted
/// `x` pixels along the line
struct ScaledPen<'p> {
    pen: &'p mut dyn OutlineBuilder,
    scaling: f32,
    x: f32,
}

impl ScaledPen<'_> {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scaling, y * self.scaling)
    }
}

impl OutlineBuilder for ScaledPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.pen.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.pen.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.pen.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.pen.curve_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.pen.close();
    }
}

/// Decide which font file to use.
///
/// A `custom` path is used as given, without checking that it exists. Otherwise the
/// bundled [LOCAL_FONT] is used if present, then the first of `system_paths` that exists.
pub fn resolve_font_path<P: AsRef<Path>>(
    custom: Option<&Path>,
    system_paths: &[P],
) -> Result<PathBuf, CardError> {
    if let Some(custom) = custom {
        return Ok(custom.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_FONT);
    if local.exists() {
        return Ok(local);
    }

    system_paths
        .iter()
        .map(|path| path.as_ref())
        .find(|path| path.exists())
        .map(Path::to_path_buf)
        .ok_or(CardError::FontNotFound { path: local })
}
