use crate::units::Px;
use owned_ttf_parser::OutlineBuilder;

/// Two characters covering both an ascender and a descender. Measuring them gives a
/// full-height line metric that doesn't depend on the text actually being set.
pub const REFERENCE_GLYPHS: &str = "Mg";

/// The rendered extent of a run of text
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextExtent {
    pub width: Px,
    pub height: Px,
}

/// Something that can tell how large a string will be once it is drawn with one
/// particular font face at a given size (in points, where 1pt renders as 1px).
///
/// Implementations are not required to be reentrant; concurrent renders should each
/// own their own measurer.
pub trait TextMeasurer {
    fn measure(&self, text: &str, size: f32) -> TextExtent;

    /// Convenience for when only the advance width matters
    fn width(&self, text: &str, size: f32) -> Px {
        self.measure(text, size).width
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        (**self).measure(text, size)
    }
}

/// A [TextMeasurer] that can also trace the shapes it measured, so that what is drawn
/// is exactly as wide as what was laid out.
pub trait TextOutliner: TextMeasurer {
    /// Trace `text` set at `size` into `pen`, in pixels. The line starts at the origin,
    /// which sits on the baseline, and y grows upwards.
    fn outline(&self, text: &str, size: f32, pen: &mut dyn OutlineBuilder);
}

/// The line height of a font at the given size, taken from the [REFERENCE_GLYPHS]
pub fn line_height<M: TextMeasurer + ?Sized>(measure: &M, size: f32) -> Px {
    measure.measure(REFERENCE_GLYPHS, size).height
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Every character advances by `advance * size` and every string is `height * size`
    /// tall, which makes wrap points easy to reason about in tests.
    pub struct FixedAdvance {
        pub advance: f32,
        pub height: f32,
    }

    impl FixedAdvance {
        /// One pixel per character at size 1.0
        pub fn unit() -> FixedAdvance {
            FixedAdvance {
                advance: 1.0,
                height: 1.0,
            }
        }
    }

    impl TextMeasurer for FixedAdvance {
        fn measure(&self, text: &str, size: f32) -> TextExtent {
            TextExtent {
                width: Px(text.chars().count() as f32 * self.advance * size),
                height: Px(self.height * size),
            }
        }
    }

    /// Every visible character is a solid block standing on the baseline
    impl TextOutliner for FixedAdvance {
        fn outline(&self, text: &str, size: f32, pen: &mut dyn OutlineBuilder) {
            let (advance, height) = (self.advance * size, self.height * size);
            for (i, ch) in text.chars().enumerate() {
                if ch.is_whitespace() {
                    continue;
                }
                let x = i as f32 * advance;
                pen.move_to(x, 0.0);
                pen.line_to(x + advance, 0.0);
                pen.line_to(x + advance, height);
                pen.line_to(x, height);
                pen.close();
            }
        }
    }
}
