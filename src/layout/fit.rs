use crate::measure::TextMeasurer;
use crate::units::Px;
use log::debug;
use serde::{Deserialize, Serialize};

/// The font sizes to try when fitting a single line of text, from `max` down to `min`
/// in decrements of `step`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub max: f32,
    pub min: f32,
    pub step: f32,
}

impl SizeRange {
    pub fn new(max: f32, min: f32, step: f32) -> SizeRange {
        SizeRange { max, min, step }
    }

    /// The candidate sizes, largest first. A non-positive step only yields `max`.
    pub fn candidates(&self) -> impl Iterator<Item = f32> + '_ {
        let step = self.step;
        let single = !(step > 0.0 && step.is_finite());
        std::iter::successors(Some(self.max), move |&size| {
            if single {
                return None;
            }
            // a step lost to rounding would never reach the minimum
            let next = size - step;
            (next < size).then_some(next)
        })
        .take_while(move |&size| size >= self.min)
    }
}

/// The outcome of fitting a line of text
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontFit {
    /// The chosen font size
    pub size: f32,
    /// Whether the text is no wider than the available width at that size. When this is
    /// `false` the text was accepted at the minimum size and will overflow.
    pub fits: bool,
}

/// Picks the largest size in `sizes` at which `text` is no wider than `max_width`.
///
/// When the text is too wide even at the smallest size, the minimum size is accepted and
/// the result is flagged with `fits == false`. The caller decides what to do with the
/// overflow; it's never an error.
pub fn fit_font_size<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: Px,
    sizes: &SizeRange,
    measure: &M,
) -> FontFit {
    for size in sizes.candidates() {
        if measure.width(text, size) <= max_width {
            debug!("{text:?} fits within {max_width} at {size}pt");
            return FontFit { size, fits: true };
        }
    }

    let fits = measure.width(text, sizes.min) <= max_width;
    debug!("{text:?} falls back to the minimum size of {}pt", sizes.min);
    FontFit {
        size: sizes.min,
        fits,
    }
}
