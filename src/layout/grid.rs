use crate::measure::{line_height, TextMeasurer};
use crate::units::Px;

/// Grids that would place more baselines than this above a limit are treated as flat
const MAX_BASELINES: usize = 1 << 16;

/// An evenly spaced set of baselines that text elements are snapped onto so that they
/// share a vertical rhythm, even when they are set in different fonts and sizes.
///
/// The first baseline sits one line height below the top margin (leaving room for the
/// ascent of the first line) and every following baseline is `line_height * spacing`
/// further down:
///
/// ```text
/// y(i) = top_margin + line_height + i * line_height * spacing
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BaselineGrid {
    pub top_margin: Px,
    pub line_height: Px,
    pub spacing: f32,
}

impl BaselineGrid {
    pub fn new(top_margin: Px, line_height: Px, spacing: f32) -> BaselineGrid {
        BaselineGrid {
            top_margin,
            line_height,
            spacing,
        }
    }

    /// Build a grid from a font's metrics, measuring the line height with the reference
    /// glyphs at the given size
    pub fn for_font<M: TextMeasurer + ?Sized>(
        measure: &M,
        size: f32,
        top_margin: Px,
        spacing: f32,
    ) -> BaselineGrid {
        BaselineGrid::new(top_margin, line_height(measure, size), spacing)
    }

    /// Distance between two neighbouring baselines
    pub fn step(&self) -> Px {
        self.line_height * self.spacing
    }

    /// The y coordinate of the `index`th baseline
    pub fn baseline(&self, index: usize) -> Px {
        self.top_margin + self.line_height + self.step() * index as f32
    }

    /// The lowest baseline that is not below `limit`. If not even the first baseline fits,
    /// the first baseline is returned anyway.
    pub fn last_baseline_within(&self, limit: Px) -> Px {
        match self.last_index_within(limit) {
            Some(index) => self.baseline(index),
            None => self.baseline(0),
        }
    }

    /// Every baseline strictly above `limit`, rounded to the nearest half pixel. These
    /// are the guides drawn when debugging a layout.
    pub fn baselines_until(&self, limit: Px) -> Vec<Px> {
        let Some(last) = self.last_index_within(limit) else {
            return Vec::new();
        };

        (0..=last)
            .map(|index| self.baseline(index))
            .filter(|&y| y < limit)
            .map(Px::round_half)
            .collect()
    }

    /// Index of the lowest baseline at or above `limit`, or `None` when the first
    /// baseline is already past it
    fn last_index_within(&self, limit: Px) -> Option<usize> {
        let first = self.baseline(0);
        if !(first <= limit) {
            return None;
        }
        if !self.has_positive_step() || !limit.is_finite() {
            return Some(0);
        }

        let estimate = ((limit - first) / self.step()).floor();
        if !(estimate < MAX_BASELINES as f32) {
            return Some(0);
        }

        let mut index = estimate as usize;
        // rounding can leave the estimate off by one in either direction
        while index > 0 && self.baseline(index) > limit {
            index -= 1;
        }
        while let Some(next) = index.checked_add(1).filter(|&next| next <= MAX_BASELINES) {
            if self.baseline(next) > limit {
                break;
            }
            index = next;
        }
        Some(index)
    }

    fn has_positive_step(&self) -> bool {
        let step = self.step();
        step.is_finite() && step > Px::ZERO
    }
}
