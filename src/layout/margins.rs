use crate::units::Px;

/// Margins are used when laying out text on a canvas. Nothing prevents text from
/// overflowing the margins; they are guidelines for the layout functions. The top
/// margin seeds the baseline grid, the bottom margin bounds the lowest baseline and the
/// side margins bound the line width.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The width left for content on a canvas `width` pixels wide
    pub fn content_width(&self, width: Px) -> Px {
        width - self.left - self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_margins() {
        let margins = Margins::trbl(Px(135.0), Px(60.0), Px(135.0), Px(40.0));
        assert_eq!(margins.content_width(Px(1200.0)), Px(1100.0));
    }
}
