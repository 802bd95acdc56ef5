use crate::units::*;

/// A rectangle on the canvas, specified by two opposite corners. The canvas origin is
/// the top-left corner and y grows downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (top-left) corner.
    pub x1: Px,
    /// The y-coordinate of the first (top-left) corner.
    pub y1: Px,
    /// The x-coordinate of the second (bottom-right) corner.
    pub x2: Px,
    /// The y-coordinate of the second (bottom-right) corner.
    pub y2: Px,
}

impl Rect {
    /// A rectangle covering a whole `width` by `height` canvas
    pub fn canvas(width: Px, height: Px) -> Rect {
        Rect {
            x1: Px::ZERO,
            y1: Px::ZERO,
            x2: width,
            y2: height,
        }
    }

    /// Shrink the rectangle by `amount` on every side
    pub fn inset(&self, amount: Px) -> Rect {
        Rect {
            x1: self.x1 + amount,
            y1: self.y1 + amount,
            x2: self.x2 - amount,
            y2: self.y2 - amount,
        }
    }
}
