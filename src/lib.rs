//! Typographic layout for social preview cards.
//!
//! A card's title is wrapped greedily to the available width, rebalanced so that its last
//! line never holds a single word when that can be avoided, and placed on a baseline
//! grid derived from the title font. The caption (usually a URL) is shrunk until it fits
//! on one line and snapped onto the lowest baseline of that same grid, so both share a
//! vertical rhythm even though they use different fonts and sizes.
//!
//! Layout itself is pure: it needs something that can measure text (a [TextMeasurer],
//! such as a loaded [Font]) and produces lines with their baselines. Drawing goes
//! through a [Renderer]; [raster::PixmapRenderer] traces the same fonts into pixels and
//! saves them as PNG.

mod card;
pub use card::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Utility functions and structures to lay out lines of text
pub mod layout;

mod measure;
pub use measure::*;

mod rect;
pub use rect::*;

mod render;
pub use render::*;

pub mod raster;

mod units;
pub use units::*;
