//! Line layout for a block of text and the lines around it.
//!
//! Laying out a card title goes through a fixed pipeline:
//!
//! 1. [wrap] greedily breaks the text into lines that fit a width,
//! 2. [balance] pulls a word down onto a lone trailing word, rebalancing the lines above
//!    with [cascade_upward],
//! 3. a [BaselineGrid] gives every line its baseline.
//!
//! Single lines such as a URL caption are sized with [fit_font_size] and snapped onto the
//! _title's_ grid, so that they share its vertical rhythm.
//!
//! # Example
//!
//! ```
//! use social_card::layout::{balance, wrap, BaselineGrid};
//! use social_card::{Px, TextExtent, TextMeasurer};
//!
//! // every character is half the font size wide
//! struct Mono;
//! impl TextMeasurer for Mono {
//!     fn measure(&self, text: &str, size: f32) -> TextExtent {
//!         TextExtent {
//!             width: Px(text.chars().count() as f32 * size * 0.5),
//!             height: Px(size),
//!         }
//!     }
//! }
//!
//! // 20 characters per line: the greedy wrap strands "Services" on its own
//! let lines = wrap("Building High Performance Web Services", Px(400.0), 40.0, &Mono);
//! let texts: Vec<String> = lines.iter().map(|line| line.text()).collect();
//! assert_eq!(texts, vec!["Building High", "Performance Web", "Services"]);
//!
//! let lines = balance(lines);
//! let texts: Vec<String> = lines.iter().map(|line| line.text()).collect();
//! assert_eq!(texts, vec!["Building High", "Performance", "Web Services"]);
//!
//! let grid = BaselineGrid::for_font(&Mono, 40.0, Px(100.0), 1.5);
//! assert_eq!(grid.baseline(0), Px(140.0));
//! assert_eq!(grid.baseline(2), Px(260.0));
//! ```

mod fit;
mod grid;
mod line;
mod margins;
mod orphans;
mod wrap;

pub use fit::*;
pub use grid::*;
pub use line::*;
pub use margins::*;
pub use orphans::*;
pub use wrap::*;
