use super::Line;
use crate::measure::TextMeasurer;
use crate::units::Px;
use log::debug;

/// Greedily breaks `text` into lines no wider than `max_width` when drawn at `size`.
///
/// Words are accumulated onto the current line for as long as the line still fits.
/// When adding a word would overflow, the current line is committed and the word starts
/// the next one. There is no backtracking, so this is _not_ a minimum-raggedness
/// breaker; [balance](super::balance) is tuned to the shapes this produces.
///
/// A word that is wider than `max_width` on its own is still emitted as its own
/// (overflowing) line, words are never split. Empty or all-whitespace input produces no
/// lines at all.
pub fn wrap<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: Px,
    size: f32,
    measure: &M,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_text = String::new();
    let mut word_count = 0usize;

    for word in text.split_whitespace() {
        word_count += 1;

        let mut candidate = current_text.clone();
        if !candidate.is_empty() {
            candidate.push(' ');
        }
        candidate.push_str(word);

        if measure.width(&candidate, size) > max_width && !current.is_empty() {
            lines.push(Line::new(std::mem::take(&mut current)));
            current_text.clear();
            current_text.push_str(word);
        } else {
            current_text = candidate;
        }
        current.push(word.to_string());
    }

    if !current.is_empty() {
        lines.push(Line::new(current));
    }

    debug!(
        "wrapped {word_count} words into {} lines at {size}pt within {max_width}",
        lines.len()
    );
    lines
}
