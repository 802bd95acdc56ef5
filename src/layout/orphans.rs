use super::Line;
use log::trace;

/// Prevents an orphan, a final line that holds a single word.
///
/// If the last line holds exactly one word and the line above it has at least two, the
/// trailing word of the line above is moved down so the last line ends up with two
/// words. Shortening that line can leave it looking stubby next to the lines above, so
/// [cascade_upward] is then run from the shortened line.
///
/// When the line above also holds a single word the orphan is unavoidable and the lines
/// are returned untouched, as are blocks with fewer than two lines and blocks whose last
/// line already has several words. Running `balance` on its own output is a no-op.
pub fn balance(mut lines: Vec<Line>) -> Vec<Line> {
    if lines.len() < 2 {
        return lines;
    }

    let last = lines.len() - 1;
    if lines[last].word_count() != 1 {
        return lines;
    }

    let prev = last - 1;
    if lines[prev].word_count() < 2 {
        trace!("orphan {:?} is unavoidable", lines[last].text());
        return lines;
    }

    if let Some(word) = lines[prev].pop_word() {
        trace!("moving {word:?} down onto orphaned line");
        lines[last].prepend_word(word);
    }

    cascade_upward(lines, prev)
}

/// Rebalances the lines above `from_index` after a word was pulled off of it.
///
/// Working upwards, the line above is inspected. If the second-to-last word of that line
/// starts at or beyond the length of the current line, its two trailing words
/// hang past the current line's right edge and the last of them is moved down. The walk
/// stops at the first line that doesn't hang over; lines above with a single word are
/// skipped without stopping.
///
/// Lengths are UTF-8 byte counts rather than measured pixels, so accented and non-Latin
/// words count as longer than they look. That's a rough approximation for proportional
/// fonts, but it is what the card layout is tuned for.
pub fn cascade_upward(mut lines: Vec<Line>, from_index: usize) -> Vec<Line> {
    if lines.is_empty() {
        return lines;
    }

    let from_index = from_index.min(lines.len() - 1);
    for idx in (1..=from_index).rev() {
        let above = &lines[idx - 1];
        if above.word_count() < 2 {
            continue;
        }

        let current_len = lines[idx].byte_len();
        if second_to_last_word_start(above) < current_len {
            break;
        }

        if let Some(word) = lines[idx - 1].pop_word() {
            trace!("cascading {word:?} down onto line {idx}");
            lines[idx].prepend_word(word);
        }
    }

    lines
}

/// Byte offset at which the second-to-last word of `line` begins when the line is
/// written out with single spaces. `line` must hold at least two words.
fn second_to_last_word_start(line: &Line) -> usize {
    let words = line.words();
    let leading = &words[..words.len() - 2];
    let len: usize = leading.iter().map(String::len).sum::<usize>()
        + leading.len().saturating_sub(1);
    if words.len() > 2 {
        len + 1
    } else {
        len
    }
}
