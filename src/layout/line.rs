use std::fmt;

/// A single line of laid out text: an ordered run of words that is rendered with one
/// space between neighbouring words. Words are never split.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    words: Vec<String>,
}

impl Line {
    pub fn new(words: Vec<String>) -> Line {
        Line { words }
    }

    /// Split `text` on whitespace into a line
    pub fn from_text(text: &str) -> Line {
        Line {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The line as it will be drawn
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Length of [Line::text] in UTF-8 bytes, without allocating it
    pub fn byte_len(&self) -> usize {
        let spaces = self.words.len().saturating_sub(1);
        self.words.iter().map(String::len).sum::<usize>() + spaces
    }

    /// Remove the trailing word, if any
    pub fn pop_word(&mut self) -> Option<String> {
        self.words.pop()
    }

    /// Insert a word at the start of the line
    pub fn prepend_word(&mut self, word: String) {
        self.words.insert(0, word);
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::from_text(text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}
