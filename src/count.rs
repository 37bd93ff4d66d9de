// src/count.rs
//! テキスト計測の純粋関数群

use unicode_segmentation::UnicodeSegmentation;

/// Number of words in `text`.
///
/// A word is a maximal run of non-whitespace characters. Leading, trailing
/// and repeated whitespace contribute no words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of lines in `text`.
///
/// Empty text has zero lines. A trailing partial line without a `\n`
/// terminator still counts.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    // 行数：'\n' の数 +（末尾が改行でなければ +1）
    let newlines = bytecount::count(text.as_bytes(), b'\n');
    if text.ends_with('\n') { newlines } else { newlines + 1 }
}

/// Number of characters in `text`, including spaces and newlines.
///
/// Characters are Unicode scalar values (code points), not encoded bytes.
#[must_use]
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Number of extended grapheme clusters in `text`.
///
/// Combining sequences and ZWJ emoji count once each.
#[must_use]
pub fn count_graphemes(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Word/line/character counts for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub lines: usize,
    pub chars: usize,
}

impl TextStats {
    /// Measure `text`, counting characters as grapheme clusters when
    /// `chars_as_graphemes` is set.
    #[must_use]
    pub fn measure(text: &str, chars_as_graphemes: bool) -> Self {
        let chars = if chars_as_graphemes {
            count_graphemes(text)
        } else {
            count_chars(text)
        };
        Self {
            words: count_words(text),
            lines: count_lines(text),
            chars,
        }
    }
}
