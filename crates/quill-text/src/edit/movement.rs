//! Word-level navigation and selection over code point indices.

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::IndexRange;

/// Run of same-class characters around `index` used by double-click.
///
/// The class is whitespace vs. everything else: a hit on a word selects the
/// word, a hit on a space selects the surrounding run of spaces. A hit at the
/// end of the text looks at the last character.
pub fn word_range_at(text: &[char], index: usize) -> IndexRange {
    if text.is_empty() {
        return IndexRange::collapsed(0);
    }
    let pivot = index.min(text.len() - 1);
    let space = text[pivot].is_whitespace();

    let mut min = pivot;
    while min > 0 && text[min - 1].is_whitespace() == space {
        min -= 1;
    }
    let mut max = pivot + 1;
    while max < text.len() && text[max].is_whitespace() == space {
        max += 1;
    }
    IndexRange::new(min, max)
}

/// Start of the word before `index` (Unicode word bounds).
pub fn prev_word_start(text: &[char], index: usize) -> usize {
    let index = index.min(text.len());
    if index == 0 {
        return 0;
    }
    words(text)
        .into_iter()
        .map(|w| w.min)
        .filter(|&start| start < index)
        .last()
        .unwrap_or(0)
}

/// End of the word at or after `index` (Unicode word bounds).
pub fn next_word_end(text: &[char], index: usize) -> usize {
    let index = index.min(text.len());
    words(text)
        .into_iter()
        .map(|w| w.max)
        .find(|&end| end > index)
        .unwrap_or(text.len())
}

/// Ranges of the segments that contain at least one alphanumeric character.
fn words(text: &[char]) -> Vec<IndexRange> {
    let s: String = text.iter().collect();
    let mut out = Vec::new();
    let mut start = 0usize;
    for segment in s.split_word_bounds() {
        let len = segment.chars().count();
        if segment.chars().any(char::is_alphanumeric) {
            out.push(IndexRange::new(start, start + len));
        }
        start += len;
    }
    out
}
