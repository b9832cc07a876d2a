//! Hiragana and katakana script conversions.

use crate::tables::{
    self, HIRAGANA, HIRAGANA_ITERATION_MARKS, KANA_OFFSET, KATAKANA, KATAKANA_ITERATION_MARKS,
};

/// Whether `ch` is a hiragana with a katakana counterpart.
pub fn is_hiragana(ch: char) -> bool {
    HIRAGANA.contains(&ch) || HIRAGANA_ITERATION_MARKS.contains(&ch)
}

/// Whether `ch` is a full-width katakana with a hiragana counterpart.
///
/// `ヷ`..`ヺ`, `ー` and the half-width forms have none.
pub fn is_katakana(ch: char) -> bool {
    KATAKANA.contains(&ch) || KATAKANA_ITERATION_MARKS.contains(&ch)
}

/// Convert hiragana to katakana. Other characters pass through.
pub fn hira_to_kana(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if is_hiragana(ch) {
                tables::shift(ch, KANA_OFFSET, true)
            } else {
                ch
            }
        })
        .collect()
}

/// Convert full-width katakana to hiragana. Other characters pass through.
pub fn kana_to_hira(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if is_katakana(ch) {
                tables::shift(ch, KANA_OFFSET, false)
            } else {
                ch
            }
        })
        .collect()
}
