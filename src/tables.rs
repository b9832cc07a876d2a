//! Code point ranges and mapping tables.

use std::ops::RangeInclusive;

/// Distance between a full-width form (U+FF01..U+FF5E) and its ASCII counterpart.
pub(crate) const FULLWIDTH_ASCII_OFFSET: u32 = 0xFEE0;

pub(crate) const FULLWIDTH_DIGITS: RangeInclusive<char> = '\u{FF10}'..='\u{FF19}';
pub(crate) const FULLWIDTH_ASCII: RangeInclusive<char> = '\u{FF01}'..='\u{FF5E}';
pub(crate) const ASCII_DIGITS: RangeInclusive<char> = '0'..='9';
pub(crate) const ASCII_GRAPHIC: RangeInclusive<char> = '!'..='~';

/// Distance between the hiragana and katakana blocks.
pub(crate) const KANA_OFFSET: u32 = 0x60;

pub(crate) const HIRAGANA: RangeInclusive<char> = '\u{3041}'..='\u{3096}';
pub(crate) const HIRAGANA_ITERATION_MARKS: RangeInclusive<char> = '\u{309D}'..='\u{309E}';
pub(crate) const KATAKANA: RangeInclusive<char> = '\u{30A1}'..='\u{30F6}';
pub(crate) const KATAKANA_ITERATION_MARKS: RangeInclusive<char> = '\u{30FD}'..='\u{30FE}';

pub(crate) const COMBINING_VOICED_MARK: char = '\u{3099}';
pub(crate) const COMBINING_SEMI_VOICED_MARK: char = '\u{309A}';
pub(crate) const HALFWIDTH_VOICED_MARK: char = '\u{FF9E}';
pub(crate) const HALFWIDTH_SEMI_VOICED_MARK: char = '\u{FF9F}';

/// Half-width katakana block U+FF61..U+FF9F and the full-width form of each entry.
///
/// Indexed by `ch - HALFWIDTH_KANA_START`.
const HALFWIDTH_KANA_START: u32 = 0xFF61;
const HALFWIDTH_KANA: [char; 63] = [
    // U+FF61..U+FF65: CJK punctuation
    '。', '「', '」', '、', '・',
    // U+FF66..U+FF6F: wo, small vowels, small ya/yu/yo, small tsu
    'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ',
    // U+FF70: prolonged sound mark
    'ー',
    // U+FF71..U+FF9D
    'ア', 'イ', 'ウ', 'エ', 'オ',
    'カ', 'キ', 'ク', 'ケ', 'コ',
    'サ', 'シ', 'ス', 'セ', 'ソ',
    'タ', 'チ', 'ツ', 'テ', 'ト',
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ',
    'ハ', 'ヒ', 'フ', 'ヘ', 'ホ',
    'マ', 'ミ', 'ム', 'メ', 'モ',
    'ヤ', 'ユ', 'ヨ',
    'ラ', 'リ', 'ル', 'レ', 'ロ',
    'ワ', 'ン',
    // U+FF9E..U+FF9F: stand-alone voicing marks
    '゛', '゜',
];

/// Full-width counterpart of a half-width katakana, punctuation or voicing mark.
pub(crate) fn widen_kana(ch: char) -> Option<char> {
    let idx = (ch as u32).checked_sub(HALFWIDTH_KANA_START)?;
    HALFWIDTH_KANA.get(idx as usize).copied()
}

/// Half-width counterpart of a full-width character, for undecomposed forms only.
pub(crate) fn narrow_kana(ch: char) -> Option<char> {
    let idx = HALFWIDTH_KANA.iter().position(|&full| full == ch)?;
    char::from_u32(HALFWIDTH_KANA_START + idx as u32)
}

/// Maps a voicing mark in any of its forms to the combining mark used for composition.
pub(crate) fn combining_mark(ch: char) -> Option<char> {
    match ch {
        HALFWIDTH_VOICED_MARK | COMBINING_VOICED_MARK => Some(COMBINING_VOICED_MARK),
        HALFWIDTH_SEMI_VOICED_MARK | COMBINING_SEMI_VOICED_MARK => {
            Some(COMBINING_SEMI_VOICED_MARK)
        }
        _ => None,
    }
}

/// Half-width form of a combining voicing mark.
pub(crate) fn halfwidth_mark(ch: char) -> Option<char> {
    match ch {
        COMBINING_VOICED_MARK => Some(HALFWIDTH_VOICED_MARK),
        COMBINING_SEMI_VOICED_MARK => Some(HALFWIDTH_SEMI_VOICED_MARK),
        _ => None,
    }
}

/// Shifts `ch` by `offset` code points in the given direction, keeping `ch` if that leaves
/// the scalar value space.
#[inline]
pub(crate) fn shift(ch: char, offset: u32, up: bool) -> char {
    let v = ch as u32;
    let shifted = if up {
        v.checked_add(offset)
    } else {
        v.checked_sub(offset)
    };
    shifted.and_then(char::from_u32).unwrap_or(ch)
}
