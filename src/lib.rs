#![deny(missing_docs, missing_debug_implementations)]
//! Character width and kana script conversions for Japanese text.
//!
//! All conversions are pure functions from `&str` to `String`. Characters a
//! conversion does not target are copied through verbatim, so functions can be
//! chained freely:
//!
//! ```
//! use kanaconv::{han_kana_to_zen_kana, kana_to_hira, zen_num_to_han_num};
//!
//! let s = zen_num_to_han_num("ｶﾞｲﾄﾞ１２３");
//! assert_eq!("がいど123", kana_to_hira(&han_kana_to_zen_kana(&s)));
//! ```
//!
//! # Width
//!
//! * [`zen_num_to_han_num`]: full-width digits (U+FF10..U+FF19) to ASCII digits.
//! * [`zen_alpha_num_to_han_alpha_num`]: the whole full-width ASCII block
//!   (U+FF01..U+FF5E) to ASCII.
//! * [`han_kana_to_zen_kana`] and [`zen_kana_to_han_kana`]: half-width katakana
//!   to full-width and back. A half-width base followed by `ﾞ` or `ﾟ` is merged
//!   into the precomposed voiced character whenever Unicode canonical
//!   composition defines one.
//! * [`z2h`] and [`h2z`] take a [`WidthOptions`] to pick the character classes.
//!
//! # Script
//!
//! * [`hira_to_kana`] and [`kana_to_hira`] shift between the hiragana and
//!   katakana blocks.
//!
//! # Input
//!
//! Conversions only accept `&str`. Bytes from elsewhere go through
//! [`decode_utf8`] once, at the boundary. [`normalize`] applies a Unicode
//! normalization form; the conversions never normalize implicitly, since NFKC
//! would also fold the characters they are meant to leave alone.

pub(crate) mod tables;

pub(crate) mod text;

pub(crate) mod width;

pub(crate) mod script;

pub use text::{
    decode_utf8, decode_utf8_owned, normalize, normalize_nfkc, Error, NormalizationForm, Result,
};

pub use width::{
    h2z, han_kana_to_zen_kana, z2h, zen_alpha_num_to_han_alpha_num, zen_kana_to_han_kana,
    zen_num_to_han_num, WidthOptions,
};

pub use script::{hira_to_kana, is_hiragana, is_katakana, kana_to_hira};
