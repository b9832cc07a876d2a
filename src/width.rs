//! Zenkaku (full-width) and hankaku (half-width) conversions.

use crate::tables::{self, FULLWIDTH_ASCII_OFFSET};
use smallvec::SmallVec;
use unicode_normalization::char::{compose, decompose_canonical};
use unicode_segmentation::UnicodeSegmentation;

type IgnoreSet = SmallVec<[char; 4]>;
type KanaRepr = SmallVec<[char; 2]>;

/// Selects which character classes [`z2h`] and [`h2z`] convert.
///
/// ```
/// use kanaconv::{z2h, WidthOptions};
///
/// let options = WidthOptions::alpha_num().ignore("＠");
/// assert_eq!("foo＠example.jp", z2h("ｆｏｏ＠ｅｘａｍｐｌｅ．ｊｐ", &options));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidthOptions {
    ascii: bool,
    digit: bool,
    kana: bool,
    ignore: IgnoreSet,
}

impl WidthOptions {
    /// Converts nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Digits only.
    pub fn digit() -> Self {
        Self::none().with_digit(true)
    }

    /// Digits, Latin letters and ASCII punctuation.
    pub fn alpha_num() -> Self {
        Self::digit().with_ascii(true)
    }

    /// Katakana, CJK punctuation and voicing marks only.
    pub fn kana() -> Self {
        Self::none().with_kana(true)
    }

    /// Every supported class.
    pub fn all() -> Self {
        Self::alpha_num().with_kana(true)
    }

    /// Toggle Latin letters and ASCII punctuation (digits excluded).
    pub fn with_ascii(mut self, on: bool) -> Self {
        self.ascii = on;
        self
    }

    /// Toggle digits.
    pub fn with_digit(mut self, on: bool) -> Self {
        self.digit = on;
        self
    }

    /// Toggle katakana.
    pub fn with_kana(mut self, on: bool) -> Self {
        self.kana = on;
        self
    }

    /// Leave every character of `chars` untouched.
    pub fn ignore(mut self, chars: &str) -> Self {
        for ch in chars.chars() {
            if !self.ignore.contains(&ch) {
                self.ignore.push(ch);
            }
        }
        self
    }

    /// Whether `ch` was excluded with [`WidthOptions::ignore`].
    pub fn is_ignored(&self, ch: char) -> bool {
        self.ignore.contains(&ch)
    }

    fn narrow_ascii(&self, ch: char) -> Option<char> {
        let wanted = if tables::FULLWIDTH_DIGITS.contains(&ch) {
            self.digit
        } else {
            self.ascii && tables::FULLWIDTH_ASCII.contains(&ch)
        };
        wanted.then(|| tables::shift(ch, FULLWIDTH_ASCII_OFFSET, false))
    }

    fn widen_ascii(&self, ch: char) -> Option<char> {
        let wanted = if tables::ASCII_DIGITS.contains(&ch) {
            self.digit
        } else {
            self.ascii && tables::ASCII_GRAPHIC.contains(&ch)
        };
        wanted.then(|| tables::shift(ch, FULLWIDTH_ASCII_OFFSET, true))
    }
}

/// Half-width spelling of a full-width katakana, splitting off the voicing mark.
fn narrow_kana(ch: char) -> Option<KanaRepr> {
    if let Some(half) = tables::narrow_kana(ch) {
        return Some(smallvec::smallvec![half]);
    }
    let mut parts = KanaRepr::new();
    decompose_canonical(ch, |c| parts.push(c));
    match parts[..] {
        [base, mark] => {
            let base = tables::narrow_kana(base)?;
            let mark = tables::halfwidth_mark(mark)?;
            Some(smallvec::smallvec![base, mark])
        }
        _ => None,
    }
}

/// Convert full-width characters to half-width.
///
/// Voiced katakana become a base character followed by `ﾞ` or `ﾟ`. Katakana with no
/// half-width form, such as `ヶ`, are kept.
pub fn z2h(text: &str, options: &WidthOptions) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if options.is_ignored(ch) {
            out.push(ch);
            continue;
        }
        if let Some(half) = options.narrow_ascii(ch) {
            out.push(half);
            continue;
        }
        if options.kana {
            if let Some(repr) = narrow_kana(ch) {
                out.extend(repr);
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// Convert half-width characters to full-width.
///
/// A half-width katakana followed by a voicing mark in the same grapheme cluster is
/// composed into one character (`ｶﾞ` becomes `ガ`). Marks that cannot be composed are
/// widened on their own (`ﾞ` becomes `゛`); combining marks stay as they are.
pub fn h2z(text: &str, options: &WidthOptions) -> String {
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        // a widened kana that a following mark may still combine with
        let mut pending: Option<char> = None;
        for ch in grapheme.chars() {
            if options.kana && !options.is_ignored(ch) {
                if let Some(mark) = tables::combining_mark(ch) {
                    if let Some(base) = pending.take() {
                        if let Some(voiced) = compose(base, mark) {
                            out.push(voiced);
                            continue;
                        }
                        out.push(base);
                    }
                    out.push(tables::widen_kana(ch).unwrap_or(ch));
                    continue;
                }
                if let Some(full) = tables::widen_kana(ch) {
                    out.extend(pending.replace(full));
                    continue;
                }
            }
            out.extend(pending.take());
            if options.is_ignored(ch) {
                out.push(ch);
            } else {
                out.push(options.widen_ascii(ch).unwrap_or(ch));
            }
        }
        out.extend(pending);
    }
    out
}

/// Convert full-width digits to ASCII digits, leaving everything else untouched.
pub fn zen_num_to_han_num(text: &str) -> String {
    z2h(text, &WidthOptions::digit())
}

/// Convert full-width digits, Latin letters and punctuation (U+FF01..U+FF5E) to ASCII.
pub fn zen_alpha_num_to_han_alpha_num(text: &str) -> String {
    z2h(text, &WidthOptions::alpha_num())
}

/// Convert half-width katakana to full-width katakana, merging voicing marks.
pub fn han_kana_to_zen_kana(text: &str) -> String {
    h2z(text, &WidthOptions::kana())
}

/// Convert full-width katakana to half-width katakana.
pub fn zen_kana_to_han_kana(text: &str) -> String {
    z2h(text, &WidthOptions::kana())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zen_num_to_han_num() {
        assert_eq!("123", zen_num_to_han_num("１２３"));
        assert_eq!("0123456789", zen_num_to_han_num("０１２３４５６７８９"));
        assert_eq!(
            "あいうえお123かきくけこ",
            zen_num_to_han_num("あいうえお１２３かきくけこ")
        );
        assert_eq!("あい1うえ2お1か", zen_num_to_han_num("あい1うえ２お１か"));
        assert_eq!("1aAａＡ23", zen_num_to_han_num("1aAａＡ２3"));
        assert_eq!("123ー4567", zen_num_to_han_num("１２３ー４５６７"));
        assert_eq!("＋＠．", zen_num_to_han_num("＋＠．"));
        assert_eq!("", zen_num_to_han_num(""));
    }

    #[test]
    fn test_zen_num_to_han_num_idempotent() {
        for s in ["1aAａＡ２3", "あいうえお１２３", "", "漢字"] {
            let once = zen_num_to_han_num(s);
            assert_eq!(once, zen_num_to_han_num(&once));
        }
    }

    #[test]
    fn test_zen_alpha_num_to_han_alpha_num() {
        assert_eq!("foo", zen_alpha_num_to_han_alpha_num("ｆｏｏ"));
        assert_eq!(
            "foo+123@example.jp",
            zen_alpha_num_to_han_alpha_num("ｆｏｏ＋１２３＠ｅｘａｍｐｌｅ．ｊｐ")
        );
        assert_eq!("!~", zen_alpha_num_to_han_alpha_num("！～"));
        assert_eq!(
            "カナかな漢字　ABC",
            zen_alpha_num_to_han_alpha_num("カナかな漢字　ＡＢＣ")
        );
        assert_eq!("", zen_alpha_num_to_han_alpha_num(""));
    }

    #[test]
    fn test_han_kana_to_zen_kana() {
        assert_eq!("アアア", han_kana_to_zen_kana("ｱｱｱ"));
        assert_eq!("アアア", han_kana_to_zen_kana("アアア"));
        assert_eq!("あああ", han_kana_to_zen_kana("あああ"));
        assert_eq!("1２3", han_kana_to_zen_kana("1２3"));
        assert_eq!(
            "オオ１ａaAＡ漢！”＃＄％",
            han_kana_to_zen_kana("ｵオ１ａaAＡ漢！”＃＄％")
        );
        assert_eq!("「ヲー」。、・", han_kana_to_zen_kana("｢ｦｰ｣｡､･"));
        assert_eq!("", han_kana_to_zen_kana(""));
    }

    #[test]
    fn test_han_kana_voicing_merge() {
        assert_eq!(
            "ガギグゲゴザジズゼゾダヂヅデドバビブベボ",
            han_kana_to_zen_kana("ｶﾞｷﾞｸﾞｹﾞｺﾞｻﾞｼﾞｽﾞｾﾞｿﾞﾀﾞﾁﾞﾂﾞﾃﾞﾄﾞﾊﾞﾋﾞﾌﾞﾍﾞﾎﾞ")
        );
        assert_eq!("パピプペポ", han_kana_to_zen_kana("ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ"));
        assert_eq!("ヴヷヺ", han_kana_to_zen_kana("ｳﾞﾜﾞｦﾞ"));
        assert_eq!("ガ", han_kana_to_zen_kana("ｶ\u{3099}"));
        assert_eq!("パ", han_kana_to_zen_kana("ﾊ\u{309A}"));
    }

    #[test]
    fn test_han_kana_unmergeable_marks() {
        assert_eq!("ア゛", han_kana_to_zen_kana("ｱﾞ"));
        assert_eq!("カ゜", han_kana_to_zen_kana("ｶﾟ"));
        assert_eq!("゛゜", han_kana_to_zen_kana("ﾞﾟ"));
        assert_eq!("a゛", han_kana_to_zen_kana("aﾞ"));
        assert_eq!("ガ゛", han_kana_to_zen_kana("ｶﾞﾞ"));
        // already full-width bases are left alone
        assert_eq!("カ゛", han_kana_to_zen_kana("カﾞ"));
        assert_eq!("カ\u{3099}", han_kana_to_zen_kana("カ\u{3099}"));
        assert_eq!("ア\u{3099}", han_kana_to_zen_kana("ｱ\u{3099}"));
    }

    #[test]
    fn test_zen_kana_to_han_kana() {
        assert_eq!("ｱｲｳｴｵ", zen_kana_to_han_kana("アイウエオ"));
        assert_eq!("ｶﾞｷﾞﾊﾟｳﾞ", zen_kana_to_han_kana("ガギパヴ"));
        assert_eq!("｢ｶﾀｶﾅ｣｡", zen_kana_to_han_kana("「カタカナ」。"));
        assert_eq!("ﾞﾟ", zen_kana_to_han_kana("゛゜"));
        assert_eq!("ヶヮあ１", zen_kana_to_han_kana("ヶヮあ１"));
        assert_eq!("", zen_kana_to_han_kana(""));
    }

    #[test]
    fn test_kana_width_round_trip() {
        let full = "アイウエオガギグゲゴパピプペポヴヲンッャー";
        assert_eq!(full, han_kana_to_zen_kana(&zen_kana_to_han_kana(full)));
    }

    #[test]
    fn test_h2z_ascii_and_digit() {
        assert_eq!("ＡＢＣ１２３", h2z("ABC123", &WidthOptions::alpha_num()));
        assert_eq!("ABC１２３", h2z("ABC123", &WidthOptions::digit()));
        assert_eq!(
            "ＡＢＣ123",
            h2z("ABC123", &WidthOptions::none().with_ascii(true))
        );
        assert_eq!("a b", h2z("a b", &WidthOptions::none()));
        assert_eq!("ａ ｂ", h2z("a b", &WidthOptions::all()));
    }

    #[test]
    fn test_h2z_all() {
        assert_eq!("ガ１ａ", h2z("ｶﾞ1a", &WidthOptions::all()));
    }

    #[test]
    fn test_z2h_all() {
        assert_eq!("ｶﾞ1a", z2h("ガ１ａ", &WidthOptions::all()));
        assert_eq!("ガ1a", z2h("ガ１ａ", &WidthOptions::alpha_num()));
    }

    #[test]
    fn test_ignore() {
        let options = WidthOptions::all().ignore("１ア");
        assert_eq!("１2ア", z2h("１２ア", &options));

        let options = WidthOptions::kana().ignore("ﾞ");
        assert_eq!("カﾞ", h2z("ｶﾞ", &options));

        let options = WidthOptions::all().ignore("1").ignore("1");
        assert!(options.is_ignored('1'));
        assert!(!options.is_ignored('2'));
        assert_eq!("1２", h2z("12", &options));
    }

    #[test]
    fn test_options_presets() {
        assert_eq!(WidthOptions::default(), WidthOptions::none());
        assert_eq!(
            WidthOptions::all(),
            WidthOptions::none()
                .with_ascii(true)
                .with_digit(true)
                .with_kana(true)
        );
        assert_ne!(WidthOptions::all(), WidthOptions::alpha_num());
    }
}
