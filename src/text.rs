//! Decoding raw bytes into text, and Unicode normalization forms.

use log::{debug, trace};
use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;
use unicode_normalization::{is_nfc, is_nfd, is_nfkc, is_nfkd, UnicodeNormalization};

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8 sequence after {valid_up_to} valid bytes")]
    InvalidEncoding {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
        /// Underlying decoder error.
        #[source]
        source: std::str::Utf8Error,
    },

    /// A normalization form name was not recognized.
    #[error("unknown normalization form: {0}")]
    UnknownForm(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(source: std::str::Utf8Error) -> Self {
        debug!(
            "rejecting input: invalid UTF-8 after {} bytes",
            source.valid_up_to()
        );
        Error::InvalidEncoding {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Interpret a byte slice as text.
///
/// This is the only boundary where raw bytes enter the crate; every conversion
/// function works on `&str`. No copy is made, so text that was already valid is
/// handed back as the very same slice.
pub fn decode_utf8(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Owned variant of [`decode_utf8`], reusing the buffer.
pub fn decode_utf8_owned(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::from(e.utf8_error()))
}

/// A Unicode normalization form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    /// Canonical composition.
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility composition.
    #[default]
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl NormalizationForm {
    /// Returns the conventional name of this form, e.g. `"NFKC"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::Nfkd => "NFKD",
        }
    }

    /// Whether `text` is already in this form.
    pub fn is_normalized(&self, text: &str) -> bool {
        match self {
            NormalizationForm::Nfc => is_nfc(text),
            NormalizationForm::Nfd => is_nfd(text),
            NormalizationForm::Nfkc => is_nfkc(text),
            NormalizationForm::Nfkd => is_nfkd(text),
        }
    }

    fn apply(&self, text: &str) -> String {
        match self {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfd => text.nfd().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
            NormalizationForm::Nfkd => text.nfkd().collect(),
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NFC" => Ok(NormalizationForm::Nfc),
            "NFD" => Ok(NormalizationForm::Nfd),
            "NFKC" => Ok(NormalizationForm::Nfkc),
            "NFKD" => Ok(NormalizationForm::Nfkd),
            _ => Err(Error::UnknownForm(s.to_owned())),
        }
    }
}

/// Normalize `text` to the given form, borrowing when nothing changes.
pub fn normalize(text: &str, form: NormalizationForm) -> Cow<'_, str> {
    if form.is_normalized(text) {
        trace!("text already in {}, skipping normalization", form);
        Cow::Borrowed(text)
    } else {
        Cow::Owned(form.apply(text))
    }
}

/// Shorthand for `normalize(text, NormalizationForm::Nfkc)`.
pub fn normalize_nfkc(text: &str) -> Cow<'_, str> {
    normalize(text, NormalizationForm::Nfkc)
}
