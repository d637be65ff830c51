use regex::Regex;
use std::sync::LazyLock;

// Hyphenated compounds and contractions are accepted as words.
// unwrap is safe: pattern is a compile-time constant
#[allow(clippy::unwrap_used)]
static SINGLE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z'-]*$").unwrap());

/// How the input is handled by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A single English word: part-of-speech tagged Chinese glosses.
    Dictionary,
    /// Anything else: a plain Chinese translation.
    Translation,
}

impl Mode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::Translation => "translation",
        }
    }
}

pub fn is_single_english_word(text: &str) -> bool {
    SINGLE_WORD.is_match(text)
}

pub fn classify(text: &str) -> Mode {
    if is_single_english_word(text) {
        Mode::Dictionary
    } else {
        Mode::Translation
    }
}
