//! Language selection and the per-language capability set.
//!
//! Everything the parser does differently between Chinese and Japanese lives
//! in a [`Dialect`] value: glyph choices, whether oral unit elision applies,
//! whether a higher-rank marker may open a phrase, and the phonetic idioms
//! folded into pseudo-tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Chinese,
    Japanese,
}

impl Language {
    pub fn dialect(self) -> &'static Dialect {
        match self {
            Language::Chinese => &CHINESE,
            Language::Japanese => &JAPANESE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0} (expected chinese/zh or japanese/ja)")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chinese" | "zh" | "cn" => Ok(Language::Chinese),
            "japanese" | "ja" | "jp" => Ok(Language::Japanese),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// Synthetic tokens standing for multi-codepoint phonetic spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoToken {
    /// Spelled "zero", read as the digit 0.
    Zero,
    /// Spelled "minus", read as a sign.
    Minus,
}

/// How a dialect treats a trailing digit after a rank marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elision {
    /// Spoken Chinese: `两万五` means 25000, `三千零五` means 3005.
    Oral,
    /// Markers are always explicit: `六百五` means 605.
    Never,
}

#[derive(Debug)]
pub struct Dialect {
    pub language: Language,
    /// Glyphs for the hundred-million rank.
    pub hundred_million: &'static str,
    pub negative: char,
    pub elision: Elision,
    /// Whether a bare hundred/thousand/ten-thousand/hundred-million marker
    /// may start a phrase (`百一` = 101).
    pub lone_high_markers: bool,
    /// Phonetic spellings folded into pseudo-tokens while lexing.
    pub idioms: &'static [(&'static str, PseudoToken)],
}

pub static CHINESE: Dialect = Dialect {
    language: Language::Chinese,
    hundred_million: "亿",
    negative: '负',
    elision: Elision::Oral,
    lone_high_markers: false,
    idioms: &[],
};

pub static JAPANESE: Dialect = Dialect {
    language: Language::Japanese,
    hundred_million: "億",
    negative: '負',
    elision: Elision::Never,
    lone_high_markers: true,
    idioms: &[
        ("ゼーロ", PseudoToken::Zero),
        ("ゼロ", PseudoToken::Zero),
        ("マイナス", PseudoToken::Minus),
    ],
};
