//! Heuristic Hindi/English language detection.
//!
//! A Devanagari character is a hard signal for Hindi. Without one, a small set
//! of romanized Hindi keywords is matched as plain substrings of the lowercased
//! text. Anything else is English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Romanized Hindi words that mark otherwise ASCII input as Hindi.
pub const HINDI_KEYWORDS: [&str; 5] = ["namaste", "kya", "hai", "nahi", "haan"];

/// The two languages a reply can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    /// The two-letter code sent to clients.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Labels raw (not lowercased) text as Hindi or English.
///
/// Keyword matches are substring matches, so English words that happen to
/// contain "hai" or "kya" are tagged Hindi.
pub fn detect_language(text: &str) -> Lang {
    if text.chars().any(is_devanagari) {
        return Lang::Hi;
    }
    let lower = text.to_lowercase();
    if HINDI_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Lang::Hi
    } else {
        Lang::En
    }
}
