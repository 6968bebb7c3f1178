//! Accent-folding normalizer and whitespace tokenizer

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

static NON_LETTER_RE: OnceLock<Regex> = OnceLock::new();

/// Lowercase, strip accents, and blank out everything that is not a letter or whitespace.
///
/// Text is decomposed (NFD) first so that accented letters split into a base
/// letter plus combining marks; marks in U+0300..=U+036F are dropped before the
/// letter filter runs, so `"Café"` becomes `"cafe"` rather than `"cafe "`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped: String = text.nfd().filter(|&c| !is_combining_diacritic(c)).collect();
    let re = NON_LETTER_RE.get_or_init(|| Regex::new(r"[^\p{L}\s]").unwrap());
    re.replace_all(&stripped, " ").to_lowercase()
}

/// `normalize` for values that may be absent
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
