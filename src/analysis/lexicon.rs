//! Static lexicons shared by the analysis pipeline.
//!
//! Everything here is built once and never mutated: the homoglyph and
//! punctuation tables used by the char filters, the substitution table and
//! leet map used by the plesetan filter, the gambling domain lexicon used for
//! fuzzy correction, and the Indonesian stop-word list.

use std::sync::LazyLock;

use ahash::AHashMap;

pub mod confusables;
pub mod stopwords;

/// Known obfuscated spellings and their canonical domain term.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("maxw!n", "maxwin"),
    ("maxwinn", "maxwin"),
    ("m14xwin", "maxwin"),
    ("m4ksvin", "maxwin"),
    ("5lot", "slot"),
    ("s1ot", "slot"),
    ("slott", "slot"),
    ("sloot", "slot"),
    ("s|ot", "slot"),
    ("sl07", "slot"),
    ("s!ot", "slot"),
    ("sgpin", "spin"),
    ("gacoor", "gacor"),
    ("g4k0r", "gacor"),
    ("ggacor", "gacor"),
    ("9acor", "gacor"),
    ("hokii", "hoki"),
    ("hokl", "hoki"),
    ("h0kl", "hoki"),
    ("garudahokl", "garudahoki"),
    ("bette", "bet"),
    ("wdw", "wd"),
    ("w1d", "wd"),
    ("t0g3ll", "togel"),
    ("pr0m", "promo"),
    ("b0nuss", "bonus"),
    ("9aruda", "garuda"),
    ("arwanatt", "arwanatoto"),
    ("t0to", "toto"),
    ("m0na4d", "mona4d"),
    ("jepe", "jp"),
    ("jepey", "jp"),
    ("jepee", "jp"),
];

static SUBSTITUTION_MAP: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| SUBSTITUTIONS.iter().copied().collect());

/// Canonical gambling-promotion terms, in the order fuzzy matching scans them.
pub const DOMAIN_WORDS: &[&str] = &[
    "maxwin",
    "gacor",
    "slot",
    "spin",
    "garudahoki",
    "pulauwin",
    "hoki",
    "jp",
    "deposit",
    "depo",
    "wd",
    "jackpot",
    "togel",
    "casino",
    "promo",
    "bonus",
    "bet",
    "withdraw",
    "rtp",
];

/// Vowels a rejoined letter run must contain.
pub const VOWELS: &[char] = &['a', 'i', 'u', 'e', 'o'];

/// Look up the canonical form of an obfuscated spelling.
pub fn substitute(token: &str) -> Option<&'static str> {
    SUBSTITUTION_MAP.get(token).copied()
}

/// Whether `token` is one of the [`DOMAIN_WORDS`].
pub fn is_domain_word(token: &str) -> bool {
    DOMAIN_WORDS.contains(&token)
}

/// Letter a leetspeak character stands for.
pub fn leet(ch: char) -> Option<char> {
    match ch {
        '0' => Some('o'),
        '1' => Some('i'),
        '3' => Some('e'),
        '4' => Some('a'),
        '5' => Some('s'),
        '6' | '9' => Some('g'),
        '@' => Some('a'),
        _ => None,
    }
}

/// Letter a glyph stands for when wedged between two letters, as in
/// `m@xwin`, `maxw!n` or `ca$ino`.
pub fn infix_glyph(ch: char) -> Option<char> {
    match ch {
        '@' => Some('a'),
        '!' => Some('i'),
        '$' => Some('s'),
        _ => None,
    }
}

/// Whether a token glued together with infix glyphs (`MAXW!N`, `g@c0r88`)
/// reads as a substitution-table entry or a domain word once its glyphs and
/// leet digits are resolved. A trailing digit run is ignored.
pub fn reads_as_domain_term(token: &str) -> bool {
    let lowered = token.to_lowercase();
    let core = lowered.trim_end_matches(|ch: char| ch.is_ascii_digit());
    [lowered.as_str(), core].into_iter().any(|candidate| {
        let resolved: String = candidate
            .chars()
            .map(|ch| infix_glyph(ch).or_else(|| leet(ch)).unwrap_or(ch))
            .collect();
        substitute(candidate).is_some()
            || substitute(&resolved).is_some()
            || is_domain_word(&resolved)
    })
}

/// Whether `ch` is one of the vowels in [`VOWELS`].
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}
