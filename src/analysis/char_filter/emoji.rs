//! Emoji and enclosed-alphanumeric folding.
//!
//! Spammers spell brand names with regional indicators (`🇬🇦🇨🇴🇷`), squared or
//! circled letters (`🅂🄻🄾🅃`) and keycap digits (`8️⃣8️⃣`). This filter maps
//! those back to plain ASCII letters and digits and drops the variation
//! selectors and enclosing keycap marks that glue emoji sequences together.
//! Characters it does not recognise pass through unchanged.

use super::CharFilter;

/// Combining enclosing keycap.
const KEYCAP: char = '\u{20E3}';

/// Keycap ten, the only keycap emoji that is a single code point.
const KEYCAP_TEN: char = '\u{1F51F}';

/// Ranges of 26 consecutive capital/small letter glyphs, with the ASCII
/// letter their first element stands for.
const LETTER_RANGES: &[(u32, u8)] = &[
    (0x1F1E6, b'A'), // regional indicator symbols
    (0x24B6, b'A'),  // circled capital letters
    (0x24D0, b'a'),  // circled small letters
    (0x1F110, b'A'), // parenthesized capital letters
    (0x1F130, b'A'), // squared capital letters
    (0x1F150, b'A'), // negative circled capital letters
    (0x1F170, b'A'), // negative squared capital letters
];

/// Starts of runs of ten code points with values zero through nine.
const DIGIT_ZEROS: &[u32] = &[
    0xFF10,  // fullwidth
    0x2080,  // subscript
    0x0660,  // arabic-indic
    0x06F0,  // extended arabic-indic
    0x07C0,  // nko
    0x0966,  // devanagari
    0x09E6,  // bengali
    0x0A66,  // gurmukhi
    0x0AE6,  // gujarati
    0x0B66,  // oriya
    0x0BE6,  // tamil
    0x0C66,  // telugu
    0x0CE6,  // kannada
    0x0D66,  // malayalam
    0x0DE6,  // sinhala lith
    0x0E50,  // thai
    0x0ED0,  // lao
    0x0F20,  // tibetan
    0x1040,  // myanmar
    0x17E0,  // khmer
    0x1810,  // mongolian
    0x1946,  // limbu
    0x19D0,  // new tai lue
    0x1B50,  // balinese
    0x1BB0,  // sundanese
    0xA8D0,  // saurashtra
    0xA900,  // kayah li
    0xA9D0,  // javanese
    0xAA50,  // cham
    0xABF0,  // meetei mayek
    0x1D7CE, // mathematical bold
    0x1D7D8, // mathematical double-struck
    0x1D7E2, // mathematical sans-serif
    0x1D7EC, // mathematical sans-serif bold
    0x1D7F6, // mathematical monospace
    0x1FBF0, // segmented digits
];

/// Starts of runs of nine code points with values one through nine.
const DIGIT_ONES: &[u32] = &[
    0x2460, // circled
    0x2474, // parenthesized
    0x2488, // digit full stop
    0x2776, // dingbat negative circled
    0x2780, // dingbat circled sans-serif
    0x278A, // dingbat negative circled sans-serif
    0x24F5, // double circled
];

/// A char filter that folds emoji letters and digits to ASCII.
#[derive(Clone, Debug, Default)]
pub struct EmojiFoldCharFilter;

impl EmojiFoldCharFilter {
    /// Create a new emoji fold filter.
    pub fn new() -> Self {
        EmojiFoldCharFilter
    }

    /// ASCII letter or digit a single character stands for, if it is one of
    /// the folded forms.
    pub fn fold_char(ch: char) -> Option<char> {
        let cp = ch as u32;

        if matches!(ch, '\u{2020}' | '\u{2021}') {
            return Some('t');
        }

        for &(start, base) in LETTER_RANGES {
            if (start..start + 26).contains(&cp) {
                return Some(char::from(base + (cp - start) as u8));
            }
        }

        fold_digit(ch).map(|d| char::from(b'0' + d))
    }
}

/// Numeric value 0..=9 of a digit-like character outside ASCII.
fn fold_digit(ch: char) -> Option<u8> {
    let cp = ch as u32;

    let cjk = match ch {
        '〇' | '⓪' | '⓿' | '🄀' | '⁰' => Some(0),
        '一' | '¹' => Some(1),
        '二' | '²' => Some(2),
        '三' | '³' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    };
    if cjk.is_some() {
        return cjk;
    }
    // Superscripts four through nine.
    if (0x2074..=0x2079).contains(&cp) {
        return Some((cp - 0x2070) as u8);
    }
    // Digit comma, U+1F101 is zero.
    if (0x1F101..=0x1F10A).contains(&cp) {
        return Some((cp - 0x1F101) as u8);
    }
    for &zero in DIGIT_ZEROS {
        if (zero..zero + 10).contains(&cp) {
            return Some((cp - zero) as u8);
        }
    }
    for &one in DIGIT_ONES {
        if (one..one + 9).contains(&cp) {
            return Some((cp - one + 1) as u8);
        }
    }
    None
}

impl CharFilter for EmojiFoldCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for ch in input.chars() {
            if ch == KEYCAP || ('\u{FE00}'..='\u{FE0F}').contains(&ch) {
                continue;
            }
            if ch == KEYCAP_TEN {
                output.push_str("10");
                continue;
            }
            output.push(Self::fold_char(ch).unwrap_or(ch));
        }
        output
    }

    fn name(&self) -> &'static str {
        "emoji_fold"
    }
}
