//! Homoglyph table: characters from other scripts that render like Latin
//! letters or digits, with the ASCII text they are read as.
//!
//! Applied after NFKC, so fullwidth and most mathematical forms have already
//! been folded by the time this table runs; the entries for them only matter
//! when the table is used on its own.

/// `(glyph, ascii)` pairs.
pub const HOMOGLYPHS: &[(&str, &str)] = &[
    // Cyrillic
    ("А", "A"), ("а", "a"), ("В", "B"), ("в", "b"), ("Е", "E"), ("е", "e"), ("К", "K"),
    ("к", "k"), ("М", "M"), ("Т", "T"), ("Х", "X"), ("х", "x"), ("О", "O"), ("о", "o"),
    ("Н", "H"), ("н", "h"), ("Р", "P"), ("р", "p"), ("С", "C"), ("с", "c"), ("У", "Y"),
    ("у", "y"), ("З", "Z"), ("з", "z"), ("Я", "R"), ("Ч", "4"), ("Ж", "X"), ("Ц", "LL"),
    ("і", "i"), ("ј", "j"), ("ѕ", "s"), ("ѡ", "w"), ("ә", "e"), ("б", "6"), ("г", "r"),
    ("д", "a"), ("и", "u"), ("й", "u"), ("л", "n"), ("м", "m"), ("п", "n"), ("т", "t"),
    ("ф", "o"), ("ц", "u"), ("ш", "w"), ("щ", "w"), ("ъ", "b"), ("ы", "bi"), ("ь", "b"),
    ("э", "e"), ("ю", "io"), ("я", "r"), ("ї", "i"), ("є", "e"),
    // Armenian
    ("Ա", "U"), ("ա", "w"), ("Բ", "B"), ("բ", "b"), ("Գ", "9"), ("գ", "q"), ("Դ", "N"),
    ("դ", "n"), ("Ե", "E"), ("ե", "t"), ("Զ", "Z"), ("զ", "q"), ("Է", "E"), ("է", "t"),
    ("Ը", "P"), ("ը", "p"), ("Թ", "P"), ("թ", "p"), ("Ժ", "D"), ("ժ", "d"), ("Ի", "H"),
    ("ի", "h"), ("Լ", "L"), ("լ", "l"), ("Խ", "X"), ("խ", "x"), ("Ծ", "G"), ("ծ", "d"),
    ("Կ", "Y"), ("կ", "k"), ("Հ", "H"), ("հ", "h"), ("Ձ", "A"), ("ձ", "a"), ("Ղ", "N"),
    ("ղ", "n"), ("Ճ", "U"), ("ճ", "u"), ("Մ", "M"), ("մ", "u"), ("Յ", "J"), ("յ", "j"),
    ("Ն", "U"), ("ն", "u"), ("Շ", "2"), ("շ", "2"), ("Ո", "N"), ("ո", "n"), ("Չ", "4"),
    ("չ", "n"), ("Պ", "M"), ("պ", "m"), ("Ջ", "2"), ("ջ", "2"), ("Ռ", "N"), ("ռ", "n"),
    ("Ս", "U"), ("ս", "u"), ("Վ", "4"), ("վ", "4"), ("Տ", "T"), ("տ", "t"), ("Ր", "R"),
    ("ր", "r"), ("Ց", "G"), ("ց", "g"), ("Ւ", "L"), ("ւ", "L"), ("Փ", "P"), ("փ", "p"),
    ("Ք", "P"), ("ք", "p"), ("Օ", "O"), ("օ", "o"), ("Ֆ", "F"), ("ֆ", "f"),
    // Greek
    ("η", "n"), ("Η", "H"), ("σ", "o"), ("ς", "o"), ("Σ", "S"), ("ο", "o"), ("Ο", "O"),
    ("ρ", "p"), ("Ρ", "P"), ("κ", "k"), ("Κ", "K"), ("ν", "v"), ("Ν", "N"), ("τ", "t"),
    ("Τ", "T"), ("χ", "x"), ("Χ", "X"), ("μ", "m"), ("Μ", "M"), ("λ", "a"), ("Λ", "a"),
    ("α", "a"), ("β", "b"), ("γ", "y"), ("δ", "d"), ("ε", "e"), ("ζ", "z"), ("θ", "0"),
    ("ι", "i"), ("ξ", "e"), ("π", "n"), ("υ", "u"), ("φ", "o"), ("ψ", "w"), ("ω", "w"),
    ("ϲ", "c"), ("ϵ", "e"), ("Ϛ", "s"), ("ϫ", "x"), ("Α", "A"), ("Β", "B"), ("Δ", "A"),
    ("Γ", "r"), ("Ω", "W"), ("Ϝ", "F"),
    // CJK and kana look-alikes
    ("丅", "t"), ("丄", "t"), ("丫", "y"), ("厶", "a"), ("乇", "e"), ("乚", "l"), ("囗", "o"),
    ("工", "i"), ("尺", "r"), ("丁", "t"), ("十", "t"), ("一", "-"), ("二", "="), ("三", "e"),
    ("口", "o"), ("人", "y"), ("入", "y"), ("匕", "t"), ("マ", "v"), ("ム", "a"), ("カ", "n"),
    ("丨", "I"), ("亅", "J"), ("ロ", "O"), ("回", "O"), ("曰", "O"), ("乂", "X"), ("⻌", "Z"),
    ("八", "a"), ("〇", "0"),
    // Small capitals
    ("ᴀ", "a"), ("ʙ", "b"), ("ᴄ", "c"), ("ᴅ", "d"), ("ᴇ", "e"), ("ғ", "f"), ("ɢ", "g"),
    ("ʜ", "h"), ("ɪ", "i"), ("ᴊ", "j"), ("ᴋ", "k"), ("ʟ", "l"), ("ᴍ", "m"), ("ɴ", "n"),
    ("ᴏ", "o"), ("ᴘ", "p"), ("ꞯ", "q"), ("ʀ", "r"), ("ꜱ", "s"), ("ᴛ", "t"), ("ᴜ", "u"),
    ("ᴠ", "v"), ("ᴡ", "w"), ("ʏ", "y"), ("ᴢ", "z"),
    // Monospace and sans-serif digits
    ("𝟶", "0"), ("𝟷", "1"), ("𝟸", "2"), ("𝟹", "3"), ("𝟺", "4"), ("𝟻", "5"), ("𝟼", "6"),
    ("𝟽", "7"), ("𝟾", "8"), ("𝟿", "9"), ("𝟢", "0"), ("𝟣", "1"), ("𝟤", "2"), ("𝟥", "3"),
    ("𝟦", "4"), ("𝟧", "5"), ("𝟨", "6"), ("𝟩", "7"), ("𝟪", "8"), ("𝟫", "9"),
    // Canadian syllabics
    ("ᗩ", "a"), ("ᐯ", "v"), ("ᐁ", "v"), ("ᑕ", "c"), ("ᒍ", "j"), ("ᗷ", "b"), ("ᑌ", "u"),
    ("ᑎ", "n"), ("ᑘ", "u"), ("ᑭ", "p"), ("ᑯ", "d"), ("ᑲ", "b"), ("ᑫ", "q"), ("ᕒ", "p"),
    ("ᙀ", "q"), ("ᒪ", "l"), ("ᒧ", "j"), ("ᒥ", "r"), ("ᗰ", "m"), ("ᗯ", "w"), ("ᙡ", "w"),
    ("ᔕ", "s"), ("ᔅ", "z"), ("᙭", "x"), ("ᔦ", "y"), ("ᕼ", "h"), ("ᖇ", "r"), ("ᔰ", "4"),
    // Mathematical script
    ("𝒜", "A"), ("𝒞", "C"), ("𝒟", "D"), ("𝒢", "G"), ("𝒥", "J"), ("𝒦", "K"), ("𝒩", "N"),
    ("𝒪", "O"), ("𝒫", "P"), ("𝒬", "Q"), ("𝒮", "S"), ("𝒯", "T"), ("𝒰", "U"), ("𝒱", "V"),
    ("𝒲", "W"), ("𝒳", "X"), ("𝒴", "Y"), ("𝒵", "Z"), ("ℬ", "B"), ("ℰ", "E"), ("ℱ", "F"),
    ("ℋ", "H"), ("ℐ", "I"), ("ℒ", "L"), ("ℳ", "M"), ("ℛ", "R"), ("𝒶", "a"), ("𝒷", "b"),
    ("𝒸", "c"), ("𝒹", "d"), ("𝒻", "f"), ("𝒽", "h"), ("𝒾", "i"), ("𝒿", "j"), ("𝓀", "k"),
    ("𝓁", "l"), ("𝓂", "m"), ("𝓃", "n"), ("𝓅", "p"), ("𝓆", "q"), ("𝓇", "r"), ("𝓈", "s"),
    ("𝓉", "t"), ("𝓊", "u"), ("𝓋", "v"), ("𝓌", "w"), ("𝓍", "x"), ("𝓎", "y"), ("𝓏", "z"),
    ("ℯ", "e"), ("ℊ", "g"), ("ℴ", "o"),
    // Stroked and hooked Latin, Tai and Buginese look-alikes
    ("Ɦ", "H"), ("ƙ", "k"), ("ƣ", "g"), ("ʞ", "k"), ("Ħ", "H"), ("ħ", "h"), ("Ɨ", "I"),
    ("ɨ", "i"), ("ł", "l"), ("Ɵ", "O"), ("Ɱ", "M"), ("Ⱡ", "L"), ("Ⱨ", "H"), ("Ɽ", "R"),
    ("Ꜹ", "A"), ("᥇", "b"), ("ꪖ", "a"), ("ꪻ", "t"), ("᥅", "r"), ("ꫀ", "e"), ("ᦔ", "d"),
];

/// Dash variants unified to `-`.
pub const DASHES: &[&str] = &[
    "\u{2010}", "\u{2011}", "\u{2012}", "\u{2013}", "\u{2014}", "\u{2015}", "\u{2212}",
];

/// Curly quotes and modifier apostrophes unified to `'`.
pub const APOSTROPHES: &[&str] = &["\u{2018}", "\u{2019}", "\u{02BC}"];

/// Zero-width and invisible formatting characters, removed.
pub const INVISIBLES: &[&str] = &[
    "\u{200B}", "\u{200C}", "\u{200D}", "\u{200E}", "\u{200F}", "\u{FEFF}", "\u{2060}",
    "\u{2061}", "\u{2062}", "\u{2063}",
];
