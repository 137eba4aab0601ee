use unicode_normalization::char::{decompose_compatible, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

/// Remove diacritical marks from letters.
///
/// Each letter is compatibility-decomposed (so ligatures such as `ĳ`, `ǆ` and
/// `ﬀ` split into their parts) and its combining marks are dropped. Latin
/// letters whose diacritic is part of the glyph and has no decomposition go
/// through [`fold_latin`], both before and after decomposing. What is left is
/// recomposed so Hangul syllables come back whole.
///
/// Compatibility decomposition can emit separators such as U+00B7 (from `ŀ`);
/// the caller filters letters and numbers again afterwards.
pub fn strip_diacritics(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(base) = fold_latin(c) {
            stripped.push_str(base);
            continue;
        }
        decompose_compatible(c, |part| {
            if is_combining_mark(part) {
                return;
            }
            match fold_latin(part) {
                Some(base) => stripped.push_str(base),
                None => stripped.push(part),
            }
        });
    }
    stripped.nfc().collect()
}

/// ASCII base of a Latin letter with a non-decomposable diacritic, or of a ligature.
fn fold_latin(c: char) -> Option<&'static str> {
    let base = match c {
        'Ⱥ' => "A",
        'ⱥ' => "a",
        'Ꜳ' => "AA",
        'ꜳ' => "aa",
        'Æ' => "AE",
        'æ' => "ae",
        'Ꜵ' => "AO",
        'ꜵ' => "ao",
        'Ꜷ' => "AU",
        'ꜷ' => "au",
        'Ꜹ' | 'Ꜻ' => "AV",
        'ꜹ' | 'ꜻ' => "av",
        'Ꜽ' => "AY",
        'ꜽ' => "ay",
        'Ƀ' | 'Ƃ' | 'Ɓ' => "B",
        'ƀ' | 'ƃ' | 'ɓ' => "b",
        'Ƈ' | 'Ȼ' | 'Ꜿ' => "C",
        'ƈ' | 'ȼ' | 'ꜿ' | 'ↄ' => "c",
        'Đ' | 'Ƌ' | 'Ɗ' | 'Ɖ' | 'Ꝺ' | 'Ð' => "D",
        'đ' | 'ƌ' | 'ɖ' | 'ɗ' | 'ꝺ' | 'ð' => "d",
        'Ɛ' | 'Ǝ' | 'Ɇ' => "E",
        'ɛ' | 'ǝ' | 'ɇ' => "e",
        'Ƒ' | 'Ꝼ' => "F",
        'ƒ' | 'ꝼ' => "f",
        'Ǥ' | 'Ɠ' | 'Ꞡ' | 'Ᵹ' | 'Ꝿ' => "G",
        'ǥ' | 'ɠ' | 'ꞡ' | 'ᵹ' | 'ꝿ' => "g",
        'Ħ' | 'Ⱨ' | 'Ⱶ' | 'Ɥ' => "H",
        'ħ' | 'ⱨ' | 'ⱶ' | 'ɥ' => "h",
        'ƕ' => "hv",
        'Ɨ' => "I",
        'ɨ' | 'ı' => "i",
        'Ɉ' => "J",
        'ɉ' | 'ȷ' => "j",
        'Ƙ' | 'Ⱪ' | 'Ꝁ' | 'Ꝃ' | 'Ꝅ' | 'Ꞣ' => "K",
        'ƙ' | 'ⱪ' | 'ꝁ' | 'ꝃ' | 'ꝅ' | 'ꞣ' => "k",
        'Ł' | 'Ƚ' | 'Ɫ' | 'Ⱡ' | 'Ꝉ' | 'Ꝇ' | 'Ꞁ' => "L",
        'ł' | 'ƚ' | 'ɫ' | 'ⱡ' | 'ꝉ' | 'ꞁ' | 'ꝇ' => "l",
        'Ɱ' | 'Ɯ' => "M",
        'ɱ' | 'ɯ' => "m",
        'Ƞ' | 'Ɲ' | 'Ꞑ' | 'Ꞥ' => "N",
        'ƞ' | 'ɲ' | 'ŉ' | 'ꞑ' | 'ꞥ' => "n",
        'Ø' | 'Ɔ' | 'Ɵ' | 'Ꝋ' | 'Ꝍ' => "O",
        'ø' | 'ɔ' | 'ɵ' | 'ꝋ' | 'ꝍ' => "o",
        'Œ' | 'ɶ' => "OE",
        'œ' => "oe",
        'Ƣ' => "OI",
        'ƣ' => "oi",
        'Ꝏ' => "OO",
        'ꝏ' => "oo",
        'Ȣ' => "OU",
        'ȣ' => "ou",
        'Ƥ' | 'Ᵽ' | 'Ꝑ' | 'Ꝓ' | 'Ꝕ' => "P",
        'ƥ' | 'ᵽ' | 'ꝑ' | 'ꝓ' | 'ꝕ' => "p",
        'Ꝗ' | 'Ꝙ' | 'Ɋ' => "Q",
        'ꝗ' | 'ꝙ' | 'ɋ' => "q",
        'Ɍ' | 'Ɽ' | 'Ꝛ' | 'Ꞧ' | 'Ꞃ' => "R",
        'ɍ' | 'ɽ' | 'ꝛ' | 'ꞧ' | 'ꞃ' => "r",
        'ẞ' => "SS",
        'ß' => "ss",
        'Ȿ' | 'Ꞩ' | 'Ꞅ' => "S",
        'ȿ' | 'ꞩ' | 'ꞅ' => "s",
        'Þ' => "TH",
        'þ' => "th",
        'Ŧ' | 'Ƭ' | 'Ʈ' | 'Ⱦ' | 'Ꞇ' => "T",
        'ŧ' | 'ƭ' | 'ʈ' | 'ⱦ' | 'ꞇ' => "t",
        'Ꜩ' => "TZ",
        'ꜩ' => "tz",
        'Ʉ' => "U",
        'ʉ' => "u",
        'Ʋ' | 'Ꝟ' | 'Ʌ' => "V",
        'ʋ' | 'ꝟ' | 'ʌ' => "v",
        'Ꝡ' => "VY",
        'ꝡ' => "vy",
        'Ⱳ' => "W",
        'ⱳ' => "w",
        'Ƴ' | 'Ɏ' | 'Ỿ' => "Y",
        'ƴ' | 'ɏ' | 'ỿ' => "y",
        'Ƶ' | 'Ȥ' | 'Ɀ' | 'Ⱬ' | 'Ꝣ' => "Z",
        'ƶ' | 'ȥ' | 'ɀ' | 'ⱬ' | 'ꝣ' => "z",
        _ => return None,
    };
    Some(base)
}
