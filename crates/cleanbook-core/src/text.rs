use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Compatibility-decomposes `value` and drops combining marks, so `é` becomes
/// `e` and full-width forms fold to ASCII.
pub fn strip_diacritics(value: &str) -> String {
    if value.is_ascii() {
        return value.to_string();
    }
    value.nfkd().filter(|ch| !is_combining_mark(*ch)).collect()
}

pub fn collapse_char_runs(value: &str, target: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_target = false;
    for ch in value.chars() {
        if ch == target {
            if prev_target {
                continue;
            }
            prev_target = true;
        } else {
            prev_target = false;
        }
        out.push(ch);
    }
    out
}

pub fn remove_whitespace(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}
