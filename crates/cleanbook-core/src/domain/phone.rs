use crate::domain::region::apply_region_default;
use crate::error::Rejection;
use crate::outcome::Normalized;
use crate::pipeline::{run_steps, RewriteStep};
use crate::text::{is_blank, strip_diacritics};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PHONE_DIGIT_RANGE: RangeInclusive<usize> = 8..=15;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(ext\.?|x)\s*\d+").expect("extension pattern"));
static LEADING_INTL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*00").expect("international prefix pattern"));

pub const PHONE_STEPS: &[RewriteStep] = &[
    RewriteStep::new("strip_diacritics", strip_accents),
    RewriteStep::new("normalize_dashes", normalize_dashes),
    RewriteStep::new("truncate_extension", truncate_extension),
    RewriteStep::new("international_prefix", international_prefix),
    RewriteStep::new("keep_sign_and_digits", keep_sign_and_digits),
    RewriteStep::new("dedupe_plus", dedupe_plus),
];

pub fn normalize_phone(raw: &str, default_region: &str) -> Normalized {
    phone_candidate(raw, default_region).into()
}

fn phone_candidate(raw: &str, default_region: &str) -> Result<String, Rejection> {
    if is_blank(raw) {
        return Err(Rejection::Empty);
    }

    let cleaned = run_steps(PHONE_STEPS, raw.to_string());
    let (signed, digits) = split_sign(&cleaned);

    let candidate = if signed {
        Some(format!("+{digits}"))
    } else {
        apply_region_default(default_region, &digits).or_else(|| {
            PHONE_DIGIT_RANGE
                .contains(&digits.len())
                .then(|| format!("+{digits}"))
        })
    };

    let Some(candidate) = candidate else {
        return Err(Rejection::UnusableLength(digits.len()));
    };

    let digit_count = candidate.len() - 1;
    if !PHONE_DIGIT_RANGE.contains(&digit_count) {
        return Err(Rejection::InvalidLength(digit_count));
    }
    Ok(candidate)
}

fn strip_accents(text: String) -> String {
    strip_diacritics(&text)
}

fn normalize_dashes(text: String) -> String {
    if !text.contains(['\u{2013}', '\u{2014}', '\u{2212}']) {
        return text;
    }
    text.replace(['\u{2013}', '\u{2014}', '\u{2212}'], "-")
}

fn truncate_extension(mut text: String) -> String {
    if let Some(found) = EXTENSION.find(&text) {
        text.truncate(found.start());
    }
    text
}

fn international_prefix(text: String) -> String {
    LEADING_INTL_PREFIX.replace(&text, "+").into_owned()
}

fn keep_sign_and_digits(text: String) -> String {
    let mut kept = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_digit() || (ch == '+' && kept.is_empty()) {
            kept.push(ch);
        }
    }
    kept
}

fn dedupe_plus(text: String) -> String {
    if text.matches('+').count() <= 1 {
        return text;
    }
    let Some(first) = text.find('+') else {
        return text;
    };
    let rest: String = text[first + 1..].chars().filter(|ch| *ch != '+').collect();
    format!("+{rest}")
}

fn split_sign(cleaned: &str) -> (bool, String) {
    let (signed, body) = match cleaned.strip_prefix('+') {
        Some(body) => (true, body),
        None => (false, cleaned),
    };
    let digits = body.chars().filter(char::is_ascii_digit).collect();
    (signed, digits)
}
