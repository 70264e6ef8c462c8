use crate::domain::tables::{fixed_tld, tlds_longest_first, KNOWN_PROVIDERS};
use crate::error::Rejection;
use crate::outcome::Normalized;
use crate::pipeline::{run_until_stable, RewriteStep};
use crate::text::{collapse_char_runs, is_blank, remove_whitespace, strip_diacritics};
use regex::Regex;
use std::sync::LazyLock;

static AT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\[?\(?\{?\s*at\s*\}?\)?\]?\s*").expect("at separator pattern")
});
static DOT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\[?\(?\{?\s*dot\s*\}?\)?\]?\s*").expect("dot separator pattern")
});
static CANONICAL_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});
static TLDS_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(tlds_longest_first);

/// Obfuscation repair, run to a fixed point before the address is split.
pub const EMAIL_STEPS: &[RewriteStep] = &[
    RewriteStep::new("lowercase", lowercase),
    RewriteStep::new("strip_diacritics", strip_accents),
    RewriteStep::new("fullwidth_at", fullwidth_at),
    RewriteStep::new("at_separator", at_separator),
    RewriteStep::new("dot_separator", dot_separator),
    RewriteStep::new("strip_whitespace", strip_whitespace),
    RewriteStep::new("separator_typos", separator_typos),
    RewriteStep::new("collapse_dots", collapse_dots),
    RewriteStep::new("single_at", single_at),
    RewriteStep::new("insert_missing_at", insert_missing_at),
];

pub fn normalize_email(raw: &str) -> Normalized {
    email_candidate(raw).into()
}

fn email_candidate(raw: &str) -> Result<String, Rejection> {
    if is_blank(raw) {
        return Err(Rejection::Empty);
    }

    let repaired = run_until_stable(EMAIL_STEPS, raw.to_string());
    let Some((local, domain)) = repaired.split_once('@') else {
        return Err(Rejection::MissingAt);
    };

    let local = collapse_char_runs(local.trim_matches('.'), '.');
    let mut domain = collapse_char_runs(domain.trim_matches('.'), '.');
    if !domain.contains('.') {
        if let Some(split) = split_dotless_domain(&domain) {
            domain = split;
        }
    }
    let domain = fix_tld_typo(domain);

    let candidate = format!("{local}@{domain}").to_lowercase();
    if !CANONICAL_EMAIL.is_match(&candidate) {
        return Err(Rejection::InvalidPattern);
    }
    Ok(candidate)
}

fn lowercase(text: String) -> String {
    text.to_lowercase()
}

fn strip_accents(text: String) -> String {
    strip_diacritics(&text)
}

fn fullwidth_at(text: String) -> String {
    if text.contains('\u{FF20}') {
        text.replace('\u{FF20}', "@")
    } else {
        text
    }
}

fn at_separator(text: String) -> String {
    AT_WORD.replace_all(&text, "@").into_owned()
}

fn dot_separator(text: String) -> String {
    DOT_WORD.replace_all(&text, ".").into_owned()
}

fn strip_whitespace(text: String) -> String {
    remove_whitespace(&text)
}

fn separator_typos(text: String) -> String {
    text.replace([',', ';'], ".")
}

fn collapse_dots(text: String) -> String {
    collapse_char_runs(&text, '.')
}

fn single_at(text: String) -> String {
    let Some((local, rest)) = text.split_once('@') else {
        return text;
    };
    if !rest.contains('@') {
        return text;
    }
    let rest = rest.replace('@', "");
    format!("{local}@{rest}")
}

fn insert_missing_at(mut text: String) -> String {
    if text.contains('@') {
        return text;
    }
    let position = KNOWN_PROVIDERS
        .iter()
        .filter_map(|provider| {
            text.match_indices(provider)
                .map(|(idx, _)| idx)
                .find(|idx| *idx > 0)
        })
        .min();
    if let Some(idx) = position {
        text.insert(idx, '@');
    }
    text
}

fn split_dotless_domain(domain: &str) -> Option<String> {
    TLDS_LONGEST_FIRST.iter().find_map(|tld| {
        let host = domain.strip_suffix(tld)?;
        if host.is_empty() {
            return None;
        }
        let host = host.strip_suffix('.').unwrap_or(host);
        Some(format!("{host}.{tld}"))
    })
}

fn fix_tld_typo(domain: String) -> String {
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return domain;
    };
    match fixed_tld(tld) {
        Some(fixed) => format!("{host}.{fixed}"),
        None => domain,
    }
}
