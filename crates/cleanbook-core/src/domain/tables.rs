pub const TLD_FIXES: &[(&str, &str)] = &[
    ("con", "com"),
    ("c0m", "com"),
    ("cim", "com"),
    ("cpm", "com"),
    ("ogr", "org"),
    ("ntt", "net"),
];

pub const KNOWN_PROVIDERS: &[&str] = &[
    "gmail",
    "googlemail",
    "yahoo",
    "hotmail",
    "outlook",
    "icloud",
    "proton",
    "protonmail",
    "aol",
    "msn",
    "live",
    "me",
    "ymail",
];

pub const COMMON_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "io", "ai", "app", "dev", "co", "us", "uk", "ca", "de",
    "fr", "it", "nl", "es", "br",
];

pub fn fixed_tld(tld: &str) -> Option<&'static str> {
    TLD_FIXES
        .iter()
        .find(|(typo, _)| *typo == tld)
        .map(|(_, fixed)| *fixed)
}

/// Common TLDs, longest first; equal lengths keep table order.
pub fn tlds_longest_first() -> Vec<&'static str> {
    let mut tlds = COMMON_TLDS.to_vec();
    tlds.sort_by_key(|tld| std::cmp::Reverse(tld.len()));
    tlds
}
