/// Regions whose numbers default to a country code when written without one.
const REGION_COUNTRY_CODES: &[(&str, &str)] = &[("US", "1"), ("CA", "1")];

pub fn country_code_for_region(region: &str) -> Option<&'static str> {
    REGION_COUNTRY_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(region))
        .map(|(_, code)| *code)
}

/// Applies the region default to a sign-less digit string, returning the
/// number with its synthesized `+` when one of the North American shapes fits.
pub fn apply_region_default(region: &str, digits: &str) -> Option<String> {
    let code = country_code_for_region(region)?;
    match digits.len() {
        10 => Some(format!("+{code}{digits}")),
        11 if digits.starts_with(code) => Some(format!("+{code}{}", &digits[code.len()..])),
        _ => None,
    }
}
