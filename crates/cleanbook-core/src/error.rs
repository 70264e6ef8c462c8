use thiserror::Error;

/// Why a raw value could not be normalized. The `Display` text is the
/// machine-readable reason reported to callers.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("empty")]
    Empty,
    #[error("missing @")]
    MissingAt,
    #[error("invalid pattern")]
    InvalidPattern,
    #[error("unusable length {0}")]
    UnusableLength(usize),
    #[error("invalid length {0}")]
    InvalidLength(usize),
}

#[cfg(test)]
mod tests {
    use super::Rejection;

    #[test]
    fn rejection_reasons_render_as_codes() {
        assert_eq!(Rejection::Empty.to_string(), "empty");
        assert_eq!(Rejection::MissingAt.to_string(), "missing @");
        assert_eq!(Rejection::InvalidPattern.to_string(), "invalid pattern");
        assert_eq!(Rejection::UnusableLength(3).to_string(), "unusable length 3");
        assert_eq!(Rejection::InvalidLength(16).to_string(), "invalid length 16");
    }
}
