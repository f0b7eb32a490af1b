//! Secret redaction for signing keys in logs and debug output.

use std::fmt::{self, Debug, Display};

/// Wrapper whose `Debug` and `Display` output is always `"<redacted>"`.
///
/// ```ignore
/// use tbtc_redeemer_rs::redact::Redacted;
///
/// let key = Redacted::new("0xac09...".to_string());
/// tracing::info!(key = %key, "Loaded signer");
/// // Logs: key = <redacted>
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Redacted<T>(pub T);

impl<T> Redacted<T> {
    pub fn new(value: T) -> Self {
        Redacted(value)
    }

    /// Borrow the secret. Callers must not log the result.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl<T> Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_prints_inner_value() {
        let key = Redacted::new("super-secret".to_string());
        assert_eq!(format!("{}", key), "<redacted>");
        assert_eq!(format!("{:?}", key), "<redacted>");
        assert_eq!(key.expose(), "super-secret");
    }
}
