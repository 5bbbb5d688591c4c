//! Domain validation: hostname format checks plus the static deny-list.
//!
//! [`validate_format`] normalizes a candidate domain through IDNA and checks
//! it against the RFC 1035 hostname grammar. [`check_policy`] rejects
//! placeholder and disposable domains that are syntactically valid but never
//! acceptable for mail.

mod denylist;
mod domain;
mod types;

pub use types::{FormatError, PolicyError};

/// Validate the hostname format of `domain` and return its normalized
/// ASCII (punycode) form.
///
/// Checks, in order: non-empty after trimming, IDNA conversion, label
/// grammar (1–63 alphanumerics/hyphens per label, no leading or trailing
/// hyphen), total length ≤ 253.
pub fn validate_format(domain: &str) -> Result<String, FormatError> {
    domain::check_format(domain)
}

/// Reject deny-listed domains. Expects the IDNA-normalized form produced by
/// [`validate_format`]; matching is case-insensitive.
pub fn check_policy(domain: &str) -> Result<(), PolicyError> {
    if denylist::is_denied(domain) {
        return Err(PolicyError {
            domain: domain.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_normalizes_basic_domain() {
        assert_eq!(validate_format("Gmail.com").unwrap(), "gmail.com");
    }

    #[test]
    fn policy_rejects_placeholder_even_when_format_valid() {
        let ascii = validate_format("example.com").unwrap();
        let err = check_policy(&ascii).expect_err("deny-listed");
        assert_eq!(err.domain, "example.com");
    }

    #[test]
    fn policy_allows_ordinary_domain() {
        assert!(check_policy("gmail.com").is_ok());
    }
}
