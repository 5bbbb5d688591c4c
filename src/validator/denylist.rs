use phf::phf_set;

/// Placeholder and disposable domains rejected regardless of DNS outcome.
static DENY_LIST: phf::Set<&'static str> = phf_set! {
    "example.com",
    "example.net",
    "example.org",
    "test.com",
    "test.net",
    "localhost",
    "invalid",
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "tempmail.com",
    "temp-mail.org",
    "trashmail.com",
    "yopmail.com",
    "getnada.com",
    "sharklasers.com",
};

pub(crate) fn is_denied(domain: &str) -> bool {
    DENY_LIST.contains(domain.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_domains_are_denied() {
        assert!(is_denied("example.com"));
        assert!(is_denied("test.com"));
        assert!(is_denied("localhost"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_denied("EXAMPLE.COM"));
        assert!(is_denied("Mailinator.Com"));
    }

    #[test]
    fn ordinary_domains_pass() {
        assert!(!is_denied("gmail.com"));
        assert!(!is_denied("example.co.uk"));
    }
}
