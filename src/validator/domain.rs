use super::types::FormatError;

/// RFC 1035 ceiling on the total hostname length.
const MAX_DOMAIN_LEN: usize = 253;

/// Longest permitted label between dots.
const MAX_LABEL_LEN: usize = 63;

/// Normalize `domain` via IDNA and check the hostname grammar.
///
/// IDNA conversion lowercases and punycodes Unicode input; the label walk
/// afterwards is the backstop for anything the mapping lets through (spaces,
/// underscores, empty labels). A single label with no dot is valid — bare
/// hostnames like `localhost` are well-formed and left to the policy layer.
pub(crate) fn check_format(domain: &str) -> Result<String, FormatError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(FormatError::Empty);
    }

    let ascii = idna::domain_to_ascii(trimmed).map_err(|_| FormatError::InvalidHostname)?;
    if ascii.is_empty() {
        return Err(FormatError::InvalidHostname);
    }
    if ascii.len() > MAX_DOMAIN_LEN {
        return Err(FormatError::TooLong {
            length: ascii.len(),
        });
    }

    for label in ascii.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(FormatError::InvalidHostname);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(FormatError::InvalidHostname);
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(FormatError::InvalidHostname);
        }
    }

    Ok(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_domain_ok() {
        assert_eq!(check_format("gmail.com").unwrap(), "gmail.com");
    }

    #[test]
    fn single_label_is_well_formed() {
        assert_eq!(check_format("localhost").unwrap(), "localhost");
    }

    #[test]
    fn unicode_domain_is_punycoded() {
        let ascii = check_format("exämple.com").unwrap();
        assert_eq!(ascii, "xn--exmple-cua.com");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(check_format(""), Err(FormatError::Empty));
        assert_eq!(check_format("   "), Err(FormatError::Empty));
    }

    #[test]
    fn rejects_spaces_inside() {
        assert_eq!(check_format("not a domain"), Err(FormatError::InvalidHostname));
    }

    #[test]
    fn rejects_empty_label_and_trailing_dot() {
        assert_eq!(check_format("foo..com"), Err(FormatError::InvalidHostname));
        assert_eq!(check_format("example.com."), Err(FormatError::InvalidHostname));
    }

    #[test]
    fn rejects_hyphen_at_label_edge() {
        assert_eq!(check_format("-foo.com"), Err(FormatError::InvalidHostname));
        assert_eq!(check_format("foo-.com"), Err(FormatError::InvalidHostname));
        assert!(check_format("fo-o.com").is_ok());
    }

    #[test]
    fn rejects_label_over_63_chars() {
        let long = "a".repeat(64);
        assert_eq!(
            check_format(&format!("{long}.com")),
            Err(FormatError::InvalidHostname)
        );
        let ok = "a".repeat(63);
        assert!(check_format(&format!("{ok}.com")).is_ok());
    }

    #[test]
    fn rejects_total_length_over_253() {
        // 64 labels of "abc." = 256 chars with the final label
        let long = format!("{}com", "abc.".repeat(64));
        assert!(long.len() > 253);
        assert!(matches!(
            check_format(&long),
            Err(FormatError::TooLong { length }) if length > 253
        ));
    }

    #[test]
    fn rejects_underscore_label() {
        assert_eq!(check_format("foo_bar.com"), Err(FormatError::InvalidHostname));
    }
}
