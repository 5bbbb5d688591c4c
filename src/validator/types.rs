use thiserror::Error;

/// Syntactic rejection of a candidate domain. Messages are user-facing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Domain is required")]
    Empty,
    #[error("Invalid domain format")]
    InvalidHostname,
    #[error("Domain name too long (max 253 characters)")]
    TooLong { length: usize },
}

/// Policy rejection: the domain is on the static deny-list.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Email domain '{domain}' is not accepted")]
pub struct PolicyError {
    pub domain: String,
}
