use thiserror::Error;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;

/// Outcome taxonomy for an MX lookup. Display strings are user-facing;
/// resolver detail stays in the `#[source]` chain for logs.
#[derive(Debug, Error)]
pub enum MxError {
    #[error("Domain not found")]
    DomainNotFound,
    #[error("No mail servers found for this domain")]
    NoMailServers,
    #[error("DNS lookup timed out")]
    LookupTimedOut,
    #[error("DNS lookup failed")]
    ResolverUnavailable {
        #[source]
        source: ResolveError,
    },
    #[error("resolver initialization failed")]
    ResolverInit {
        #[source]
        source: ResolveError,
    },
}

impl MxError {
    pub(crate) fn resolver_init(source: ResolveError) -> Self {
        Self::ResolverInit { source }
    }

    /// Map a resolver-layer failure onto the taxonomy. NXDOMAIN means the
    /// domain does not exist; an empty answer (NODATA) means it exists but
    /// routes no mail.
    pub(crate) fn from_resolve(source: ResolveError) -> Self {
        match source.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. }
                if *response_code == ResponseCode::NXDomain =>
            {
                Self::DomainNotFound
            }
            ResolveErrorKind::NoRecordsFound { .. } => Self::NoMailServers,
            ResolveErrorKind::Timeout => Self::LookupTimedOut,
            _ => Self::ResolverUnavailable { source },
        }
    }
}
