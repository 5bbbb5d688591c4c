use std::future::Future;
use std::time::Duration;

use trust_dns_resolver::TokioAsyncResolver;
use trust_dns_resolver::error::ResolveError;

use super::{Error, MxRecord};

/// Seam between the lookup pipeline and the DNS backend. Production code
/// uses [`TokioAsyncResolver`]; tests inject stubs.
pub trait LookupMx: Send + Sync {
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<MxRecord>, ResolveError>> + Send;
}

/// Build the async resolver from the system DNS configuration.
pub fn system_resolver() -> Result<TokioAsyncResolver, Error> {
    TokioAsyncResolver::tokio_from_system_conf().map_err(Error::resolver_init)
}

/// Resolve the MX record set for `ascii_domain`, bounded by `timeout`.
///
/// Expects a domain already normalized by the validator (ASCII, lowercase).
/// Records come back sorted ascending by priority with duplicates removed.
/// A successful lookup with zero records is [`Error::NoMailServers`], not a
/// success — an empty answer does not make a domain deliverable. No retries;
/// a timeout or transient failure is surfaced to the caller as-is.
pub async fn resolve_mx<R>(
    resolver: &R,
    ascii_domain: &str,
    timeout: Duration,
) -> Result<Vec<MxRecord>, Error>
where
    R: LookupMx,
{
    let records = match tokio::time::timeout(timeout, resolver.lookup_mx(ascii_domain)).await {
        Err(_elapsed) => return Err(Error::LookupTimedOut),
        Ok(Err(err)) => return Err(Error::from_resolve(err)),
        Ok(Ok(records)) => records,
    };
    order_records(records)
}

/// Sort ascending by priority, dedup, and reject empty sets.
pub(crate) fn order_records(mut records: Vec<MxRecord>) -> Result<Vec<MxRecord>, Error> {
    records.sort();
    records.dedup();
    if records.is_empty() {
        return Err(Error::NoMailServers);
    }
    Ok(records)
}

/// Exchange hosts arrive as FQDNs with a trailing dot; store them trimmed
/// and lowercased.
pub(crate) fn normalize_exchange(exchange: String) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}

impl LookupMx for TokioAsyncResolver {
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<MxRecord>, ResolveError>> + Send {
        async move {
            let lookup = self.mx_lookup(domain).await?;
            Ok(lookup
                .iter()
                .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8())))
                .collect())
        }
    }
}
