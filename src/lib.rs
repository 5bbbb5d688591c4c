#![forbid(unsafe_code)]
//! mxgate — email-domain MX validation service.
//!
//! Validates that a bare domain (no scheme, no local-part) is syntactically
//! a hostname, is not a known placeholder/disposable domain, and actually
//! routes mail, by resolving its MX records. Served over HTTP with per-client
//! sliding-window rate limiting.

pub mod mx;
pub mod ratelimit;
pub mod server;
pub mod validator;

pub use mx::{Error as MxError, LookupMx, MxRecord, resolve_mx, system_resolver};
pub use ratelimit::{RateLimitExceeded, RateLimiter};
pub use validator::{FormatError, PolicyError, check_policy, validate_format};
