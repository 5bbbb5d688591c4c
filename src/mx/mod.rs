//! DNS MX resolution.
//!
//! The public entry point is [`resolve_mx`], which performs an async lookup
//! through the [`LookupMx`] seam and returns the priority-ordered record set
//! or a small taxonomy of lookup failures.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, resolve_mx, system_resolver};
pub use types::MxRecord;
