use serde::Serialize;

/// A single MX record: mail exchange host plus its routing priority.
///
/// Lower priority values are preferred by mail routers; the derived ordering
/// (priority first, then exchange) is what [`resolve_mx`](super::resolve_mx)
/// sorts by.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub priority: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(priority: u16, exchange: impl Into<String>) -> Self {
        Self {
            priority,
            exchange: exchange.into(),
        }
    }
}
