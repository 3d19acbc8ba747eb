use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a journaled trade.
///
/// Opaque to the engine: the journal store assigns it (UUID, row id, ...)
/// and the engine only ever hashes or displays it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradeId(pub String);

impl TradeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TradeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
