//! Domain primitives: TimeSec, TxRef, TokenAddress.

use serde::{Deserialize, Serialize};

/// Time in whole seconds since Unix epoch (block timestamps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSec(pub i64);

impl TimeSec {
    /// Create a TimeSec from seconds.
    pub fn new(secs: i64) -> Self {
        TimeSec(secs)
    }

    /// Get the underlying seconds value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// On-chain address of a token or market (hex string, lowercased upstream).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAddress(pub String);

impl TokenAddress {
    /// Create a TokenAddress from a string.
    pub fn new(addr: impl Into<String>) -> Self {
        TokenAddress(addr.into())
    }

    /// Get the address as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the transaction that produced a trade action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRef {
    /// Transaction hash (0x-prefixed hex).
    pub hash: String,
    /// Block timestamp of the transaction.
    pub timestamp: TimeSec,
}

impl TxRef {
    /// Create a TxRef from a hash and a block timestamp.
    pub fn new(hash: impl Into<String>, timestamp: TimeSec) -> Self {
        TxRef {
            hash: hash.into(),
            timestamp,
        }
    }
}
