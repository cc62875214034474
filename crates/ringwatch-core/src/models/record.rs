//! The raw, not-yet-validated shape of a single transaction row.

use serde::Deserialize;

/// One row of the input transaction stream, still in its untyped cell form.
///
/// `amount` and `timestamp` are kept as strings because both require
/// fallible parsing that the graph builder is responsible for reporting
/// per-row; the sender/receiver columns need no more than a trim.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub transaction_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub amount: String,
    pub timestamp: String,
}

/// The five column names every input source must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "transaction_id",
    "sender_id",
    "receiver_id",
    "amount",
    "timestamp",
];
