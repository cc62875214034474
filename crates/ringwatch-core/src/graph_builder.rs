//! Turns raw transaction rows into a [`Graph`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{RingwatchError, RingwatchResult};
use crate::models::{Graph, RawTransaction};

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d"];

/// Parse a timestamp cell, trying the known formats in order before falling
/// back to a general RFC 3339 parse.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    None
}

/// Build a [`Graph`] from the rows of the transaction stream, in row order.
///
/// Malformed amount or timestamp cells fail the whole analysis, naming the
/// offending 1-based row.
pub fn build_graph(rows: &[RawTransaction]) -> RingwatchResult<Graph> {
    let mut graph = Graph::new();
    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 1;
        let amount: f64 = row.amount.trim().parse().map_err(|_| {
            RingwatchError::parse(row_number, format!("invalid amount '{}'", row.amount))
        })?;
        let timestamp = parse_timestamp(&row.timestamp).ok_or_else(|| {
            RingwatchError::parse(row_number, format!("invalid timestamp '{}'", row.timestamp))
        })?;
        let source = graph.ensure_node(row.sender_id.trim());
        let target = graph.ensure_node(row.receiver_id.trim());
        graph.add_edge(source, target, row.transaction_id.clone(), amount, timestamp);
    }
    Ok(graph)
}
