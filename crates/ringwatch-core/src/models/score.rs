//! Per-account risk accumulation.

use serde::Serialize;

/// A single contribution to an account's risk score, produced by a detector.
///
/// Detectors emit these instead of mutating a shared map directly so that
/// the combine step controls fold order and therefore the final `reasons`
/// ordering deterministically.
#[derive(Debug, Clone)]
pub struct Evidence {
    pub account_id: String,
    pub delta: f64,
    pub reason: String,
}

/// The final, normalized risk profile of one account.
#[derive(Debug, Clone, Serialize)]
pub struct AccountScore {
    pub account_id: String,
    pub risk_score: f64,
    pub reasons: Vec<String>,
}
