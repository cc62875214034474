//! Fraud-ring instances produced by the detectors.

use serde::Serialize;
use std::fmt;

/// The kind of structural pattern a [`Ring`] was detected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Cycle,
    SmurfingFanIn,
    SmurfingFanOut,
    ShellChain,
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternType::Cycle => "cycle",
            PatternType::SmurfingFanIn => "smurfing_fan_in",
            PatternType::SmurfingFanOut => "smurfing_fan_out",
            PatternType::ShellChain => "shell_chain",
        };
        f.write_str(s)
    }
}

/// A single detected fraud ring: a set of member accounts sharing structural evidence.
#[derive(Debug, Clone, Serialize)]
pub struct Ring {
    /// Assigned by the result assembler after global ranking; empty until then.
    pub ring_id: String,
    pub members: Vec<String>,
    pub pattern_type: PatternType,
    pub risk_score: f64,
    /// Pattern-specific supporting detail (cycle path, cluster size, hop path, ...).
    pub details: serde_json::Value,
}
