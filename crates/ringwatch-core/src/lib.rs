//! # ringwatch-core
//!
//! Detection engine for money-muling and fraud-ring patterns over directed
//! transaction graphs.
//!
//! This crate provides the foundational pipeline used by `ringwatch-cli`:
//! - Parsing raw transaction rows into a directed multigraph
//! - Bounded directed-cycle enumeration (circular flows)
//! - Sliding-window fan-in/fan-out smurfing detection
//! - Bounded shell-chain relay search through low-activity accounts
//! - Evidence fusion into a single normalized per-account risk score
//! - Assembly of the final analysis result

pub mod config;
pub mod cycle_detector;
pub mod error;
pub mod graph_builder;
pub mod models;
pub mod result_assembler;
pub mod score_combiner;
pub mod shell_chain_detector;
pub mod smurfing_detector;

pub use config::DetectionConfig;
pub use error::{RingwatchError, RingwatchResult};
pub use models::*;

use tracing::debug;

/// Run the full detection pipeline over `rows`, producing the assembled
/// analysis result.
///
/// Detectors run sequentially in a fixed order (cycles, fan-in smurfing,
/// fan-out smurfing, shell chains) so that tie-breaking in the final ring
/// ranking is deterministic.
pub fn analyze(rows: &[models::RawTransaction], config: &DetectionConfig) -> RingwatchResult<AnalysisResult> {
    let graph = graph_builder::build_graph(rows)?;
    debug!(nodes = graph.node_count(), edges = graph.edge_count(), "graph built");

    if graph.node_count() == 0 {
        return Ok(AnalysisResult {
            graph: GraphView { nodes: Vec::new(), edges: Vec::new() },
            accounts: Vec::new(),
            fraud_rings: Vec::new(),
        });
    }

    let cycle_rings = cycle_detector::detect_cycles(&graph, config);
    let (fan_in_rings, fan_in_evidence) = smurfing_detector::detect_fan_in(&graph, config);
    let (fan_out_rings, fan_out_evidence) = smurfing_detector::detect_fan_out(&graph, config);
    let (shell_rings, shell_evidence) = shell_chain_detector::detect_shell_chains(&graph, config);

    debug!(
        cycles = cycle_rings.len(),
        fan_in = fan_in_rings.len(),
        fan_out = fan_out_rings.len(),
        shell_chains = shell_rings.len(),
        "detectors finished"
    );

    let mut all_rings = Vec::new();
    all_rings.extend(cycle_rings);
    all_rings.extend(fan_in_rings);
    all_rings.extend(fan_out_rings);
    all_rings.extend(shell_rings);

    let evidence_sources = vec![fan_in_evidence, fan_out_evidence, shell_evidence];
    let accounts = score_combiner::combine_scores(&graph, &all_rings, &evidence_sources, config);

    Ok(result_assembler::assemble(&graph, all_rings, accounts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tx: &str, from: &str, to: &str, amount: &str, ts: &str) -> models::RawTransaction {
        models::RawTransaction {
            transaction_id: tx.into(),
            sender_id: from.into(),
            receiver_id: to.into(),
            amount: amount.into(),
            timestamp: ts.into(),
        }
    }

    #[test]
    fn empty_input_produces_an_empty_result() {
        let config = DetectionConfig::default();
        let result = analyze(&[], &config).unwrap();
        assert!(result.graph.nodes.is_empty());
        assert!(result.accounts.is_empty());
        assert!(result.fraud_rings.is_empty());
    }

    #[test]
    fn a_plain_transfer_chain_has_no_rings() {
        let rows = vec![
            row("t1", "A", "B", "100", "2024-01-01 10:00:00"),
            row("t2", "B", "C", "50", "2024-01-02 10:00:00"),
        ];
        let config = DetectionConfig::default();
        let result = analyze(&rows, &config).unwrap();
        assert!(result.fraud_rings.is_empty());
        assert_eq!(result.graph.nodes.len(), 3);
    }

    #[test]
    fn a_three_node_cycle_is_reported_and_scored() {
        let rows = vec![
            row("t1", "A", "B", "100", "2024-01-01 10:00:00"),
            row("t2", "B", "C", "100", "2024-01-01 11:00:00"),
            row("t3", "C", "A", "100", "2024-01-01 12:00:00"),
        ];
        let config = DetectionConfig::default();
        let result = analyze(&rows, &config).unwrap();
        assert_eq!(result.fraud_rings.len(), 1);
        assert_eq!(result.fraud_rings[0].ring_id, "R0001");
        assert!(result.accounts.iter().any(|a| a.risk_score > 0.0));
    }

    #[test]
    fn malformed_row_fails_the_whole_analysis() {
        let rows = vec![row("t1", "A", "B", "not-a-number", "2024-01-01 10:00:00")];
        let config = DetectionConfig::default();
        assert!(analyze(&rows, &config).is_err());
    }
}
