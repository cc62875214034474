//! Assigns ring ids and assembles the final, serializable analysis result.

use std::collections::HashMap;

use crate::models::{AccountScore, AnalysisResult, Graph, GraphEdgeView, GraphNodeView, GraphView, Ring};

/// Rank rings by descending risk score (stable, so ties keep detector
/// emission order), assign `R0001`-style ids, and fold in the full node and
/// edge view of the graph.
pub fn assemble(graph: &Graph, mut rings: Vec<Ring>, accounts: Vec<AccountScore>) -> AnalysisResult {
    rings.sort_by(|a, b| b.risk_score.partial_cmp(&a.risk_score).unwrap());
    for (i, ring) in rings.iter_mut().enumerate() {
        ring.ring_id = format!("R{:04}", i + 1);
    }

    let score_by_id: HashMap<&str, f64> = accounts
        .iter()
        .map(|a| (a.account_id.as_str(), a.risk_score))
        .collect();

    let nodes = graph
        .node_ids()
        .iter()
        .map(|id| GraphNodeView {
            id: id.clone(),
            risk_score: score_by_id.get(id.as_str()).copied().unwrap_or(0.0),
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| GraphEdgeView {
            source: graph.node_id(edge.source).to_string(),
            target: graph.node_id(edge.target).to_string(),
            transaction_id: edge.transaction_id.clone(),
            amount: edge.amount,
            timestamp: edge.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
        })
        .collect();

    AnalysisResult {
        graph: GraphView { nodes, edges },
        accounts,
        fraud_rings: rings,
    }
}
