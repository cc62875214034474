//! Bounded search for shell-chain relay paths through low-activity intermediaries.

use std::collections::HashSet;

use crate::config::DetectionConfig;
use crate::models::{Evidence, Graph, NodeIndex, PatternType, Ring};

/// Find directed paths of 3 to `max_hops` hops whose interior nodes are all
/// at or below the low-activity degree threshold, reporting each such path
/// once.
pub fn detect_shell_chains(graph: &Graph, config: &DetectionConfig) -> (Vec<Ring>, Vec<Evidence>) {
    let mut rings = Vec::new();
    let mut evidence = Vec::new();

    let low_activity: Vec<bool> = (0..graph.node_count())
        .map(|n| graph.degree(n) <= config.low_activity_threshold)
        .collect();

    let mut seen_paths: HashSet<Vec<NodeIndex>> = HashSet::new();

    for start in 0..graph.node_count() {
        let mut stack: Vec<Vec<NodeIndex>> = vec![vec![start]];
        while let Some(path) = stack.pop() {
            let current = *path.last().unwrap();
            let hops = path.len() - 1;

            if hops >= config.min_hops && path.len() > 2 {
                let interior = &path[1..path.len() - 1];
                if !interior.is_empty() && interior.iter().all(|&n| low_activity[n]) {
                    try_emit(graph, config, &path, interior, &mut seen_paths, &mut rings, &mut evidence);
                }
            }

            if hops < config.max_hops {
                for &edge_idx in graph.outgoing(current) {
                    let next = graph.edge(edge_idx).target;
                    if !path.contains(&next) {
                        let mut extended = path.clone();
                        extended.push(next);
                        stack.push(extended);
                    }
                }
            }
        }
    }

    (rings, evidence)
}

fn try_emit(
    graph: &Graph,
    config: &DetectionConfig,
    path: &[NodeIndex],
    interior: &[NodeIndex],
    seen_paths: &mut HashSet<Vec<NodeIndex>>,
    rings: &mut Vec<Ring>,
    evidence: &mut Vec<Evidence>,
) {
    if !seen_paths.insert(path.to_vec()) {
        return;
    }
    let score = 50.0 + (interior.len() as f64 - 1.0) * 5.0;
    let members: Vec<String> = path.iter().map(|&n| graph.node_id(n).to_string()).collect();
    let intermediates: Vec<String> = interior.iter().map(|&n| graph.node_id(n).to_string()).collect();
    let details = serde_json::json!({
        "path": members,
        "intermediates": intermediates,
    });
    rings.push(Ring {
        ring_id: String::new(),
        members: members.clone(),
        pattern_type: PatternType::ShellChain,
        risk_score: score,
        details,
    });
    for &mid in interior {
        evidence.push(Evidence {
            account_id: graph.node_id(mid).to_string(),
            delta: score * config.shell_chain_intermediary_weight,
            reason: "Low-activity intermediary in shell chain".to_string(),
        });
    }
    evidence.push(Evidence {
        account_id: graph.node_id(path[0]).to_string(),
        delta: score * config.shell_chain_endpoint_weight,
        reason: "Shell chain originator".to_string(),
    });
    evidence.push(Evidence {
        account_id: graph.node_id(*path.last().unwrap()).to_string(),
        delta: score * config.shell_chain_endpoint_weight,
        reason: "Shell chain destination".to_string(),
    });
}
