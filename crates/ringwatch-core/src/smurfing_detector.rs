//! Sliding-window detection of fan-in and fan-out smurfing bursts.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::config::DetectionConfig;
use crate::models::{Evidence, Graph, NodeIndex, PatternType, Ring};

/// For each node whose incoming transactions (from distinct senders) cluster
/// into a window of at least `fan_threshold` within `window_hours`, report
/// the first such cluster found as a fan-in ring.
pub fn detect_fan_in(graph: &Graph, config: &DetectionConfig) -> (Vec<Ring>, Vec<Evidence>) {
    let mut rings = Vec::new();
    let mut evidence = Vec::new();

    for node in 0..graph.node_count() {
        let mut timestamped: Vec<(NaiveDateTime, NodeIndex)> = graph
            .incoming(node)
            .iter()
            .map(|&eid| {
                let edge = graph.edge(eid);
                (edge.timestamp, edge.source)
            })
            .collect();
        if timestamped.len() < config.fan_threshold {
            continue;
        }
        timestamped.sort_by_key(|(t, _)| *t);

        if let Some((senders, cluster_size)) = find_cluster(&timestamped, config) {
            let score = 70.0 + (cluster_size as f64 - config.fan_threshold as f64) * 2.0;
            let receiver = graph.node_id(node).to_string();
            let mut members: Vec<String> =
                senders.iter().map(|&idx| graph.node_id(idx).to_string()).collect();
            members.push(receiver.clone());
            let details = serde_json::json!({
                "receiver": receiver,
                "cluster_size": cluster_size,
            });
            rings.push(Ring {
                ring_id: String::new(),
                members,
                pattern_type: PatternType::SmurfingFanIn,
                risk_score: score,
                details,
            });
            evidence.push(Evidence {
                account_id: receiver,
                delta: score * config.smurfing_hub_weight,
                reason: format!("Fan-in smurfing receiver from {cluster_size} senders"),
            });
            for &sender in &senders {
                evidence.push(Evidence {
                    account_id: graph.node_id(sender).to_string(),
                    delta: score * config.smurfing_counterparty_weight,
                    reason: "Fan-in smurfing sender".to_string(),
                });
            }
        }
    }

    (rings, evidence)
}

/// Symmetric to [`detect_fan_in`]: looks at outgoing transactions grouped by
/// sender, reporting a node that funnels funds to many distinct receivers
/// within the same window.
pub fn detect_fan_out(graph: &Graph, config: &DetectionConfig) -> (Vec<Ring>, Vec<Evidence>) {
    let mut rings = Vec::new();
    let mut evidence = Vec::new();

    for node in 0..graph.node_count() {
        let mut timestamped: Vec<(NaiveDateTime, NodeIndex)> = graph
            .outgoing(node)
            .iter()
            .map(|&eid| {
                let edge = graph.edge(eid);
                (edge.timestamp, edge.target)
            })
            .collect();
        if timestamped.len() < config.fan_threshold {
            continue;
        }
        timestamped.sort_by_key(|(t, _)| *t);

        if let Some((receivers, cluster_size)) = find_cluster(&timestamped, config) {
            let score = 70.0 + (cluster_size as f64 - config.fan_threshold as f64) * 2.0;
            let sender = graph.node_id(node).to_string();
            let mut members: Vec<String> =
                receivers.iter().map(|&idx| graph.node_id(idx).to_string()).collect();
            members.push(sender.clone());
            let details = serde_json::json!({
                "sender": sender,
                "cluster_size": cluster_size,
            });
            rings.push(Ring {
                ring_id: String::new(),
                members,
                pattern_type: PatternType::SmurfingFanOut,
                risk_score: score,
                details,
            });
            evidence.push(Evidence {
                account_id: sender,
                delta: score * config.smurfing_hub_weight,
                reason: format!("Fan-out smurfing sender to {cluster_size} receivers"),
            });
            for &receiver in &receivers {
                evidence.push(Evidence {
                    account_id: graph.node_id(receiver).to_string(),
                    delta: score * config.smurfing_counterparty_weight,
                    reason: "Fan-out smurfing receiver".to_string(),
                });
            }
        }
    }

    (rings, evidence)
}

/// Two-pointer scan over a timestamp-sorted counterparty list: find the
/// first window of width `window_hours` containing at least `fan_threshold`
/// distinct counterparties, returning them in first-occurrence order.
fn find_cluster(
    timestamped: &[(NaiveDateTime, NodeIndex)],
    config: &DetectionConfig,
) -> Option<(Vec<NodeIndex>, usize)> {
    let window = Duration::hours(config.window_hours);
    let mut i = 0usize;
    let mut j = 0usize;
    while i < timestamped.len() {
        while j < timestamped.len() && timestamped[j].0 - timestamped[i].0 <= window {
            j += 1;
        }
        let cluster_size = j - i;
        if cluster_size >= config.fan_threshold {
            let mut counterparties = Vec::new();
            let mut seen = HashSet::new();
            for (_, counterparty) in &timestamped[i..j] {
                if seen.insert(*counterparty) {
                    counterparties.push(*counterparty);
                }
            }
            return Some((counterparties, cluster_size));
        }
        i += 1;
    }
    None
}
