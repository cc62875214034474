//! Bounded enumeration of directed simple cycles (circular transaction flows).

use std::collections::HashSet;

use crate::config::DetectionConfig;
use crate::models::{Graph, NodeIndex, PatternType, Ring};

/// Rotate `path` so it starts at its lexicographically smallest element,
/// using the rotation that makes the whole sequence smallest. Used purely
/// as a dedup key: the same cycle found from different start nodes always
/// canonicalizes to the same key.
fn canonical_key(path: &[String]) -> Vec<String> {
    (0..path.len())
        .map(|i| {
            let mut rotated = path[i..].to_vec();
            rotated.extend_from_slice(&path[..i]);
            rotated
        })
        .min()
        .unwrap_or_default()
}

/// Enumerate directed simple cycles with length in
/// `[config.min_cycle_len, config.max_cycle_len]`, each emitted once.
pub fn detect_cycles(graph: &Graph, config: &DetectionConfig) -> Vec<Ring> {
    let mut rings = Vec::new();
    let mut seen: HashSet<Vec<String>> = HashSet::new();

    for start in 0..graph.node_count() {
        let mut path = vec![start];
        let mut on_path: HashSet<NodeIndex> = HashSet::from([start]);
        walk(
            graph,
            config,
            start,
            start,
            &mut path,
            &mut on_path,
            &mut seen,
            &mut rings,
        );
    }

    rings
}

#[allow(clippy::too_many_arguments)]
fn walk(
    graph: &Graph,
    config: &DetectionConfig,
    start: NodeIndex,
    current: NodeIndex,
    path: &mut Vec<NodeIndex>,
    on_path: &mut HashSet<NodeIndex>,
    seen: &mut HashSet<Vec<String>>,
    rings: &mut Vec<Ring>,
) {
    if path.len() > config.max_cycle_len {
        return;
    }
    for &edge_idx in graph.outgoing(current) {
        let next = graph.edge(edge_idx).target;
        if next == start {
            if path.len() >= config.min_cycle_len {
                let names: Vec<String> = path.iter().map(|&n| graph.node_id(n).to_string()).collect();
                let key = canonical_key(&names);
                if seen.insert(key) {
                    let details = serde_json::json!({ "length": names.len() });
                    rings.push(Ring {
                        ring_id: String::new(),
                        members: names.clone(),
                        pattern_type: PatternType::Cycle,
                        risk_score: 60.0 + (names.len() as f64 - config.min_cycle_len as f64) * 5.0,
                        details,
                    });
                }
            }
            continue;
        }
        if on_path.contains(&next) {
            continue;
        }
        path.push(next);
        on_path.insert(next);
        walk(graph, config, start, next, path, on_path, seen, rings);
        on_path.remove(&next);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Graph;
    use chrono::NaiveDate;

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn chain_graph(names: &[&str]) -> Graph {
        let mut g = Graph::new();
        let ids: Vec<_> = names.iter().map(|n| g.ensure_node(n)).collect();
        for i in 0..ids.len() {
            let next = ids[(i + 1) % ids.len()];
            g.add_edge(ids[i], next, format!("t{i}"), 10.0, ts());
        }
        g
    }

    #[test]
    fn finds_a_triangle_cycle() {
        let g = chain_graph(&["A", "B", "C"]);
        let config = DetectionConfig::default();
        let rings = detect_cycles(&g, &config);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].members.len(), 3);
        assert_eq!(rings[0].pattern_type, PatternType::Cycle);
    }

    #[test]
    fn does_not_duplicate_rotations_of_the_same_cycle() {
        let g = chain_graph(&["A", "B", "C", "D"]);
        let config = DetectionConfig::default();
        let rings = detect_cycles(&g, &config);
        assert_eq!(rings.len(), 1);
    }

    #[test]
    fn below_min_length_cycles_are_not_reported() {
        let mut g = Graph::new();
        let a = g.ensure_node("A");
        let b = g.ensure_node("B");
        g.add_edge(a, b, "t1".into(), 10.0, ts());
        g.add_edge(b, a, "t2".into(), 10.0, ts());
        let config = DetectionConfig::default();
        assert!(detect_cycles(&g, &config).is_empty());
    }

    #[test]
    fn acyclic_graph_reports_nothing() {
        let mut g = Graph::new();
        let a = g.ensure_node("A");
        let b = g.ensure_node("B");
        let c = g.ensure_node("C");
        g.add_edge(a, b, "t1".into(), 10.0, ts());
        g.add_edge(b, c, "t2".into(), 10.0, ts());
        let config = DetectionConfig::default();
        assert!(detect_cycles(&g, &config).is_empty());
    }
}
