//! The directed transaction multigraph built from parsed transaction rows.

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// Index of a node within a [`Graph`]. Assigned in first-seen order starting at 0.
pub type NodeIndex = usize;

/// Index of an edge within a [`Graph`]. Assigned in insertion order starting at 0.
pub type EdgeIndex = usize;

/// A single transaction, materialized as a directed edge.
#[derive(Debug, Clone)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub transaction_id: String,
    pub amount: f64,
    pub timestamp: NaiveDateTime,
}

/// A directed multigraph of accounts and the transactions between them.
///
/// Nodes are addressed both by their account id string and by a dense
/// [`NodeIndex`] assigned the first time the account is seen; every
/// adjacency lookup is an O(1) slice index rather than a hash lookup.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    node_ids: Vec<String>,
    node_index: HashMap<String, NodeIndex>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeIndex>>,
    incoming: Vec<Vec<EdgeIndex>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the node for `id`, creating it (in first-seen order) if absent.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.node_ids.len();
        self.node_ids.push(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        idx
    }

    pub fn add_edge(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        transaction_id: String,
        amount: f64,
        timestamp: NaiveDateTime,
    ) -> EdgeIndex {
        let id = self.edges.len();
        self.outgoing[source].push(id);
        self.incoming[target].push(id);
        self.edges.push(Edge {
            source,
            target,
            transaction_id,
            amount,
            timestamp,
        });
        id
    }

    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_id(&self, idx: NodeIndex) -> &str {
        &self.node_ids[idx]
    }

    /// All node ids, in first-seen order.
    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    pub fn node_index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn edge(&self, idx: EdgeIndex) -> &Edge {
        &self.edges[idx]
    }

    /// All edges, in insertion (original row) order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn outgoing(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.outgoing[node]
    }

    pub fn incoming(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.incoming[node]
    }

    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.outgoing[node].len()
    }

    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.incoming[node].len()
    }

    pub fn degree(&self, node: NodeIndex) -> usize {
        self.out_degree(node) + self.in_degree(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn ensure_node_is_idempotent_and_preserves_order() {
        let mut g = Graph::new();
        let a = g.ensure_node("A");
        let b = g.ensure_node("B");
        let a_again = g.ensure_node("A");
        assert_eq!(a, a_again);
        assert_eq!(g.node_ids(), &["A".to_string(), "B".to_string()]);
        assert_ne!(a, b);
    }

    #[test]
    fn add_edge_updates_both_adjacency_lists() {
        let mut g = Graph::new();
        let a = g.ensure_node("A");
        let b = g.ensure_node("B");
        g.add_edge(a, b, "t1".into(), 100.0, ts("2024-01-01"));
        assert_eq!(g.out_degree(a), 1);
        assert_eq!(g.in_degree(b), 1);
        assert_eq!(g.in_degree(a), 0);
        assert_eq!(g.degree(a), 1);
        assert_eq!(g.degree(b), 1);
    }
}
