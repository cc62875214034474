//! The assembled analysis result, ready for serialization.

use serde::Serialize;

use super::ring::Ring;
use super::score::AccountScore;

#[derive(Debug, Clone, Serialize)]
pub struct GraphNodeView {
    pub id: String,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphEdgeView {
    pub source: String,
    pub target: String,
    pub transaction_id: String,
    pub amount: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNodeView>,
    pub edges: Vec<GraphEdgeView>,
}

/// The complete output of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub graph: GraphView,
    pub accounts: Vec<AccountScore>,
    pub fraud_rings: Vec<Ring>,
}
