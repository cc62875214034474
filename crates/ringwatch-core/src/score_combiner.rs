//! Fuses detector evidence into a single, normalized risk score per account.

use std::collections::HashMap;

use crate::config::DetectionConfig;
use crate::models::{AccountScore, Evidence, Graph, Ring};

/// Combine degree centrality, per-pattern evidence, and ring membership into
/// a ranked list of account risk scores.
///
/// Accounts that contribute nothing (zero centrality, no evidence, no ring
/// membership) are omitted here; the result assembler fills them back in
/// with a zero score when building the full node list.
pub fn combine_scores(
    graph: &Graph,
    rings: &[Ring],
    evidence_sources: &[Vec<Evidence>],
    config: &DetectionConfig,
) -> Vec<AccountScore> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let mut scores: HashMap<String, AccountScore> = HashMap::new();

    let denom = if node_count >= 2 { (node_count - 1) as f64 } else { 0.0 };
    for idx in 0..node_count {
        let centrality = if denom > 0.0 {
            graph.degree(idx) as f64 / denom
        } else {
            0.0
        };
        if centrality > 0.0 {
            let id = graph.node_id(idx).to_string();
            let entry = scores.entry(id.clone()).or_insert_with(|| AccountScore {
                account_id: id,
                risk_score: 0.0,
                reasons: Vec::new(),
            });
            entry.risk_score += centrality * config.centrality_weight;
            entry.reasons.push(format!("High degree centrality ({centrality:.3})"));
        }
    }

    for source in evidence_sources {
        for ev in source {
            let entry = scores
                .entry(ev.account_id.clone())
                .or_insert_with(|| AccountScore {
                    account_id: ev.account_id.clone(),
                    risk_score: 0.0,
                    reasons: Vec::new(),
                });
            entry.risk_score += ev.delta;
            entry.reasons.push(ev.reason.clone());
        }
    }

    for ring in rings {
        for member in &ring.members {
            let entry = scores
                .entry(member.clone())
                .or_insert_with(|| AccountScore {
                    account_id: member.clone(),
                    risk_score: 0.0,
                    reasons: Vec::new(),
                });
            entry.risk_score += ring.risk_score * config.ring_membership_weight;
            entry.reasons.push(format!("Member of {} ring", ring.pattern_type));
        }
    }

    let max_score = scores.values().map(|a| a.risk_score).fold(0.0_f64, f64::max);
    if max_score > 0.0 {
        for account in scores.values_mut() {
            let scaled = (account.risk_score / max_score * 100.0).min(100.0);
            account.risk_score = (scaled * 100.0).round() / 100.0;
        }
    }

    let mut result: Vec<AccountScore> = scores.into_values().collect();
    result.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap()
            .then_with(|| a.account_id.cmp(&b.account_id))
    });
    result
}
