//! Property-based invariants for the detection pipeline.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use ringwatch_core::{analyze, DetectionConfig, RawTransaction};

fn base_timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn rows_from_edges(edges: &[(u8, u8, f64, i64)]) -> Vec<RawTransaction> {
    edges
        .iter()
        .enumerate()
        .map(|(i, &(from, to, amount, hour_offset))| RawTransaction {
            transaction_id: format!("t{i}"),
            sender_id: format!("N{from}"),
            receiver_id: format!("N{to}"),
            amount: amount.to_string(),
            timestamp: (base_timestamp() + Duration::hours(hour_offset))
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        })
        .collect()
}

proptest! {
    #[test]
    fn risk_scores_always_land_in_zero_to_one_hundred(
        edges in prop::collection::vec(
            (0u8..12, 0u8..12, 1.0f64..10_000.0, 0i64..500),
            0..60,
        )
    ) {
        let rows = rows_from_edges(&edges);
        let config = DetectionConfig::default();
        let result = analyze(&rows, &config).unwrap();
        for account in &result.accounts {
            prop_assert!(account.risk_score >= 0.0 && account.risk_score <= 100.0);
        }
        for node in &result.graph.nodes {
            prop_assert!(node.risk_score >= 0.0 && node.risk_score <= 100.0);
        }
    }

    #[test]
    fn every_edge_survives_into_the_graph_view(
        edges in prop::collection::vec(
            (0u8..8, 0u8..8, 1.0f64..1_000.0, 0i64..200),
            0..30,
        )
    ) {
        let rows = rows_from_edges(&edges);
        let config = DetectionConfig::default();
        let result = analyze(&rows, &config).unwrap();
        prop_assert_eq!(result.graph.edges.len(), rows.len());
    }

    #[test]
    fn ring_ids_are_unique_and_contiguous(
        edges in prop::collection::vec(
            (0u8..10, 0u8..10, 1.0f64..5_000.0, 0i64..300),
            0..60,
        )
    ) {
        let rows = rows_from_edges(&edges);
        let config = DetectionConfig::default();
        let result = analyze(&rows, &config).unwrap();
        let mut ids: Vec<&str> = result.fraud_rings.iter().map(|r| r.ring_id.as_str()).collect();
        let unique_count = {
            let mut sorted = ids.clone();
            sorted.sort();
            sorted.dedup();
            sorted.len()
        };
        prop_assert_eq!(unique_count, ids.len());
        ids.sort();
        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(id, &format!("R{:04}", i + 1));
        }
    }
}
