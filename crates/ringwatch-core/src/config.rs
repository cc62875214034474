//! Tunable thresholds for the detection pipeline.

/// Configuration knobs shared by every detector and the score combiner.
///
/// All fields have defaults matching the reference behavior; callers that
/// only need to override one or two thresholds should start from
/// [`DetectionConfig::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    /// Minimum node count of an enumerated cycle (inclusive).
    pub min_cycle_len: usize,
    /// Maximum node count of an enumerated cycle (inclusive).
    pub max_cycle_len: usize,
    /// Minimum distinct counterparties in a window before a fan cluster is reported.
    pub fan_threshold: usize,
    /// Width of the smurfing sliding window, in hours.
    pub window_hours: i64,
    /// Minimum hop count of a reported shell chain.
    pub min_hops: usize,
    /// Maximum hop count explored by the shell-chain search.
    pub max_hops: usize,
    /// Degree at or below which a node counts as low-activity for shell-chain purposes.
    pub low_activity_threshold: usize,
    /// Weight applied to normalized degree centrality.
    pub centrality_weight: f64,
    /// Weight applied to a ring's own risk score when crediting its members.
    pub ring_membership_weight: f64,
    /// Share of a smurfing ring's score credited to its hub account.
    pub smurfing_hub_weight: f64,
    /// Share of a smurfing ring's score credited to each counterparty.
    pub smurfing_counterparty_weight: f64,
    /// Share of a shell chain's score credited to each intermediary.
    pub shell_chain_intermediary_weight: f64,
    /// Share of a shell chain's score credited to each endpoint.
    pub shell_chain_endpoint_weight: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_cycle_len: 3,
            max_cycle_len: 5,
            fan_threshold: 10,
            window_hours: 72,
            min_hops: 3,
            max_hops: 6,
            low_activity_threshold: 3,
            centrality_weight: 20.0,
            ring_membership_weight: 0.3,
            smurfing_hub_weight: 0.6,
            smurfing_counterparty_weight: 0.2,
            shell_chain_intermediary_weight: 0.4,
            shell_chain_endpoint_weight: 0.2,
        }
    }
}
