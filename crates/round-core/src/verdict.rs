//! Consensus verdict evaluation
//!
//! Two separate booleans per round: the backend-reported stake supermajority
//! and the stricter "network healthy" conjunction. A round can clear the
//! stake threshold while still carrying a known-malicious client, and the
//! dashboard shows that distinction, so the two are never merged.

use serde::Serialize;

use crate::types::RoundResult;

/// Stake share required for supermajority, in percent
pub const SUPERMAJORITY_PCT: f64 = 66.7;

/// Round-level verdict driving the consensus visuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundVerdict {
    /// Backend-reported stake agreement met the threshold
    pub supermajority: bool,
    /// Supermajority AND no malicious client this round
    pub network_ok: bool,
}

/// `true` iff the reported stake percentage is known and meets the
/// threshold. Exact comparison; out-of-range values are taken at face
/// value, not clamped.
pub fn supermajority(stake_pct: Option<f64>) -> bool {
    matches!(stake_pct, Some(pct) if pct >= SUPERMAJORITY_PCT)
}

impl RoundVerdict {
    pub fn evaluate(round: &RoundResult) -> Self {
        let supermajority = supermajority(round.consensus.stake_pct);
        Self {
            supermajority,
            network_ok: supermajority && !round.any_malicious_client(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_json(stake_pct: Option<f64>, malicious: bool) -> RoundResult {
        let consensus = match stake_pct {
            Some(pct) => format!(r#"{{"stake_pct": {pct}}}"#),
            None => "{}".to_string(),
        };
        let body = format!(
            r#"{{
                "round_id": 1,
                "clients": [{{"id": "C1", "grad_norm": 0.02, "malicious": {malicious}}}],
                "validators": [],
                "consensus": {consensus}
            }}"#
        );
        RoundResult::from_json(&body).unwrap()
    }

    #[test]
    fn test_supermajority_threshold_is_exact() {
        assert!(supermajority(Some(66.7)));
        assert!(supermajority(Some(66.71)));
        assert!(!supermajority(Some(66.69)));
        assert!(!supermajority(Some(0.0)));
        assert!(supermajority(Some(100.0)));
    }

    #[test]
    fn test_unknown_stake_pct_is_not_supermajority() {
        assert!(!supermajority(None));
    }

    #[test]
    fn test_overflow_stake_pct_taken_at_face_value() {
        // Not clamped by this layer
        assert!(supermajority(Some(120.0)));
        assert!(!supermajority(Some(-5.0)));
    }

    #[test]
    fn test_network_ok_requires_clean_clients() {
        let verdict = RoundVerdict::evaluate(&round_json(Some(100.0), true));
        assert!(verdict.supermajority);
        assert!(!verdict.network_ok);
    }

    #[test]
    fn test_network_ok_when_supermajority_and_clean() {
        let verdict = RoundVerdict::evaluate(&round_json(Some(70.0), false));
        assert!(verdict.supermajority);
        assert!(verdict.network_ok);
    }

    #[test]
    fn test_no_consensus_means_no_verdict_pass() {
        let verdict = RoundVerdict::evaluate(&round_json(None, false));
        assert!(!verdict.supermajority);
        assert!(!verdict.network_ok);
    }
}
