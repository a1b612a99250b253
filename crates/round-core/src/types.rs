//! Wire schema for one backend round response
//!
//! The backend reports consensus as a partial record: any subset of its
//! fields may be absent, and absence means "unknown", never zero. The raw
//! wire shape is resolved into [`Consensus`] once at deserialization, so
//! nothing downstream re-checks an empty-object sentinel.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::SchemaError;

/// One client's contribution to a round
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientReport {
    /// Unique within the round, not guaranteed stable across rounds
    pub id: String,
    /// L2 norm of the submitted gradient
    pub grad_norm: f64,
    pub malicious: bool,
}

/// One validator's aggregation result for a round
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidatorReport {
    pub id: String,
    pub grad_norm: f64,
    /// Digest of the aggregated gradient, treated as opaque
    #[serde(rename = "H_agg")]
    pub h_agg: String,
    pub malicious: bool,
}

/// The winning tally, present only once the round reached a verdict on-chain
#[derive(Debug, Clone, PartialEq)]
pub struct WinningTally {
    /// Consensus-winning digest
    pub h_star: String,
    pub winning_stake: Option<f64>,
    pub total_stake: Option<f64>,
    /// validator id -> submitted digest
    pub entries: BTreeMap<String, String>,
}

/// Consensus record for a round, resolved from the backend's partial wire
/// shape.
///
/// `stake_pct` is kept independent of `winning` because the verdict
/// evaluator reads the reported agreement even when no winning digest was
/// announced. A fraudster id that never appears in `validators` is still
/// honored for status mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consensus {
    /// Winning digest and its tally; `None` while consensus is unresolved
    pub winning: Option<WinningTally>,
    /// Stake-weighted agreement in percent. Passed through unclamped.
    pub stake_pct: Option<f64>,
    /// Validators penalized this round
    pub fraudsters: BTreeSet<String>,
    /// validator id -> reputation, in the backend's scale
    pub reputation: BTreeMap<String, f64>,
    /// validator id -> stake
    pub stake: BTreeMap<String, f64>,
}

/// Wire shape of the consensus record. Every field optional; `{}` is how
/// the backend reports a round with no consensus at all.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConsensus {
    #[serde(rename = "H_star")]
    h_star: Option<String>,
    winning_stake: Option<f64>,
    total_stake: Option<f64>,
    stake_pct: Option<f64>,
    entries: BTreeMap<String, String>,
    fraudsters: BTreeSet<String>,
    reputation: BTreeMap<String, f64>,
    stake: BTreeMap<String, f64>,
}

impl From<RawConsensus> for Consensus {
    fn from(raw: RawConsensus) -> Self {
        let RawConsensus {
            h_star,
            winning_stake,
            total_stake,
            stake_pct,
            entries,
            fraudsters,
            reputation,
            stake,
        } = raw;

        Self {
            winning: h_star.map(|h_star| WinningTally {
                h_star,
                winning_stake,
                total_stake,
                entries,
            }),
            stake_pct,
            fraudsters,
            reputation,
            stake,
        }
    }
}

impl<'de> Deserialize<'de> for Consensus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawConsensus::deserialize(deserializer).map(Consensus::from)
    }
}

/// One backend round response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundResult {
    /// Monotonically increasing round number
    pub round_id: u64,
    pub clients: Vec<ClientReport>,
    pub validators: Vec<ValidatorReport>,
    #[serde(default)]
    pub consensus: Consensus,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl RoundResult {
    /// Parse a backend response body.
    ///
    /// Missing `clients` or `validators` is a schema error: an empty round
    /// reports empty arrays, a broken response omits them entirely.
    pub fn from_json(body: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(body).map_err(SchemaError::from)
    }

    /// Whether any client in this round is flagged malicious.
    ///
    /// Shared by the verdict evaluator and the topology packet gate.
    pub fn any_malicious_client(&self) -> bool {
        self.clients.iter().any(|c| c.malicious)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "round_id": 3,
            "clients": [{"id": "C1", "grad_norm": 0.03, "malicious": false}],
            "validators": [{"id": "V1", "grad_norm": 0.03, "H_agg": "abc123", "malicious": false}],
            "consensus": {
                "H_star": "abc123",
                "winning_stake": 70.0,
                "total_stake": 100.0,
                "stake_pct": 70.0,
                "entries": {"V1": "abc123"},
                "fraudsters": [],
                "reputation": {"V1": 9.0},
                "stake": {"V1": 1000.0}
            },
            "logs": ["Consensus achieved"]
        }"#;

        let round = RoundResult::from_json(body).unwrap();
        assert_eq!(round.round_id, 3);
        assert_eq!(round.clients.len(), 1);
        assert_eq!(round.validators[0].h_agg, "abc123");

        let tally = round.consensus.winning.as_ref().unwrap();
        assert_eq!(tally.h_star, "abc123");
        assert_eq!(tally.entries.len(), 1);
        assert_eq!(round.consensus.stake_pct, Some(70.0));
        assert_eq!(round.consensus.stake.get("V1"), Some(&1000.0));
    }

    #[test]
    fn test_empty_consensus_object_resolves_to_unresolved() {
        let body = r#"{
            "round_id": 1,
            "clients": [],
            "validators": [],
            "consensus": {},
            "logs": []
        }"#;

        let round = RoundResult::from_json(body).unwrap();
        assert!(round.consensus.winning.is_none());
        assert!(round.consensus.stake_pct.is_none());
        assert!(round.consensus.fraudsters.is_empty());
    }

    #[test]
    fn test_missing_consensus_and_logs_default() {
        let body = r#"{"round_id": 1, "clients": [], "validators": []}"#;
        let round = RoundResult::from_json(body).unwrap();
        assert_eq!(round.consensus, Consensus::default());
        assert!(round.logs.is_empty());
    }

    #[test]
    fn test_missing_clients_is_schema_error() {
        let body = r#"{"round_id": 1, "validators": []}"#;
        assert!(RoundResult::from_json(body).is_err());
    }

    #[test]
    fn test_missing_validators_is_schema_error() {
        let body = r#"{"round_id": 1, "clients": []}"#;
        assert!(RoundResult::from_json(body).is_err());
    }

    #[test]
    fn test_partial_consensus_keeps_known_fields() {
        // stake_pct reported without a winning digest
        let body = r#"{
            "round_id": 2,
            "clients": [],
            "validators": [],
            "consensus": {"stake_pct": 50.0, "fraudsters": ["V2"]}
        }"#;

        let round = RoundResult::from_json(body).unwrap();
        assert!(round.consensus.winning.is_none());
        assert_eq!(round.consensus.stake_pct, Some(50.0));
        assert!(round.consensus.fraudsters.contains("V2"));
    }

    #[test]
    fn test_any_malicious_client() {
        let body = r#"{
            "round_id": 1,
            "clients": [
                {"id": "C1", "grad_norm": 0.01, "malicious": false},
                {"id": "C2", "grad_norm": 8.2, "malicious": true}
            ],
            "validators": []
        }"#;

        let round = RoundResult::from_json(body).unwrap();
        assert!(round.any_malicious_client());
    }
}
