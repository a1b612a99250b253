//! View-model mapper
//!
//! Pure transformation from one [`RoundResult`] into the renderer-ready
//! collections. Each round's snapshot fully replaces the previous one; there
//! is no incremental merge. The mapping time is an explicit input so the
//! same result always derives the same snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::metrics::NetworkMetrics;
use crate::types::RoundResult;
use crate::verdict::{self, RoundVerdict};

/// Display fallback when a validator has no stake entry
pub const DEFAULT_STAKE: f64 = 10.0;
/// Display fallback for reputation, in the backend's 0-10 scale
const DEFAULT_REPUTATION_RAW: f64 = 9.0;
/// Synthetic dataset size base and per-client step; the backend does not
/// report dataset sizes
const BASE_DATASET_SIZE: u64 = 10_000;
const DATASET_SIZE_STEP: u64 = 500;
/// Synthetic per-client noise level
const NOISE_LEVEL: f64 = 0.01;
/// Digest prefix length shown in tables
const DIGEST_PREFIX_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Training,
    Idle,
    Uploading,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PqcStatus {
    Secured,
    Handshake,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
    pub id: String,
    pub display_name: String,
    pub status: ClientStatus,
    pub fallback_dataset_size: u64,
    pub gradient_norm: f64,
    pub noise_level: f64,
    pub last_update: String,
    pub pqc_status: PqcStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorStatus {
    Active,
    Slashed,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorView {
    pub id: String,
    pub display_name: String,
    pub stake: f64,
    /// Normalized to 0-1 for display
    pub reputation: f64,
    pub status: ValidatorStatus,
    pub gradient_hash_prefix: String,
    pub anomalies_detected: u32,
    pub cosine_similarity: f64,
    pub suspicion_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusStatus {
    Consensus,
    Disputed,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMethod {
    Median,
    TrimmedMean,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusRoundView {
    pub round: u64,
    pub timestamp: String,
    pub status: ConsensusStatus,
    pub participating_validators: usize,
    pub aggregation_method: AggregationMethod,
    pub block_hash: String,
    pub supermajority: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub source: String,
    pub message: String,
}

/// How the backend reports validator reputation.
///
/// The scale is not part of the wire contract, so the conversion to the
/// 0-1 display range is explicit and configurable rather than assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReputationScale {
    /// Backend reports 0-10; divided down for display
    #[default]
    ZeroToTen,
    /// Backend already reports 0-1; used as-is
    ZeroToOne,
}

impl ReputationScale {
    /// Normalize a reported reputation to 0-1, falling back to 0.9 when
    /// the validator has no entry. The fallback is a display default, not
    /// a claim about real validator state.
    pub fn normalize(self, raw: Option<f64>) -> f64 {
        match self {
            Self::ZeroToTen => raw.unwrap_or(DEFAULT_REPUTATION_RAW) / 10.0,
            Self::ZeroToOne => raw.unwrap_or(DEFAULT_REPUTATION_RAW / 10.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapperOptions {
    pub reputation_scale: ReputationScale,
}

/// Renderer-ready derivation of one round. Built fresh per response and
/// replaced wholesale by the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub round_id: u64,
    pub clients: Vec<ClientView>,
    pub validators: Vec<ValidatorView>,
    pub consensus_rounds: Vec<ConsensusRoundView>,
    pub logs: Vec<LogEntry>,
    pub metrics: NetworkMetrics,
    pub verdict: RoundVerdict,
}

impl RoundSnapshot {
    pub fn derive(round: &RoundResult, opts: &MapperOptions, mapped_at: DateTime<Utc>) -> Self {
        Self {
            round_id: round.round_id,
            clients: map_clients(round),
            validators: map_validators(round, opts),
            consensus_rounds: map_consensus_rounds(round, mapped_at),
            logs: map_logs(round, mapped_at),
            metrics: NetworkMetrics::derive(round),
            verdict: RoundVerdict::evaluate(round),
        }
    }

    /// Whether every client this round is participating (none in error).
    ///
    /// Gates the topology ledger animation alongside the verdict, which
    /// already accounts for malicious clients; with no verdict data this
    /// check alone still holds the animation to a safe default.
    pub fn all_clients_participating(&self) -> bool {
        self.clients.iter().all(|c| c.status != ClientStatus::Error)
    }
}

/// First 12 characters of a digest, elided
fn digest_prefix(digest: &str) -> String {
    let prefix: String = digest.chars().take(DIGEST_PREFIX_LEN).collect();
    format!("{prefix}...")
}

pub fn map_clients(round: &RoundResult) -> Vec<ClientView> {
    round
        .clients
        .iter()
        .enumerate()
        .map(|(idx, c)| ClientView {
            id: c.id.clone(),
            display_name: format!("Client {}", c.id),
            status: if c.malicious {
                ClientStatus::Error
            } else {
                ClientStatus::Training
            },
            // Synthetic display placeholders; the backend reports neither
            fallback_dataset_size: BASE_DATASET_SIZE + idx as u64 * DATASET_SIZE_STEP,
            gradient_norm: c.grad_norm,
            noise_level: NOISE_LEVEL,
            last_update: "just now".to_string(),
            pqc_status: PqcStatus::Secured,
        })
        .collect()
}

pub fn map_validators(round: &RoundResult, opts: &MapperOptions) -> Vec<ValidatorView> {
    let consensus = &round.consensus;
    round
        .validators
        .iter()
        .map(|v| ValidatorView {
            id: v.id.clone(),
            display_name: format!("Validator {}", v.id),
            stake: consensus.stake.get(&v.id).copied().unwrap_or(DEFAULT_STAKE),
            reputation: opts
                .reputation_scale
                .normalize(consensus.reputation.get(&v.id).copied()),
            status: if consensus.fraudsters.contains(&v.id) {
                ValidatorStatus::Slashed
            } else {
                ValidatorStatus::Active
            },
            gradient_hash_prefix: digest_prefix(&v.h_agg),
            anomalies_detected: if v.malicious { 1 } else { 0 },
            cosine_similarity: if v.malicious { 0.3 } else { 0.95 },
            suspicion_count: if v.malicious { 2 } else { 0 },
        })
        .collect()
}

/// At most one entry: this layer only ever shows the most recent round.
/// Empty while no winning digest was announced, and always empty for a
/// round with zero validators.
pub fn map_consensus_rounds(
    round: &RoundResult,
    mapped_at: DateTime<Utc>,
) -> Vec<ConsensusRoundView> {
    if round.validators.is_empty() {
        return Vec::new();
    }
    let Some(tally) = round.consensus.winning.as_ref() else {
        return Vec::new();
    };

    let supermajority = verdict::supermajority(round.consensus.stake_pct);
    vec![ConsensusRoundView {
        round: round.round_id,
        timestamp: mapped_at.format("%H:%M:%S").to_string(),
        status: if supermajority {
            ConsensusStatus::Consensus
        } else {
            ConsensusStatus::Disputed
        },
        participating_validators: tally.entries.len(),
        aggregation_method: AggregationMethod::Median,
        block_hash: digest_prefix(&tally.h_star),
        supermajority,
    }]
}

/// Severity of a free-text pipeline log line, by case-insensitive substring
/// match. Fixed precedence; first match wins.
pub fn classify_log_line(line: &str) -> LogLevel {
    let lower = line.to_lowercase();
    if lower.contains("warn") {
        LogLevel::Warn
    } else if lower.contains("err") {
        // also covers "error"
        LogLevel::Error
    } else if lower.contains("ok") || lower.contains("consensus") {
        LogLevel::Success
    } else {
        LogLevel::Info
    }
}

pub fn map_logs(round: &RoundResult, mapped_at: DateTime<Utc>) -> Vec<LogEntry> {
    let base = mapped_at.format("%H:%M:%S").to_string();
    round
        .logs
        .iter()
        .enumerate()
        .map(|(idx, msg)| LogEntry {
            timestamp: format!("{base}.{idx:03}"),
            level: classify_log_line(msg),
            source: "Pipeline".to_string(),
            message: msg.clone(),
        })
        .collect()
}
