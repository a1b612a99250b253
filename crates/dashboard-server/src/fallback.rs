//! Static first-load dataset
//!
//! Served until the first round has been run, so the dashboard is never
//! blank. Display data only; none of it comes from the backend.

use round_core::{
    AggregationMethod, ClientStatus, ClientView, ConsensusRoundView, ConsensusStatus, LogEntry,
    LogLevel, NetworkMetrics, PqcStatus, RoundSnapshot, RoundVerdict, ValidatorStatus,
    ValidatorView,
};

pub fn snapshot() -> RoundSnapshot {
    RoundSnapshot {
        round_id: 47,
        clients: clients(),
        validators: validators(),
        consensus_rounds: consensus_rounds(),
        logs: logs(),
        metrics: NetworkMetrics::baseline(),
        verdict: RoundVerdict {
            supermajority: true,
            network_ok: true,
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn client(
    id: &str,
    display_name: &str,
    status: ClientStatus,
    fallback_dataset_size: u64,
    gradient_norm: f64,
    noise_level: f64,
    last_update: &str,
    pqc_status: PqcStatus,
) -> ClientView {
    ClientView {
        id: id.to_string(),
        display_name: display_name.to_string(),
        status,
        fallback_dataset_size,
        gradient_norm,
        noise_level,
        last_update: last_update.to_string(),
        pqc_status,
    }
}

pub fn clients() -> Vec<ClientView> {
    use ClientStatus::*;
    use PqcStatus::*;
    vec![
        client("c-001", "Client Alpha", Training, 12_500, 0.0342, 0.01, "2s ago", Secured),
        client("c-002", "Client Beta", Uploading, 8_700, 0.0289, 0.015, "5s ago", Secured),
        client("c-003", "Client Gamma", Idle, 15_200, 0.0401, 0.01, "12s ago", Secured),
        client("c-004", "Client Delta", Training, 9_300, 0.0178, 0.02, "1s ago", Handshake),
        client("c-005", "Client Epsilon", Error, 6_100, 0.8921, 0.01, "45s ago", Pending),
        client("c-006", "Client Zeta", Training, 11_800, 0.0315, 0.012, "3s ago", Secured),
    ]
}

#[allow(clippy::too_many_arguments)]
fn validator(
    id: &str,
    display_name: &str,
    stake: f64,
    reputation: f64,
    status: ValidatorStatus,
    gradient_hash_prefix: &str,
    anomalies_detected: u32,
    cosine_similarity: f64,
    suspicion_count: u32,
) -> ValidatorView {
    ValidatorView {
        id: id.to_string(),
        display_name: display_name.to_string(),
        stake,
        reputation,
        status,
        gradient_hash_prefix: gradient_hash_prefix.to_string(),
        anomalies_detected,
        cosine_similarity,
        suspicion_count,
    }
}

pub fn validators() -> Vec<ValidatorView> {
    use ValidatorStatus::*;
    vec![
        validator("v-001", "Validator Node A", 1000.0, 0.95, Active, "a3f8c1...e7b2d4", 1, 0.987, 0),
        validator("v-002", "Validator Node B", 850.0, 0.91, Active, "b7d2e9...f1a3c8", 0, 0.993, 0),
        validator("v-003", "Validator Node C", 200.0, 0.42, Slashed, "c1f4a7...d8e2b5", 7, 0.341, 4),
        validator("v-004", "Validator Node D", 920.0, 0.88, Active, "d5e8b3...a2c7f1", 2, 0.972, 1),
    ]
}

fn round(
    round: u64,
    timestamp: &str,
    status: ConsensusStatus,
    participating_validators: usize,
    aggregation_method: AggregationMethod,
    block_hash: &str,
    supermajority: bool,
) -> ConsensusRoundView {
    ConsensusRoundView {
        round,
        timestamp: timestamp.to_string(),
        status,
        participating_validators,
        aggregation_method,
        block_hash: block_hash.to_string(),
        supermajority,
    }
}

pub fn consensus_rounds() -> Vec<ConsensusRoundView> {
    use AggregationMethod::*;
    use ConsensusStatus::*;
    vec![
        round(47, "14:32:01", Consensus, 3, TrimmedMean, "0xf8a3...c7e1", true),
        round(46, "14:31:48", Consensus, 4, Median, "0xd2b7...a4f9", true),
        round(45, "14:31:33", Disputed, 4, TrimmedMean, "0xe1c5...b8d3", false),
        round(44, "14:31:19", Consensus, 3, Median, "0xa9f2...e6c4", true),
        round(43, "14:31:04", Consensus, 4, TrimmedMean, "0xb3d8...f1a7", true),
    ]
}

fn log(timestamp: &str, level: LogLevel, source: &str, message: &str) -> LogEntry {
    LogEntry {
        timestamp: timestamp.to_string(),
        level,
        source: source.to_string(),
        message: message.to_string(),
    }
}

pub fn logs() -> Vec<LogEntry> {
    use LogLevel::*;
    vec![
        log("14:32:01.342", Success, "Blockchain", "Round 47 consensus achieved, supermajority confirmed"),
        log("14:32:01.198", Info, "Aggregator", "Trimmed mean aggregation complete. Gradient norm: 0.0312"),
        log("14:32:00.876", Info, "Validator-A", "SPHINCS+ signature verified for Client Alpha"),
        log("14:32:00.654", Warn, "Validator-C", "Anomaly detected: Client Epsilon gradient norm 0.89 exceeds threshold"),
        log("14:32:00.421", Info, "PQC", "ML-KEM-512 key encapsulation complete for Client Delta"),
        log("14:31:59.987", Error, "Validator-C", "Stake slashed: repeated anomaly submissions (suspicion count: 4)"),
        log("14:31:59.743", Info, "Client-Alpha", "Local training epoch 15 complete. Loss: 0.0234"),
        log("14:31:59.512", Success, "PQC", "All PQC handshakes verified, network secured"),
        log("14:31:59.201", Info, "Aggregator", "Received 5/6 encrypted gradient packets"),
        log("14:31:58.876", Warn, "Network", "Client Epsilon connection timeout, retrying"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_snapshot_is_populated() {
        let snapshot = snapshot();
        assert_eq!(snapshot.clients.len(), 6);
        assert_eq!(snapshot.validators.len(), 4);
        assert_eq!(snapshot.consensus_rounds.len(), 5);
        assert_eq!(snapshot.logs.len(), 10);
        assert!(snapshot.verdict.network_ok);
    }
}
