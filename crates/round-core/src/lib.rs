//! Round-result interpretation for the DFLN monitor
//!
//! Takes one backend round response and derives everything the dashboard
//! renders:
//! - View models for clients, validators, consensus rounds, and logs
//! - The round-level consensus verdict (supermajority vs. network health)
//! - Topology animation state (pulsing/flagged/slashed nodes, ledger packets)
//!
//! No machine learning, cryptography, or consensus math happens here; all of
//! that runs in the backend. This crate only interprets a finished round.

pub mod error;
pub mod metrics;
pub mod topology;
pub mod types;
pub mod verdict;
pub mod view;

pub use error::SchemaError;
pub use metrics::NetworkMetrics;
pub use topology::{NodeVisual, TopologyState};
pub use types::{ClientReport, Consensus, RoundResult, ValidatorReport, WinningTally};
pub use verdict::{RoundVerdict, SUPERMAJORITY_PCT};
pub use view::{
    AggregationMethod, ClientStatus, ClientView, ConsensusRoundView, ConsensusStatus, LogEntry,
    LogLevel, MapperOptions, PqcStatus, ReputationScale, RoundSnapshot, ValidatorStatus,
    ValidatorView,
};
