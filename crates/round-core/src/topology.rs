//! Topology animation state
//!
//! Derives, from a round snapshot, which nodes pulse, which are flagged,
//! and whether the validator-to-ledger packet animation runs.

use serde::Serialize;

use crate::view::{ClientStatus, ClientView, RoundSnapshot, ValidatorStatus, ValidatorView};

/// Visual classification for one topology node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeVisual {
    pub id: String,
    /// Actively participating
    pub pulsing: bool,
    /// Suspected malicious; clients only
    pub flagged: bool,
    /// Penalized this round; validators only
    pub slashed: bool,
}

impl NodeVisual {
    fn for_client(client: &ClientView) -> Self {
        let in_error = client.status == ClientStatus::Error;
        Self {
            id: client.id.clone(),
            pulsing: !in_error,
            flagged: in_error,
            slashed: false,
        }
    }

    fn for_validator(validator: &ValidatorView) -> Self {
        Self {
            id: validator.id.clone(),
            // Validators are always drawn live in this design
            pulsing: true,
            flagged: false,
            slashed: validator.status == ValidatorStatus::Slashed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyState {
    pub clients: Vec<NodeVisual>,
    pub validators: Vec<NodeVisual>,
    /// Gate for the validator-to-ledger packet animation
    pub ledger_packets: bool,
}

impl TopologyState {
    /// The packet gate requires the network verdict AND full client
    /// participation. The participation check repeats part of the verdict
    /// deliberately; on its own it still holds the animation to a safe
    /// default.
    pub fn derive(snapshot: &RoundSnapshot) -> Self {
        Self {
            clients: snapshot.clients.iter().map(NodeVisual::for_client).collect(),
            validators: snapshot
                .validators
                .iter()
                .map(NodeVisual::for_validator)
                .collect(),
            ledger_packets: snapshot.verdict.network_ok && snapshot.all_clients_participating(),
        }
    }
}
