//! Monitor configuration

use round_client::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};

/// Monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Dashboard HTTP bind address
    pub listen_addr: String,
    /// DFLN backend base URL
    pub api_url: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8787".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
